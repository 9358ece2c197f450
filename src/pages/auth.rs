//! Auth page: hero, feature grid and the sign-in / sign-up card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. A successful attempt writes the session user into the
//! `RwSignal<AuthState>` context, persists it to `localStorage`, and navigates
//! to `/{role}/home`. Signed-in visitors are sent there directly.
//!
//! ERROR HANDLING
//! ==============
//! Field errors render under their inputs and block submission; provider
//! failures become one sentence in the card alert. Field values survive a
//! failed attempt.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::firebase::FirebaseAuth;
use crate::auth::form::{AuthForm, AuthMode, FormErrors, PASSWORDS_MISMATCH, check_sign_in, check_sign_up, passwords_match};
use crate::auth::strength::{MIN_SIGN_UP_STRENGTH, password_strength};
use crate::auth::submit::{submit_email_sign_in, submit_email_sign_up, submit_google};
use crate::components::auth_alert::AuthAlert;
use crate::components::form_field::FormField;
use crate::components::landing::{BackdropLines, Hero};
use crate::components::shine_border::ShineBorder;
use crate::components::strength_meter::StrengthMeter;
use crate::components::tabs::{Tabs, TabsList, TabsTrigger};
use crate::state::auth::{AuthState, Role, SessionUser};
use crate::util::auth::install_authed_redirect;
use crate::util::session_persistence;
use crate::util::task::spawn_browser_task;

const CARD_SHINE: [&str; 3] = ["#3B82F6", "#10B981", "#6366F1"];

/// Record a signed-in user. The authed-redirect effect then leaves for
/// their home route.
fn complete_sign_in(auth: RwSignal<AuthState>, user: SessionUser) {
    session_persistence::save(&user);
    auth.update(|a| a.set_user(user));
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let provider = StoredValue::new(expect_context::<FirebaseAuth>());

    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let mode = RwSignal::new(AuthMode::SignIn);
    let role = RwSignal::new(auth.with_untracked(|a| a.selected_role));
    let loading = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());

    let current_form = move || AuthForm {
        email: email.get_untracked(),
        password: password.get_untracked(),
        confirm_password: confirm_password.get_untracked(),
        full_name: full_name.get_untracked(),
    };

    let toggle_mode = move |_| {
        mode.update(|m| *m = m.toggled());
        errors.set(FormErrors::default());
    };

    // Marks the attempt busy and returns the provider and role to use.
    let begin_attempt = move || {
        let selected = role.get_untracked();
        loading.set(true);
        errors.set(FormErrors::default());
        auth.update(|a| a.set_user_role(selected));
        (provider.get_value(), selected)
    };

    let finish_attempt = move |outcome: Result<SessionUser, FormErrors>| {
        match outcome {
            Ok(user) => complete_sign_in(auth, user),
            Err(e) => errors.set(e),
        }
        loading.set(false);
    };

    let on_google = move |_| {
        if loading.get_untracked() {
            return;
        }
        let (provider, selected) = begin_attempt();
        spawn_browser_task(async move {
            finish_attempt(submit_google(&provider, selected).await);
        });
    };

    let on_email_sign_in = move |_| {
        if loading.get_untracked() {
            return;
        }
        let form = current_form();
        if let Err(e) = check_sign_in(&form) {
            errors.set(e);
            return;
        }
        let (provider, selected) = begin_attempt();
        spawn_browser_task(async move {
            finish_attempt(submit_email_sign_in(&provider, &form, selected).await);
        });
    };

    let on_email_sign_up = move |_| {
        if loading.get_untracked() {
            return;
        }
        let form = current_form();
        if let Err(e) = check_sign_up(&form) {
            errors.set(e);
            return;
        }
        let (provider, selected) = begin_attempt();
        spawn_browser_task(async move {
            finish_attempt(submit_email_sign_up(&provider, &form, selected).await);
        });
    };

    let strength = Memo::new(move |_| password.with(|p| password_strength(p).value));
    let mismatch = Signal::derive(move || !password.with(|p| confirm_password.with(|c| passwords_match(p, c))));
    let sign_up_blocked = move || mismatch.get() || strength.get() < MIN_SIGN_UP_STRENGTH || loading.get();

    let email_error = Signal::derive(move || errors.with(|e| e.email.clone()));
    let password_error = Signal::derive(move || errors.with(|e| e.password.clone()));
    let full_name_error = Signal::derive(move || errors.with(|e| e.full_name.clone()));
    let auth_error = Signal::derive(move || errors.with(|e| e.auth.clone()));
    let confirm_error = Signal::derive(move || mismatch.get().then(|| PASSWORDS_MISMATCH.to_owned()));

    let sign_in_card = move || {
        view! {
            <div class="auth-card__section" data-mode="sign-in">
                <div class="auth-card__header">
                    <Tabs
                        default_value=Role::Student.as_str()
                        class="auth-card__roles"
                        value=Signal::derive(move || role.get().as_str().to_owned())
                        on_value_change=Callback::new(move |v: String| {
                            if let Ok(r) = v.parse::<Role>() {
                                role.set(r);
                            }
                        })
                    >
                        <TabsList class="auth-card__role-list">
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <TabsTrigger value=r.as_str()>{r.label()}</TabsTrigger> })
                                .collect_view()}
                        </TabsList>
                    </Tabs>
                </div>
                <div class="auth-card__body">
                    <AuthAlert message=auth_error />
                    <FormField
                        id="email"
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=email_error
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        error=password_error
                    />
                    <button class="btn btn--primary" on:click=on_email_sign_in disabled=move || loading.get()>
                        <Show when=move || loading.get()>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        {move || format!("Sign in as {}", role.get())}
                    </button>
                    <div class="auth-card__divider">
                        <span>"OR CONTINUE WITH"</span>
                    </div>
                    <button class="btn btn--outline" on:click=on_google disabled=move || loading.get()>
                        <img src="https://www.gstatic.com/firebasejs/ui/2.0.0/images/auth/google.svg" alt="Google" class="btn__icon" />
                        "Continue with Google"
                    </button>
                </div>
                <div class="auth-card__footer">
                    <span>
                        "Don't have an account? "
                        <button class="link" on:click=toggle_mode>"Sign up"</button>
                    </span>
                </div>
            </div>
        }
    };

    let sign_up_card = move || {
        view! {
            <div class="auth-card__section" data-mode="sign-up">
                <div class="auth-card__header">
                    <h3 class="auth-card__title">{move || format!("Create {} Account", role.get().label())}</h3>
                    <p class="auth-card__description">
                        "Join our platform to participate in classroom polls and activities"
                    </p>
                </div>
                <div class="auth-card__body">
                    <AuthAlert message=auth_error />
                    <FormField
                        id="fullName"
                        label="Full Name"
                        placeholder="Enter your full name"
                        value=full_name
                        error=full_name_error
                    />
                    <FormField
                        id="signup-email"
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=email_error
                    />
                    <FormField
                        id="signup-password"
                        label="Password"
                        input_type="password"
                        placeholder="Create a strong password"
                        value=password
                        error=password_error
                    >
                        <Show when=move || password.with(|p| !p.is_empty())>
                            <StrengthMeter password=password />
                        </Show>
                    </FormField>
                    <FormField
                        id="confirmPassword"
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                        value=confirm_password
                        error=confirm_error
                    />
                    <button class="btn btn--primary btn--tall" on:click=on_email_sign_up disabled=sign_up_blocked>
                        {move || if loading.get() {
                            view! { <span class="spinner" aria-hidden="true"></span> }.into_any()
                        } else {
                            "Create Account".into_any()
                        }}
                    </button>
                </div>
                <div class="auth-card__footer">
                    <button class="link link--muted" on:click=toggle_mode>
                        "Already have an account? "
                        <span class="link__strong">"Sign in"</span>
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <BackdropLines />
            <section class="auth-page__hero">
                <Hero />
                <div class="auth-page__panel">
                    <div class="auth-page__intro">
                        <h2>{move || match mode.get() {
                            AuthMode::SignIn => "Welcome Back",
                            AuthMode::SignUp => "Create Account",
                        }}</h2>
                        <p>{move || match mode.get() {
                            AuthMode::SignIn => "Sign in to access your poll dashboard",
                            AuthMode::SignUp => "Join educators worldwide transforming their classrooms",
                        }}</p>
                    </div>
                    <div class="auth-card">
                        <ShineBorder shine_color=CARD_SHINE.map(str::to_owned).to_vec() duration=8.0 border_width=2.0 />
                        {move || match mode.get() {
                            AuthMode::SignIn => sign_in_card().into_any(),
                            AuthMode::SignUp => sign_up_card().into_any(),
                        }}
                    </div>
                </div>
            </section>
        </div>
    }
}
