//! Role home page (`/student/home`, `/teacher/home`).
//!
//! SYSTEM CONTEXT
//! ==============
//! First screen after sign-in. Greets the session user, shows the backend's
//! view of the account (`GET /users/firebase/{firebaseUID}`) and token
//! verification status (`POST /auth/verify`), and offers a change-password
//! form and sign-out. Signed-out visitors go back to `/`; a visitor on the
//! other role's page is moved to their own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::form::check_new_password;
use crate::components::border_beam::BorderBeam;
use crate::components::form_field::FormField;
use crate::hooks::{use_change_password, use_login, use_user_by_firebase_uid};
use crate::net::schema::ChangePasswordBody;
use crate::state::auth::{AuthState, Role};
use crate::util::auth::install_unauth_redirect;
use crate::util::session_persistence;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let route_role = Memo::new(move |_| params.with(|p| p.get("role")).and_then(|r| r.parse::<Role>().ok()));

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(user) = state.user else {
            return;
        };
        if route_role.get() != Some(user.role) {
            navigate(user.role.home_route(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let firebase_uid = Signal::derive(move || auth.with(|a| a.user.as_ref().map(|u| u.uid.clone()).unwrap_or_default()));
    let profile = use_user_by_firebase_uid(firebase_uid);
    let verification = use_login();

    let greeting = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
                .unwrap_or_default()
        })
    };

    // The unauth redirect takes the user back to the auth page.
    let on_sign_out = move |_| {
        session_persistence::clear();
        auth.update(AuthState::sign_out);
    };

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header">
                    <span class="home-page__brand">"Poll Question Generation"</span>
                    <span class="home-page__spacer"></span>
                    <span class="home-page__role">{move || route_role.get().map(Role::label).unwrap_or_default()}</span>
                    <button class="btn btn--outline" on:click=on_sign_out>"Sign out"</button>
                </header>

                <section class="home-card">
                    <BorderBeam size=80.0 duration=8.0 />
                    <h1 class="home-card__title">{move || format!("Welcome, {}", greeting())}</h1>
                    <ProfileSummary profile=profile.data is_loading=profile.is_loading error=profile.error />
                    <p class="home-card__status">
                        {move || {
                            if verification.is_loading.get() {
                                "Verifying session...".to_owned()
                            } else if let Some(e) = verification.error.get() {
                                e
                            } else {
                                verification
                                    .data
                                    .get()
                                    .and_then(|r| r.message)
                                    .unwrap_or_else(|| "Session verified".to_owned())
                            }
                        }}
                    </p>
                    <button class="link" on:click=move |_| verification.refetch.run(())>"Verify again"</button>
                </section>

                <ChangePasswordCard />
            </div>
        </Show>
    }
}

#[component]
fn ProfileSummary(
    profile: Signal<Option<crate::net::schema::UserRecord>>,
    is_loading: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="profile">
            {move || {
                if is_loading.get() {
                    view! { <p class="profile__muted">"Loading profile..."</p> }.into_any()
                } else if let Some(e) = error.get() {
                    view! { <p class="profile__error">{e}</p> }.into_any()
                } else if let Some(user) = profile.get() {
                    view! {
                        <dl class="profile__fields">
                            <dt>"Name"</dt>
                            <dd>{user.display_name()}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                            <dt>"Role"</dt>
                            <dd>{user.role.unwrap_or_default()}</dd>
                        </dl>
                    }
                    .into_any()
                } else {
                    view! { <p class="profile__muted">"No profile yet."</p> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ChangePasswordCard() -> impl IntoView {
    let change = use_change_password();
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if change.is_pending() {
            return;
        }
        let (password, confirmation) = (new_password.get_untracked(), confirm.get_untracked());
        if let Err(message) = check_new_password(&password, &confirmation) {
            field_error.set(Some(message.to_owned()));
            return;
        }
        field_error.set(None);
        change.mutate(ChangePasswordBody { new_password: password, new_password_confirm: confirmation });
    };

    view! {
        <section class="home-card">
            <h2 class="home-card__title">"Change password"</h2>
            <form class="change-password" on:submit=on_submit>
                <FormField
                    id="new-password"
                    label="New Password"
                    input_type="password"
                    placeholder="Create a strong password"
                    value=new_password
                    error=field_error
                />
                <FormField
                    id="new-password-confirm"
                    label="Confirm Password"
                    input_type="password"
                    placeholder="Confirm your password"
                    value=confirm
                    error=Signal::derive(move || change.error())
                />
                <button class="btn btn--primary" type="submit" disabled=move || change.is_pending()>
                    {move || if change.is_pending() { "Saving..." } else { "Update password" }}
                </button>
                <Show when=move || change.is_success()>
                    <p class="change-password__ok">
                        {move || change.data().map(|r| r.message).filter(|m| !m.is_empty()).unwrap_or_else(|| "Password updated".to_owned())}
                    </p>
                </Show>
            </form>
        </section>
    }
}
