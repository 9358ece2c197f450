//! Page-level auth failure alert.

use leptos::prelude::*;

#[component]
pub fn AuthAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="auth-alert" role="alert">
                <span class="auth-alert__icon" aria-hidden="true">"!"</span>
                <p class="auth-alert__text">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
