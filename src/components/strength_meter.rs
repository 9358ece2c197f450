//! Password strength bar and criteria checklist for the sign-up card.

use leptos::prelude::*;

use crate::auth::strength::{PasswordCriteria, password_strength};

#[component]
pub fn StrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));
    let criteria = Memo::new(move |_| password.with(|p| PasswordCriteria::evaluate(p)));

    let check = move |met: bool| if met { "strength__check strength__check--met" } else { "strength__check" };

    view! {
        <div class="strength">
            <div class="strength__header">
                <span class="strength__caption">"Password strength"</span>
                <span class=move || format!("strength__label {}", strength.get().label.text_class())>
                    {move || strength.get().label.as_str()}
                </span>
            </div>
            <div class="strength__track">
                <div
                    class=move || format!("strength__bar {}", strength.get().label.bar_class())
                    style=move || format!("width: {}%", strength.get().value)
                ></div>
            </div>
            <div class="strength__criteria">
                <span class=move || check(criteria.get().min_length)>"8+ characters"</span>
                <span class=move || check(criteria.get().uppercase)>"Uppercase"</span>
                <span class=move || check(criteria.get().digit)>"Numbers"</span>
                <span class=move || check(criteria.get().special)>"Special chars"</span>
            </div>
        </div>
    }
}
