//! Labelled text input with an inline error line.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id.clone()>{label}</label>
            <input
                id=id
                class=move || {
                    if error.with(Option::is_some) { "form-field__input form-field__input--error" } else { "form-field__input" }
                }
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {children.map(|c| c())}
            <Show when=move || error.with(Option::is_some)>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
