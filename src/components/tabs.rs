//! Tabs with controlled or uncontrolled selection.
//!
//! DESIGN
//! ======
//! `Tabs` keeps an internal value seeded from `default_value`. When the
//! parent passes `value` that wins and the internal value is left alone;
//! either way `on_value_change` hears every selection. Triggers reach the
//! active value through [`TabsContext`].

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use leptos::prelude::*;

/// Selection as seen by triggers.
#[derive(Clone, Copy)]
pub struct TabsContext {
    pub active: Signal<String>,
    pub select: Callback<String>,
}

/// Active value: an explicit `controlled` value wins over internal state.
#[must_use]
pub fn resolve_active(controlled: Option<&str>, internal: &str) -> String {
    controlled.unwrap_or(internal).to_owned()
}

/// Whether a selection should be written to internal state.
#[must_use]
pub fn updates_internal(controlled: bool) -> bool {
    !controlled
}

/// Build the selection context for one `Tabs` instance.
pub fn tabs_context(default_value: String, value: Option<Signal<String>>, on_value_change: Option<Callback<String>>) -> TabsContext {
    let internal = RwSignal::new(default_value);
    let active = Signal::derive(move || {
        let controlled = value.map(|v| v.get());
        internal.with(|i| resolve_active(controlled.as_deref(), i))
    });
    let select = Callback::new(move |next: String| {
        if updates_internal(value.is_some()) {
            internal.set(next.clone());
        }
        if let Some(cb) = on_value_change {
            cb.run(next);
        }
    });
    TabsContext { active, select }
}

#[component]
pub fn Tabs(
    #[prop(into)] default_value: String,
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] on_value_change: Option<Callback<String>>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = tabs_context(default_value, value, on_value_change);
    provide_context(ctx);

    view! {
        <div class=format!("tabs {class}") data-value=move || ctx.active.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn TabsList(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("tabs__list {class}") role="tablist">{children()}</div> }
}

#[component]
pub fn TabsTrigger(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let is_active = {
        let value = value.clone();
        Signal::derive(move || ctx.active.with(|a| *a == value))
    };
    let on_click = {
        let value = value.clone();
        move |_| ctx.select.run(value.clone())
    };

    view! {
        <button
            type="button"
            role="tab"
            class=move || if is_active.get() { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
            aria-selected=move || is_active.get().to_string()
            data-value=value
            data-state=move || if is_active.get() { "active" } else { "inactive" }
            on:click=on_click
        >
            {children()}
        </button>
    }
}
