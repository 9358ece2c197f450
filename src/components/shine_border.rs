//! Animated shine around a card's border.

#[cfg(test)]
#[path = "shine_border_test.rs"]
mod shine_border_test;

use leptos::prelude::*;

pub const DEFAULT_SHINE_COLOR: &str = "#000000";
pub const DEFAULT_DURATION: f64 = 14.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Inline style of the shine overlay: a radial gradient through `colors`
/// whose position the `shine` keyframes sweep over `duration` seconds.
#[must_use]
pub fn shine_style(colors: &[String], duration: f64, border_width: f64) -> String {
    let stops = if colors.is_empty() { DEFAULT_SHINE_COLOR.to_owned() } else { colors.join(",") };
    format!(
        "--border-width: {border_width}px; --duration: {duration}s; \
         background-image: radial-gradient(transparent,transparent,{stops},transparent,transparent); \
         background-size: 300% 300%; padding: var(--border-width);"
    )
}

#[component]
pub fn ShineBorder(
    #[prop(into, default = vec![DEFAULT_SHINE_COLOR.to_owned()])] shine_color: Vec<String>,
    #[prop(default = DEFAULT_DURATION)] duration: f64,
    #[prop(default = DEFAULT_BORDER_WIDTH)] border_width: f64,
) -> impl IntoView {
    view! {
        <div class="shine-border" aria-hidden="true" style=shine_style(&shine_color, duration, border_width)></div>
    }
}
