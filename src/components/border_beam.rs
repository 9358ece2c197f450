//! Beam of light travelling along the border of its positioned parent.
//!
//! DESIGN
//! ======
//! The beam follows `offset-path` around the parent's rounded rectangle. The
//! `border-beam` keyframes in `style/main.css` animate `offset-distance`
//! between the `--beam-start` and `--beam-end` custom properties set here, so
//! every per-instance knob stays in the inline style.

#[cfg(test)]
#[path = "border_beam_test.rs"]
mod border_beam_test;

use leptos::prelude::*;

pub const DEFAULT_SIZE: f64 = 50.0;
pub const DEFAULT_DURATION: f64 = 6.0;
pub const DEFAULT_COLOR_FROM: &str = "#ffaa40";
pub const DEFAULT_COLOR_TO: &str = "#9c40ff";

/// Everything that shapes one beam.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamSettings {
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub color_from: String,
    pub color_to: String,
    pub reverse: bool,
    pub initial_offset: f64,
}

impl Default for BeamSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            duration: DEFAULT_DURATION,
            delay: 0.0,
            color_from: DEFAULT_COLOR_FROM.to_owned(),
            color_to: DEFAULT_COLOR_TO.to_owned(),
            reverse: false,
            initial_offset: 0.0,
        }
    }
}

/// Start and end `offset-distance` percentages of one loop.
#[must_use]
pub fn keyframe_offsets(reverse: bool, initial_offset: f64) -> (f64, f64) {
    if reverse {
        (100.0 - initial_offset, 0.0 - initial_offset)
    } else {
        (initial_offset, 100.0 + initial_offset)
    }
}

/// Inline style of the moving beam element.
#[must_use]
pub fn beam_style(settings: &BeamSettings) -> String {
    let (start, end) = keyframe_offsets(settings.reverse, settings.initial_offset);
    let size = settings.size;
    // Negative delay starts the loop part-way through instead of waiting.
    format!(
        "width: {size}px; offset-path: rect(0 auto auto 0 round {size}px); \
         --color-from: {from}; --color-to: {to}; \
         --beam-start: {start}%; --beam-end: {end}%; offset-distance: {start}%; \
         animation: border-beam {duration}s linear {delay}s infinite;",
        from = settings.color_from,
        to = settings.color_to,
        duration = settings.duration,
        delay = 0.0 - settings.delay,
    )
}

#[component]
pub fn BorderBeam(
    #[prop(default = DEFAULT_SIZE)] size: f64,
    #[prop(default = DEFAULT_DURATION)] duration: f64,
    #[prop(default = 0.0)] delay: f64,
    #[prop(into, default = DEFAULT_COLOR_FROM.to_owned())] color_from: String,
    #[prop(into, default = DEFAULT_COLOR_TO.to_owned())] color_to: String,
    #[prop(default = false)] reverse: bool,
    #[prop(default = 0.0)] initial_offset: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let style = beam_style(&BeamSettings {
        size,
        duration,
        delay,
        color_from,
        color_to,
        reverse,
        initial_offset,
    });

    view! {
        <div class="border-beam" aria-hidden="true">
            <div class=format!("border-beam__beam {class}") style=style></div>
        </div>
    }
}
