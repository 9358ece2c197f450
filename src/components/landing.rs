//! Marketing hero and feature grid shown beside the auth card.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

pub const HEADLINE: &str = "Poll Question Generation";
pub const TAGLINE: &str = "Transform classroom engagement with real-time polling and instant feedback";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Users,
    Pulse,
    Chart,
    Monitor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Accent used for the icon chip and title.
    pub accent: &'static str,
    pub icon: FeatureIcon,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Engage Students",
        description: "Increase participation with live polls and interactive questions during lectures.",
        accent: "blue",
        icon: FeatureIcon::Users,
    },
    Feature {
        title: "Instant Feedback",
        description: "Get real-time insights into student understanding to adjust your teaching.",
        accent: "green",
        icon: FeatureIcon::Pulse,
    },
    Feature {
        title: "Track Progress",
        description: "Monitor class performance over time with detailed analytics.",
        accent: "purple",
        icon: FeatureIcon::Chart,
    },
    Feature {
        title: "Easy Setup",
        description: "Create and launch polls in seconds with our intuitive interface.",
        accent: "indigo",
        icon: FeatureIcon::Monitor,
    },
];

fn icon_view(icon: FeatureIcon) -> AnyView {
    match icon {
        FeatureIcon::Users => view! {
            <svg class="feature__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"></path>
                <circle cx="9" cy="7" r="4"></circle>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"></path>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
            </svg>
        }
        .into_any(),
        FeatureIcon::Pulse => view! {
            <svg class="feature__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M22 12h-4l-3 9L9 3l-3 9H2"></path>
            </svg>
        }
        .into_any(),
        FeatureIcon::Chart => view! {
            <svg class="feature__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M3 3v18h18"></path>
                <path d="M18.7 8l-5.1 5.2-2.8-2.7L7 14.3"></path>
            </svg>
        }
        .into_any(),
        FeatureIcon::Monitor => view! {
            <svg class="feature__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="2" y="3" width="20" height="14" rx="2" ry="2"></rect>
                <line x1="8" y1="21" x2="16" y2="21"></line>
                <line x1="12" y1="17" x2="12" y2="21"></line>
            </svg>
        }
        .into_any(),
    }
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|f| {
            view! {
                <div class="feature">
                    <div class="feature__heading">
                        <span class=format!("feature__chip feature__chip--{}", f.accent)>{icon_view(f.icon)}</span>
                        <span class=format!("feature__title feature__title--{}", f.accent)>{f.title}</span>
                    </div>
                    <span class="feature__text">{f.description}</span>
                </div>
            }
        })
        .collect_view();

    view! { <div class="feature-grid">{cards}</div> }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">{HEADLINE}</h1>
            <p class="hero__tagline">{TAGLINE}</p>
            <FeatureGrid />
        </div>
    }
}

/// Background decoration: diagonal line pattern plus two zig-zag polylines.
#[component]
pub fn BackdropLines() -> impl IntoView {
    view! {
        <div class="backdrop-pattern" aria-hidden="true"></div>
        <svg class="backdrop-lines" viewBox="0 0 900 400" fill="none" aria-hidden="true">
            <polyline points="0,400 200,0 400,400 600,0 800,400 900,200" stroke="#6c3eb6" stroke-width="2" fill="none"></polyline>
            <polyline points="100,400 300,0 500,400 700,0 900,400" stroke="#a084e8" stroke-width="1.5" fill="none"></polyline>
        </svg>
    }
}
