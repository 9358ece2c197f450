//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::firebase::FirebaseAuth;
use crate::config::AppConfig;
use crate::net::client::ApiClient;
use crate::pages::{auth::AuthPage, home::HomePage};
use crate::state::auth::AuthState;
use crate::util::session_persistence;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Publishes the public client config as `<meta>` tags for the hydrated
/// client to read back.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    let meta = config
        .meta_entries()
        .into_iter()
        .map(|(name, content)| view! { <meta name=name content=content/> })
        .collect_view();
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {meta}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, the API client and the identity provider,
/// then restores any stored session once running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_document);

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(ApiClient::new(&config.api_base_url));
    provide_context(FirebaseAuth::new(&config.identity_base_url, &config.firebase_api_key));

    // Effects only run after hydration, so SSR always renders the loading state.
    Effect::new(move || {
        auth.update(|a| a.restore(session_persistence::load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pollgen-web.css"/>
        <Title text="Poll Question Generation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=(ParamSegment("role"), StaticSegment("home")) view=HomePage/>
            </Routes>
        </Router>
    }
}
