//! Browser task spawning.

use std::future::Future;

/// Run `fut` on the browser event loop; dropped unstarted on the server.
///
/// Network work only happens after hydration: SSR renders whatever state was
/// set before spawning (e.g. loading) and the hydrated client takes over.
/// Native test builds queue the task on a thread-local pool instead, driven
/// by [`test_pool::run_until_stalled`].
pub fn spawn_browser_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(all(test, not(feature = "hydrate")))]
    test_pool::spawn(fut);
    #[cfg(not(any(test, feature = "hydrate")))]
    drop(fut);
}
