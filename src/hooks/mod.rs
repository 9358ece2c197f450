//! Typed data hooks over the backend operations.
//!
//! # Hook contract
//!
//! Query hooks return a [`QueryResult`]: reactive `data`, `is_loading`,
//! `error` and a `refetch` callback. They fetch once their parameters are
//! available and again whenever the parameters change or `refetch` runs.
//!
//! Mutation hooks return a [`MutationHandle`]: `mutate` (fire-and-forget),
//! `mutate_async` (awaitable), `reset`, and reactive accessors for `data`,
//! `error`, `status` and the `is_*` flags.
//!
//! In both, `error` is the failure's own message when it has one, otherwise
//! the operation's fallback sentence, otherwise `None`. Nothing is retried and
//! no failure escapes the hook as a panic; a superseded request never
//! overwrites the state of the one that replaced it.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod users;

pub use auth::{use_change_password, use_login, use_signup, use_verify_sign_up_provider};
pub use users::use_user_by_firebase_uid;

use std::future::Future;
use std::marker::PhantomData;

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::lifecycle::{MutationState, MutationStatus, QueryState};
use crate::net::operation::{MutationOperation, QueryOperation};
use crate::state::auth::AuthState;
use crate::util::task::spawn_browser_task;

/// The context API client plus the session whose token it sends.
#[derive(Clone)]
struct SessionClient {
    client: ApiClient,
    auth: Option<RwSignal<AuthState>>,
}

impl SessionClient {
    fn from_context() -> Self {
        Self {
            client: expect_context::<ApiClient>(),
            auth: use_context::<RwSignal<AuthState>>(),
        }
    }

    /// Client carrying the bearer token as of now.
    fn current(&self) -> ApiClient {
        let token = self
            .auth
            .and_then(|auth| auth.try_with_untracked(|s| s.id_token().map(str::to_owned)))
            .flatten();
        self.client.with_bearer(token)
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Reactive view of a query hook.
pub struct QueryResult<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryResult<T> {}

/// Bind query operation `O`.
///
/// `params` is tracked: it returns `None` while the query cannot run yet
/// (e.g. no user id), and every change to a new `Some` value starts a fetch.
/// Params available at bind time are fetched at once, so the first render
/// already reports `is_loading`.
pub fn use_query<O: QueryOperation>(params: impl Fn() -> Option<O::Params> + Send + Sync + 'static) -> QueryResult<O::Response> {
    let session = SessionClient::from_context();
    let state = RwSignal::new(QueryState::<O::Response>::default());
    let initial = params();
    let latest = StoredValue::new(initial.clone());

    if let Some(params) = initial {
        start_query::<O>(session.current(), state, params);
    }

    let refetch = {
        let session = session.clone();
        Callback::new(move |()| {
            if let Some(params) = latest.get_value() {
                start_query::<O>(session.current(), state, params);
            }
        })
    };

    Effect::new(move || {
        let next = params();
        if latest.with_value(|current| *current == next) {
            return;
        }
        latest.set_value(next.clone());
        if let Some(params) = next {
            start_query::<O>(session.current(), state, params);
        }
    });

    QueryResult {
        data: Signal::derive(move || state.with(|s| s.data().cloned())),
        is_loading: Signal::derive(move || state.with(QueryState::is_loading)),
        error: Signal::derive(move || state.with(|s| s.error_message(O::FALLBACK_ERROR))),
        refetch,
    }
}

/// Mark `state` loading now and settle it when the request lands.
fn start_query<O: QueryOperation>(client: ApiClient, state: RwSignal<QueryState<O::Response>>, params: O::Params) {
    let Some(ticket) = state.try_update(QueryState::begin) else {
        return;
    };
    spawn_browser_task(async move {
        let result = client.execute::<O>(&params, None).await;
        let _ = state.try_update(|s| s.settle(ticket, result));
    });
}

// =============================================================================
// Mutations
// =============================================================================

/// Handle returned by mutation hooks. `Copy`, so it can move into any number
/// of event handlers.
pub struct MutationHandle<O: MutationOperation> {
    state: RwSignal<MutationState<O::Response>>,
    session: StoredValue<SessionClient>,
    _op: PhantomData<fn() -> O>,
}

impl<O: MutationOperation> Clone for MutationHandle<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: MutationOperation> Copy for MutationHandle<O> {}

/// Bind mutation operation `O`.
pub fn use_mutation<O: MutationOperation>() -> MutationHandle<O> {
    MutationHandle {
        state: RwSignal::new(MutationState::default()),
        session: StoredValue::new(SessionClient::from_context()),
        _op: PhantomData,
    }
}

impl<O: MutationOperation> MutationHandle<O> {
    /// Fire the mutation; the outcome is observed through the accessors.
    pub fn mutate(&self, body: O::Body) {
        let pending = self.mutate_async(body);
        spawn_browser_task(async move {
            let _ = pending.await;
        });
    }

    /// Fire the mutation and await its normalized outcome: the decoded
    /// response, `None` for an empty success body, or the error message.
    ///
    /// The state moves to `Pending` immediately, before the future is polled.
    pub fn mutate_async(&self, body: O::Body) -> impl Future<Output = Result<Option<O::Response>, String>> + 'static {
        let state = self.state;
        let client = self.session.try_with_value(SessionClient::current);
        let ticket = state.try_update(MutationState::begin);
        async move {
            let (Some(client), Some(ticket)) = (client, ticket) else {
                return Err(O::FALLBACK_ERROR.to_owned());
            };
            let result = client.execute::<O>(&(), Some(&body)).await;
            let outcome = result
                .clone()
                .map_err(|e| e.message().unwrap_or_else(|| O::FALLBACK_ERROR.to_owned()));
            let _ = state.try_update(|s| s.settle(ticket, result));
            outcome
        }
    }

    /// Return to `Idle`, discarding any result still in flight.
    pub fn reset(&self) {
        self.state.update(MutationState::reset);
    }

    pub fn data(&self) -> Option<O::Response> {
        self.state.with(|s| s.data().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error_message(O::FALLBACK_ERROR))
    }

    pub fn status(&self) -> MutationStatus {
        self.state.with(MutationState::status)
    }

    pub fn is_idle(&self) -> bool {
        self.status() == MutationStatus::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.status() == MutationStatus::Pending
    }

    pub fn is_success(&self) -> bool {
        self.status() == MutationStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status() == MutationStatus::Error
    }
}
