//! Request lifecycle state machines for queries and mutations.
//!
//! DESIGN
//! ======
//! Each state carries a generation counter. `begin` hands out a ticket and
//! `settle` only applies a result whose ticket is still the in-flight one, so
//! a refetch, a second `mutate`, or a `reset` silently discards the result of
//! the request it superseded. These types are plain data; the hook layer
//! wraps them in signals.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use super::error::{ApiError, normalize_error};

/// Ticket identifying one started request.
pub type Ticket = u64;

/// State behind a query hook.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    data: Option<T>,
    error: Option<ApiError>,
    in_flight: Option<Ticket>,
    generation: Ticket,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self { data: None, error: None, in_flight: None, generation: 0 }
    }
}

impl<T> QueryState<T> {
    /// Start a (re)fetch. Any earlier in-flight request is superseded.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.generation
    }

    /// Apply a result. Returns `false` and changes nothing for stale tickets.
    ///
    /// Errors keep the last good data so a failed refetch does not blank the
    /// view. A success without a body clears it.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Option<T>, ApiError>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn raw_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Error message for display: underlying message, else `fallback`.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> Option<String> {
        normalize_error(self.error.as_ref(), fallback)
    }
}

/// Lifecycle phase of a mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl MutationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// State behind a mutation hook.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationState<T> {
    status: MutationStatus,
    data: Option<T>,
    error: Option<ApiError>,
    in_flight: Option<Ticket>,
    generation: Ticket,
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self {
            status: MutationStatus::Idle,
            data: None,
            error: None,
            in_flight: None,
            generation: 0,
        }
    }
}

impl<T> MutationState<T> {
    /// Enter `Pending`, clearing the previous outcome.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.status = MutationStatus::Pending;
        self.data = None;
        self.error = None;
        self.generation
    }

    /// Apply a result. Returns `false` and changes nothing for stale tickets.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Option<T>, ApiError>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(data) => {
                self.status = MutationStatus::Success;
                self.data = data;
            }
            Err(err) => {
                self.status = MutationStatus::Error;
                self.error = Some(err);
            }
        }
        true
    }

    /// Back to `Idle`; a request still in flight will be ignored when it lands.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.status = MutationStatus::Idle;
        self.data = None;
        self.error = None;
    }

    #[must_use]
    pub fn status(&self) -> MutationStatus {
        self.status
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn raw_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn error_message(&self, fallback: &str) -> Option<String> {
        normalize_error(self.error.as_ref(), fallback)
    }
}
