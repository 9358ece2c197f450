//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `schema` holds the wire DTOs, `operation` the static endpoint registry,
//! `client` the single generic executor, `transport` the browser HTTP seam,
//! `error` the failure taxonomy, and `lifecycle` the request state machines
//! the hook layer renders from.

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod operation;
pub mod schema;
pub mod transport;
