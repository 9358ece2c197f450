//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided once at the application root as `RwSignal` contexts and
//! passed down explicitly; nothing here is a process-wide singleton.

pub mod auth;
