//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser/environment concerns (storage, task spawning, route guards)
//! out of page and component logic.

pub mod auth;
pub mod session_persistence;
pub mod task;
