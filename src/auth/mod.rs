//! Sign-in / sign-up logic behind the auth page.
//!
//! ARCHITECTURE
//! ============
//! `form` and `strength` are synchronous validation, `provider` is the
//! identity-provider seam with `firebase` as its browser implementation, and
//! `submit` orchestrates one attempt: validate, call the provider, build the
//! session user or the error sentence to show.

pub mod firebase;
pub mod form;
pub mod provider;
pub mod strength;
pub mod submit;
