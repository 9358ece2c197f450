//! Browser-local session record.
//!
//! The signed-in [`SessionUser`] is stored as JSON under `pollgen_session` in
//! `localStorage` so a reload keeps the user signed in. This is the only data
//! the client persists.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op and an
//! unreadable record is treated as signed out.

#[cfg(test)]
#[path = "session_persistence_test.rs"]
mod session_persistence_test;

use crate::state::auth::SessionUser;

pub const STORAGE_KEY: &str = "pollgen_session";

#[must_use]
pub fn encode(user: &SessionUser) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Parse a stored record; anything malformed reads as no session.
#[must_use]
pub fn decode(raw: &str) -> Option<SessionUser> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session user, if any.
pub fn load() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save(user: &SessionUser) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Some(raw)) = (storage(), encode(user)) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
