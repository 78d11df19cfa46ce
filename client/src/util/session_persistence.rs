//! Browser localStorage persistence for the signed-in identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root loads the stored identity once after hydration and writes it
//! back whenever the session changes. Only `Identity` is stored; transient
//! states (authenticating, failed) never survive a reload.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native builds
//! no-op, and an unreadable entry reads as "nobody signed in".

#[cfg(test)]
#[path = "session_persistence_test.rs"]
mod session_persistence_test;

use crate::state::session::{Identity, Session};

pub const STORAGE_KEY: &str = "wayfarer_session";

/// Decode a stored entry. Corrupt or incomplete JSON reads as absent.
pub fn decode_identity(raw: &str) -> Option<Identity> {
    let identity: Identity = serde_json::from_str(raw).ok()?;
    if identity.email.trim().is_empty() {
        return None;
    }
    Some(identity)
}

/// The value that should be stored for `session`, if any.
pub fn persisted_identity(session: &Session) -> Option<&Identity> {
    session.identity()
}

/// Load the stored identity from `localStorage`.
pub fn load_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let identity = decode_identity(&raw);
        if identity.is_none() {
            leptos::logging::warn!("ignoring unreadable stored session");
            let _ = storage.remove_item(STORAGE_KEY);
        }
        identity
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store `session`'s identity, or clear the entry when there is none.
pub fn save_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match persisted_identity(session) {
            Some(identity) => {
                let Ok(raw) = serde_json::to_string(identity) else {
                    return;
                };
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
            None => {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
