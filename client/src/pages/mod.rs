//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Private pages do not check the
//! session themselves; `app` wraps them in `RequireSession`.

pub mod booking;
pub mod booking_confirmation;
pub mod discover;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
