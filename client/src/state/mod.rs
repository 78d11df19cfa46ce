//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns who is signed in; `navigation` remembers where a redirected
//! visitor wanted to go. Both are wrapped in `RwSignal`s at the app root and
//! reached through context.

pub mod navigation;
pub mod session;
