//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the only outbound call the client makes: a JSON POST to the
//! sign-in webhook. The rest of the site renders from local data.

pub mod auth;
