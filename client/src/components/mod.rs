//! Reusable UI components.

pub mod require_session;
pub mod site_header;
