//! Where a visitor was headed before being sent to sign in.
//!
//! Holds at most one destination. A new redirect overwrites the old one, and
//! the sign-in page consumes it on success.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Requested location captured when an unauthenticated visit is redirected.
///
/// `query` is the raw search string (including the leading `?`), kept so the
/// visitor lands on the same filtered view they asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntendedDestination {
    pub path: String,
    pub query: Option<String>,
}

impl IntendedDestination {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = if query.is_empty() || query == "?" { None } else { Some(query) };
        Self { path: path.into(), query }
    }

    /// Path plus query string, ready to hand to the router.
    pub fn href(&self) -> String {
        match &self.query {
            Some(query) if query.starts_with('?') => format!("{}{query}", self.path),
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    intended: Option<IntendedDestination>,
}

impl NavigationState {
    pub fn remember(&mut self, destination: IntendedDestination) {
        self.intended = Some(destination);
    }

    pub fn take(&mut self) -> Option<IntendedDestination> {
        self.intended.take()
    }

    pub fn peek(&self) -> Option<&IntendedDestination> {
        self.intended.as_ref()
    }
}
