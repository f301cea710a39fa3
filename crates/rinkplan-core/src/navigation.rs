#![forbid(unsafe_code)]

//! Injected read-only location capability.
//!
//! The planner reads the page origin and query string exactly once, at
//! startup, through a [`NavigationContext`] the host supplies. It never
//! navigates.

/// Read-only view of the host's current location.
pub trait NavigationContext {
    /// The page origin the share URL is built against
    /// (e.g. `https://rink.example`).
    fn origin(&self) -> &str;

    /// The current query string, with or without a leading `?`.
    fn query(&self) -> &str;
}

/// A fixed location, for hosts that capture origin and query up front
/// and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation {
    origin: String,
    query: String,
}

impl StaticLocation {
    /// Location with both origin and query.
    #[must_use]
    pub fn new(origin: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            query: query.into(),
        }
    }

    /// Location with an empty query.
    #[must_use]
    pub fn origin_only(origin: impl Into<String>) -> Self {
        Self::new(origin, "")
    }
}

impl NavigationContext for StaticLocation {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn query(&self) -> &str {
        &self.query
    }
}
