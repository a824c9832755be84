//! Search configuration for the route enumerator.

use chrono::Duration;

use crate::domain::LayoverWindow;

/// Which airports a route must not return to when it is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// Reject a candidate leg whose source already departs some leg of the
    /// route. The route's final destination is not consulted, so a route may
    /// land back on its origin once (A->B->A) before being cut off.
    SourcesOnly,

    /// Additionally reject a candidate leg whose destination is already an
    /// endpoint of any leg. Every route is then a simple path.
    #[default]
    AnyEndpoint,
}

/// Configuration parameters for route enumeration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Shortest allowed layover between legs (minutes).
    pub min_layover_mins: i64,

    /// Longest allowed layover between legs (minutes).
    pub max_layover_mins: i64,

    /// How revisiting an airport is detected.
    pub revisit: RevisitPolicy,

    /// Maximum number of routes to build before giving up.
    /// `None` means no limit; dense pools can then grow factorially.
    pub max_routes: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_layover_mins: i64,
        max_layover_mins: i64,
        revisit: RevisitPolicy,
        max_routes: Option<usize>,
    ) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
            revisit,
            max_routes,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Returns the layover bounds as a window.
    pub fn layover_window(&self) -> LayoverWindow {
        LayoverWindow::new(self.min_layover(), self.max_layover())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,  // 1 hour
            max_layover_mins: 240, // 4 hours
            revisit: RevisitPolicy::AnyEndpoint,
            max_routes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_layover_mins, 60);
        assert_eq!(config.max_layover_mins, 240);
        assert_eq!(config.revisit, RevisitPolicy::AnyEndpoint);
        assert_eq!(config.max_routes, None);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_layover(), Duration::seconds(3600));
        assert_eq!(config.max_layover(), Duration::seconds(14400));
        assert_eq!(config.layover_window(), LayoverWindow::default());
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(30, 90, RevisitPolicy::SourcesOnly, Some(500));

        assert_eq!(config.min_layover_mins, 30);
        assert_eq!(config.max_layover_mins, 90);
        assert_eq!(config.revisit, RevisitPolicy::SourcesOnly);
        assert_eq!(config.max_routes, Some(500));
        assert_eq!(
            config.layover_window(),
            LayoverWindow::new(Duration::minutes(30), Duration::minutes(90))
        );
    }
}
