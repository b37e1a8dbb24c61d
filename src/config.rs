//! Grid configuration.
//!
//! All fields have defaults; a host may supply a partial JSON document.
//!
//! ```
//! use u_staffgrid::config::GridConfig;
//!
//! let config = GridConfig::from_json_str(r#"{ "click_window_ms": 300 }"#).unwrap();
//! assert_eq!(config.click_window_ms, 300);
//! assert!((config.blackout_ratio - 0.3).abs() < 1e-10);
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::availability::rules::{BlackoutRule, CalendarRule};
use crate::availability::AvailabilityResolver;
use crate::error::ConfigError;
use crate::models::Catalog;

const DEFAULT_CLICK_WINDOW_MS: u64 = 250;
const DEFAULT_BLACKOUT_RATIO: f64 = 0.3;
const MAX_CLICK_WINDOW_MS: u64 = 2_000;

/// Tunables for the grid engine and dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Single/double click debounce window (ms).
    pub click_window_ms: u64,
    /// Share of otherwise-valid slots withheld by the blackout rule.
    pub blackout_ratio: f64,
    /// Salt mixed into the blackout hash.
    pub blackout_salt: String,
    /// Fallback cell color for the cosmetic side-table.
    pub default_cell_color: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            click_window_ms: DEFAULT_CLICK_WINDOW_MS,
            blackout_ratio: DEFAULT_BLACKOUT_RATIO,
            blackout_salt: String::new(),
            default_cell_color: None,
        }
    }
}

impl GridConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the click window.
    pub fn with_click_window_ms(mut self, ms: u64) -> Self {
        self.click_window_ms = ms;
        self
    }

    /// Sets the blackout ratio.
    pub fn with_blackout_ratio(mut self, ratio: f64) -> Self {
        self.blackout_ratio = ratio;
        self
    }

    /// Sets the blackout salt.
    pub fn with_blackout_salt(mut self, salt: impl Into<String>) -> Self {
        self.blackout_salt = salt.into();
        self
    }

    /// Sets the default cell color.
    pub fn with_default_cell_color(mut self, color: impl Into<String>) -> Self {
        self.default_cell_color = Some(color.into());
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.click_window_ms == 0 || self.click_window_ms > MAX_CLICK_WINDOW_MS {
            return Err(ConfigError::OutOfRange {
                field: "click_window_ms",
                message: format!("must be in 1..={MAX_CLICK_WINDOW_MS}, got {}", self.click_window_ms),
            });
        }
        if !(0.0..=1.0).contains(&self.blackout_ratio) {
            return Err(ConfigError::OutOfRange {
                field: "blackout_ratio",
                message: format!("must be in 0.0..=1.0, got {}", self.blackout_ratio),
            });
        }
        Ok(())
    }

    /// Click window as a duration.
    pub fn click_window(&self) -> Duration {
        Duration::from_millis(self.click_window_ms)
    }

    /// Default resolver: venue calendar, then deterministic blackout.
    pub fn resolver(&self, catalog: impl Into<Arc<Catalog>>) -> AvailabilityResolver {
        AvailabilityResolver::new(catalog)
            .with_policy(CalendarRule)
            .with_policy(BlackoutRule::new(self.blackout_ratio).with_salt(self.blackout_salt.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GridConfig::default();
        assert_eq!(c.click_window_ms, 250);
        assert_eq!(c.click_window(), Duration::from_millis(250));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let c = GridConfig::from_json_str(r##"{"blackout_ratio": 0.0, "default_cell_color": "#eee"}"##)
            .unwrap();
        assert_eq!(c.click_window_ms, 250);
        assert!((c.blackout_ratio - 0.0).abs() < 1e-10);
        assert_eq!(c.default_cell_color.as_deref(), Some("#eee"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{"click_window_ms": 0}"#),
            Err(ConfigError::OutOfRange { field: "click_window_ms", .. })
        ));
        assert!(matches!(
            GridConfig::new().with_blackout_ratio(1.5).validate(),
            Err(ConfigError::OutOfRange { field: "blackout_ratio", .. })
        ));
        assert!(matches!(
            GridConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_resolver_policies() {
        let r = GridConfig::new().resolver(Catalog::new());
        assert_eq!(r.policy_names(), vec!["CALENDAR", "BLACKOUT"]);
    }
}
