use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("visibility_threshold must be in (0, 1], got {0}")]
    Threshold(f64),
    #[error("{field} must be a finite, non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Tunables for the scroll-driven page behavior.
///
/// Missing keys fall back to [`PageConfig::default`], so an empty TOML file
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Distance from the viewport top at which a section counts as active.
    pub anchor_line: f64,
    /// Fraction of a section that must be visible to reveal it.
    pub visibility_threshold: f64,
    /// Minimum spacing between active-section evaluations. `0` disables throttling.
    pub scroll_throttle_ms: f64,
    /// Scroll offset past which the navigation bar turns solid.
    pub scrolled_offset: f64,
    /// Number of particles in the background field.
    pub particle_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            anchor_line: 100.0,
            visibility_threshold: 0.3,
            scroll_throttle_ms: 16.0,
            scrolled_offset: 50.0,
            particle_count: 48,
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            return Err(ConfigError::Threshold(self.visibility_threshold));
        }
        for (field, value) in [
            ("anchor_line", self.anchor_line),
            ("scroll_throttle_ms", self.scroll_throttle_ms),
            ("scrolled_offset", self.scrolled_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = PageConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = PageConfig::from_toml_str("anchor_line = 64.0\nscroll_throttle_ms = 0")
            .expect("valid config");
        assert!((config.anchor_line - 64.0).abs() < f64::EPSILON);
        assert_eq!(config.scroll_throttle_ms, 0.0);
        assert!((config.visibility_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        assert!(matches!(
            PageConfig::from_toml_str("visibility_threshold = 0.0"),
            Err(ConfigError::Threshold(_))
        ));
        assert!(matches!(
            PageConfig::from_toml_str("visibility_threshold = 1.5"),
            Err(ConfigError::Threshold(_))
        ));
        assert!(PageConfig::from_toml_str("visibility_threshold = 1.0").is_ok());
    }

    #[test]
    fn negative_anchor_rejected() {
        let err = PageConfig::from_json_str(r#"{"anchor_line": -5}"#);
        assert!(matches!(
            err,
            Err(ConfigError::Negative {
                field: "anchor_line",
                ..
            })
        ));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(matches!(
            PageConfig::from_toml_str("anchor_line = ["),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            PageConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }
}
