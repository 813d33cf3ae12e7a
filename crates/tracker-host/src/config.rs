//! Host configuration.
//!
//! Defaults work out of the box. A JSON file and environment variables can
//! override them, environment last:
//!
//! - `ORDER_TRACKER_BUFFER_SIZE` - request channel capacity
//! - `ORDER_TRACKER_DATE_FORMAT` - strftime pattern for timestamps a week or more old

use crate::error::HostError;
use serde::Deserialize;
use tracker_core::relative_time::DEFAULT_ABSOLUTE_FORMAT;
use tracker_core::RenderOptions;

pub const BUFFER_SIZE_VAR: &str = "ORDER_TRACKER_BUFFER_SIZE";
pub const DATE_FORMAT_VAR: &str = "ORDER_TRACKER_DATE_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub buffer_size: usize,
    pub absolute_format: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            absolute_format: DEFAULT_ABSOLUTE_FORMAT.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, HostError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HostError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, HostError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HostError> {
        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            self.buffer_size = raw
                .trim()
                .parse()
                .map_err(|_| HostError::Config(format!("{BUFFER_SIZE_VAR}={raw:?} is not a number")))?;
        }
        if let Some(format) = lookup(DATE_FORMAT_VAR) {
            self.absolute_format = format;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn render_options(&self) -> Result<RenderOptions, HostError> {
        Ok(RenderOptions::new(self.absolute_format.clone())?)
    }

    fn validate(&self) -> Result<(), HostError> {
        if self.buffer_size == 0 {
            return Err(HostError::Config("buffer_size must be at least 1".to_string()));
        }
        self.render_options().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.absolute_format, "%b %-d, %H:%M");
        assert!(config.render_options().is_ok());
    }

    #[test]
    fn env_overrides_apply() {
        let config = TrackerConfig::default()
            .with_overrides(env(&[(BUFFER_SIZE_VAR, " 8 "), (DATE_FORMAT_VAR, "%d/%m %H:%M")]))
            .unwrap();
        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.absolute_format, "%d/%m %H:%M");
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let err = TrackerConfig::default()
            .with_overrides(env(&[(BUFFER_SIZE_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, HostError::Config(_)));
    }

    #[test]
    fn non_numeric_buffer_is_rejected() {
        let err = TrackerConfig::default()
            .with_overrides(env(&[(BUFFER_SIZE_VAR, "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("is not a number"));
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let err = TrackerConfig::default()
            .with_overrides(env(&[(DATE_FORMAT_VAR, "%Q")]))
            .unwrap_err();
        assert!(matches!(err, HostError::Core(_)));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = TrackerConfig::from_json_str(r#"{ "buffer_size": 4 }"#).unwrap();
        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.absolute_format, DEFAULT_ABSOLUTE_FORMAT);

        assert!(TrackerConfig::from_json_str(r#"{ "colour": "red" }"#).is_err());
    }
}
