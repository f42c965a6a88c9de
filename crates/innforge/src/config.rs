//! Hotel configuration.

use std::path::Path;

use innforge_inventory::Capacities;
use innforge_room::PricingPolicy;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::InnforgeError;

/// Settings for one [`Hotel`](crate::Hotel).
///
/// Every field has a default, so a config file may be partial:
///
/// ```json
/// { "capacities": { "luxury_double": 2 }, "default_policy": "discounted" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Slots per category. Default: 10 / 20 / 10 / 20.
    pub capacities: Capacities,

    /// Policy used by [`Hotel::book`](crate::Hotel::book). Default: standard.
    pub default_policy: PricingPolicy,
}

impl HotelConfig {
    /// Parses a config from a JSON string.
    ///
    /// Capacities above [`Capacities::MAX`] are rejected as
    /// [`InnforgeError::Config`].
    pub fn from_json_str(json: &str) -> Result<Self, InnforgeError> {
        let config: Self = serde_json::from_str(json)?;
        config
            .capacities
            .validate()
            .map_err(|e| InnforgeError::Config(serde_json::Error::custom(e)))?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InnforgeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HotelConfig::default();
        assert_eq!(config.capacities, Capacities::default());
        assert_eq!(config.default_policy, PricingPolicy::Standard);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(HotelConfig::from_json_str("{}").unwrap(), HotelConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = HotelConfig::from_json_str(
            r#"{ "capacities": { "luxury_double": 2 }, "default_policy": "discounted" }"#,
        )
        .unwrap();
        assert_eq!(config.capacities.luxury_double, 2);
        assert_eq!(config.capacities.deluxe_double, 20);
        assert_eq!(config.default_policy, PricingPolicy::Discounted);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = HotelConfig::from_json_str(r#"{ "default_policy": "free" }"#).unwrap_err();
        assert!(matches!(err, InnforgeError::Config(_)));
    }

    #[test]
    fn test_oversized_capacity_is_config_error() {
        let json = r#"{ "capacities": { "luxury_double": 1000000000000 } }"#;
        let err = HotelConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, InnforgeError::Config(_)));
        assert!(err.to_string().contains("luxury double"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = HotelConfig::from_path("/nonexistent/innforge.json").unwrap_err();
        assert!(matches!(err, InnforgeError::Io(_)));
    }
}
