//! Pricing policies.
//!
//! A policy is the "implementation" half of the room/pricing bridge: the
//! room decides what it is, the policy decides what it costs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discount factor applied by [`PricingPolicy::Discounted`].
const DISCOUNT_FACTOR: f64 = 0.9;

/// How a base nightly rate is turned into a final rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Charge the base rate unchanged.
    #[default]
    Standard,
    /// Charge 90% of the base rate.
    Discounted,
}

impl PricingPolicy {
    /// Applies the policy to a base rate.
    pub fn price(self, base: f64) -> f64 {
        match self {
            Self::Standard => base,
            Self::Discounted => base * DISCOUNT_FACTOR,
        }
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Discounted => write!(f, "discounted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_returns_base_unchanged() {
        assert_eq!(PricingPolicy::Standard.price(4000.0), 4000.0);
        assert_eq!(PricingPolicy::Standard.price(0.0), 0.0);
    }

    #[test]
    fn test_discounted_takes_ten_percent_off() {
        assert!((PricingPolicy::Discounted.price(1000.0) - 900.0).abs() < 1e-9);
        assert!((PricingPolicy::Discounted.price(2200.0) - 1980.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(PricingPolicy::default(), PricingPolicy::Standard);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&PricingPolicy::Discounted).unwrap();
        assert_eq!(json, "\"discounted\"");
        let back: PricingPolicy = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(back, PricingPolicy::Standard);
    }
}
