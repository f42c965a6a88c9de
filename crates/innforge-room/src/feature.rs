//! Optional room extras.
//!
//! Features replace a chain of wrapper objects: a room carries a small
//! ordered set of tags, and the surcharge and description suffix are
//! computed from that set. Price is additive (order does not matter);
//! the description follows the order features were added in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookable extra that adds a fixed surcharge to the nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    WiFi,
    Breakfast,
}

impl Feature {
    /// Fixed amount added to the nightly rate.
    pub fn surcharge(self) -> f64 {
        match self {
            Self::WiFi => 200.0,
            Self::Breakfast => 300.0,
        }
    }

    /// Text appended to the room description, including the leading
    /// separator.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::WiFi => ", Wi-Fi",
            Self::Breakfast => ", Breakfast",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WiFi => write!(f, "Wi-Fi"),
            Self::Breakfast => write!(f, "Breakfast"),
        }
    }
}

/// The active features of one room, in the order they were added.
///
/// Holds each feature at most once. The catalog is tiny, so a `Vec` with
/// a linear membership check is all we need. Deserialization goes through
/// [`FromIterator`], so duplicates in the input are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct FeatureSet(Vec<Feature>);

impl FeatureSet {
    /// An empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature. Returns `false` (and changes nothing) if it was
    /// already present.
    pub fn insert(&mut self, feature: Feature) -> bool {
        if self.contains(feature) {
            return false;
        }
        self.0.push(feature);
        true
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, feature: Feature) -> Self {
        self.insert(feature);
        self
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    /// Sum of every active feature's surcharge.
    pub fn surcharge(&self) -> f64 {
        self.iter().map(Feature::surcharge).sum()
    }

    /// Appends each feature's suffix to `base`, in insertion order.
    pub fn describe(&self, base: &str) -> String {
        self.iter().fold(base.to_string(), |mut out, feature| {
            out.push_str(feature.suffix());
            out
        })
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = Self::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl From<Vec<Feature>> for FeatureSet {
    fn from(features: Vec<Feature>) -> Self {
        features.into_iter().collect()
    }
}

impl From<FeatureSet> for Vec<Feature> {
    fn from(set: FeatureSet) -> Self {
        set.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surcharges() {
        assert_eq!(Feature::WiFi.surcharge(), 200.0);
        assert_eq!(Feature::Breakfast.surcharge(), 300.0);
        assert_eq!(FeatureSet::new().surcharge(), 0.0);
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut set = FeatureSet::new();
        assert!(set.insert(Feature::WiFi));
        assert!(!set.insert(Feature::WiFi));
        assert_eq!(set.len(), 1);
        assert_eq!(set.surcharge(), 200.0);
    }

    #[test]
    fn test_describe_follows_insertion_order() {
        let wifi_first = FeatureSet::new().with(Feature::WiFi).with(Feature::Breakfast);
        let breakfast_first =
            FeatureSet::new().with(Feature::Breakfast).with(Feature::WiFi);

        assert_eq!(wifi_first.describe("Single Room"), "Single Room, Wi-Fi, Breakfast");
        assert_eq!(
            breakfast_first.describe("Single Room"),
            "Single Room, Breakfast, Wi-Fi"
        );
        assert_eq!(wifi_first.surcharge(), breakfast_first.surcharge());
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: FeatureSet = serde_json::from_str(r#"["wi_fi", "wi_fi"]"#).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.surcharge(), 200.0);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set = FeatureSet::new().with(Feature::Breakfast).with(Feature::WiFi);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["breakfast","wi_fi"]"#);
        assert_eq!(serde_json::from_str::<FeatureSet>(&json).unwrap(), set);
    }

    #[test]
    fn test_from_iterator_dedupes() {
        let set: FeatureSet =
            [Feature::Breakfast, Feature::Breakfast, Feature::WiFi].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Feature::Breakfast, Feature::WiFi]);
    }
}
