//! Room categories and their catalog data.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomShape
// ---------------------------------------------------------------------------

/// The physical layout of a room. This is all the factory decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomShape {
    Single,
    Double,
}

impl RoomShape {
    /// Base description before any feature suffixes.
    pub fn description(self) -> &'static str {
        match self {
            Self::Single => "Single Room",
            Self::Double => "Double Room",
        }
    }
}

// ---------------------------------------------------------------------------
// RoomCategory
// ---------------------------------------------------------------------------

/// One of the four bookable categories. Each has its own pool of slots
/// in the inventory.
///
/// The console addresses categories by a 1-based selector:
///
/// ```text
/// 1 → LuxuryDouble   2 → DeluxeDouble   3 → LuxurySingle   4 → DeluxeSingle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    LuxuryDouble,
    DeluxeDouble,
    LuxurySingle,
    DeluxeSingle,
}

impl RoomCategory {
    /// Every category, in selector order.
    pub const ALL: [Self; 4] = [
        Self::LuxuryDouble,
        Self::DeluxeDouble,
        Self::LuxurySingle,
        Self::DeluxeSingle,
    ];

    /// Maps a 1-based console selector to a category.
    pub fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            1 => Some(Self::LuxuryDouble),
            2 => Some(Self::DeluxeDouble),
            3 => Some(Self::LuxurySingle),
            4 => Some(Self::DeluxeSingle),
            _ => None,
        }
    }

    /// The 1-based console selector for this category.
    pub fn selector(self) -> u32 {
        match self {
            Self::LuxuryDouble => 1,
            Self::DeluxeDouble => 2,
            Self::LuxurySingle => 3,
            Self::DeluxeSingle => 4,
        }
    }

    /// Lowercase label understood by [`create_room`](crate::create_room).
    pub fn label(self) -> &'static str {
        match self {
            Self::LuxuryDouble => "luxury double",
            Self::DeluxeDouble => "deluxe double",
            Self::LuxurySingle => "luxury single",
            Self::DeluxeSingle => "deluxe single",
        }
    }

    /// Case-insensitive inverse of [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    pub fn shape(self) -> RoomShape {
        match self {
            Self::LuxuryDouble | Self::DeluxeDouble => RoomShape::Double,
            Self::LuxurySingle | Self::DeluxeSingle => RoomShape::Single,
        }
    }

    /// Number of slots the hotel has for this category unless configured
    /// otherwise.
    pub fn default_capacity(self) -> usize {
        match self {
            Self::LuxuryDouble => 10,
            Self::DeluxeDouble => 20,
            Self::LuxurySingle => 10,
            Self::DeluxeSingle => 20,
        }
    }

    /// Catalog nightly rate, before pricing policy and features.
    pub fn nightly_rate(self) -> f64 {
        match self {
            Self::LuxuryDouble => 4000.0,
            Self::DeluxeDouble => 3000.0,
            Self::LuxurySingle => 2200.0,
            Self::DeluxeSingle => 1200.0,
        }
    }

    /// One-line catalog description shown by the "room details" menu.
    pub fn catalog_entry(self) -> &'static str {
        match self {
            Self::LuxuryDouble => {
                "Luxury Double Room: 1 double bed, AC, Free breakfast, Rs.4000 per night."
            }
            Self::DeluxeDouble => "Deluxe Double Room: 1 double bed, AC, Rs.3000 per night.",
            Self::LuxurySingle => {
                "Luxury Single Room: 1 single bed, AC, Free breakfast, Rs.2200 per night."
            }
            Self::DeluxeSingle => "Deluxe Single Room: 1 single bed, Rs.1200 per night.",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trips_for_every_category() {
        for category in RoomCategory::ALL {
            assert_eq!(RoomCategory::from_selector(category.selector()), Some(category));
        }
    }

    #[test]
    fn test_selector_out_of_range() {
        assert_eq!(RoomCategory::from_selector(0), None);
        assert_eq!(RoomCategory::from_selector(5), None);
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(
            RoomCategory::from_label("Luxury DOUBLE"),
            Some(RoomCategory::LuxuryDouble)
        );
        assert_eq!(RoomCategory::from_label("penthouse"), None);
    }

    #[test]
    fn test_shapes_and_capacities() {
        assert_eq!(RoomCategory::DeluxeDouble.shape(), RoomShape::Double);
        assert_eq!(RoomCategory::LuxurySingle.shape(), RoomShape::Single);
        let capacities: Vec<usize> =
            RoomCategory::ALL.iter().map(|c| c.default_capacity()).collect();
        assert_eq!(capacities, vec![10, 20, 10, 20]);
    }

    #[test]
    fn test_catalog_rate_matches_entry() {
        for category in RoomCategory::ALL {
            let rate = format!("Rs.{}", category.nightly_rate() as u64);
            assert!(category.catalog_entry().contains(&rate));
        }
    }
}
