//! A built room: shape, extras, pricing policy and lifecycle state.

use serde::{Deserialize, Serialize};

use crate::{Feature, FeatureSet, Outcome, PricingPolicy, RoomAction, RoomShape, RoomState};

/// One concrete room, created by the factory at booking time.
///
/// Price and description are derived, never stored:
///
/// ```text
/// price(base)   = policy.price(base) + Σ feature surcharges
/// description() = shape description + feature suffixes (in wrap order)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInstance {
    shape: RoomShape,
    features: FeatureSet,
    policy: PricingPolicy,
    state: RoomState,
}

impl RoomInstance {
    /// A fresh, undecorated room in the `Available` state.
    pub fn new(shape: RoomShape, policy: PricingPolicy) -> Self {
        Self {
            shape,
            features: FeatureSet::new(),
            policy,
            state: RoomState::Available,
        }
    }

    /// Wraps the room with one more feature. Adding a feature twice has
    /// no effect.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    /// Wraps the room with every feature in `features`, in order.
    pub fn with_features(mut self, features: &FeatureSet) -> Self {
        for feature in features.iter() {
            self.features.insert(feature);
        }
        self
    }

    pub fn shape(&self) -> RoomShape {
        self.shape
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn description(&self) -> String {
        self.features.describe(self.shape.description())
    }

    /// Final nightly price for the given base rate.
    pub fn price(&self, base: f64) -> f64 {
        self.policy.price(base) + self.features.surcharge()
    }

    /// Drives the lifecycle machine one step and records the new state.
    pub fn apply(&mut self, action: RoomAction) -> Outcome {
        let from = self.state;
        let (to, outcome) = crate::transition(from, action);
        self.state = to;
        tracing::debug!(%from, %to, %action, %outcome, "room lifecycle step");
        outcome
    }

    pub fn book(&mut self) -> Outcome {
        self.apply(RoomAction::Book)
    }

    pub fn cancel(&mut self) -> Outcome {
        self.apply(RoomAction::Cancel)
    }

    pub fn check_in(&mut self) -> Outcome {
        self.apply(RoomAction::CheckIn)
    }

    pub fn check_out(&mut self) -> Outcome {
        self.apply(RoomAction::CheckOut)
    }
}
