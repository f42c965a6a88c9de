//! Room lifecycle state machine.
//!
//! A room cycles between three states. There is no terminal state:
//!
//! ```text
//!              book                check_in
//!   Available ──────→ Reserved ──────────→ Occupied
//!       ↑                │                     │
//!       └─────cancel─────┘                     │
//!       └──────────────check_out───────────────┘
//! ```
//!
//! Every other (state, action) pair is either a no-op or a rejection.
//! Neither changes state, but both still produce an [`Outcome`] so the
//! caller can tell the guest what happened.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoomState / RoomAction
// ---------------------------------------------------------------------------

/// Where a room is in its booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomState {
    #[default]
    Available,
    Reserved,
    Occupied,
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Reserved => write!(f, "Reserved"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}

/// Something a guest or the front desk can attempt on a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomAction {
    Book,
    Cancel,
    CheckIn,
    CheckOut,
}

impl RoomAction {
    pub const ALL: [Self; 4] = [Self::Book, Self::Cancel, Self::CheckIn, Self::CheckOut];
}

impl fmt::Display for RoomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::Cancel => write!(f, "cancel"),
            Self::CheckIn => write!(f, "check-in"),
            Self::CheckOut => write!(f, "check-out"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The reported result of one transition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    // Transitions that move the machine.
    Booked,
    Cancelled,
    CheckedIn,
    CheckedOut,

    // No-ops: the room is already where the action would leave it.
    AlreadyAvailable,

    // Rejections.
    NotReserved,
    AlreadyReserved,
    NotOccupied,
    OccupiedCannotBook,
    OccupiedCannotCancel,
    AlreadyOccupied,
}

impl Outcome {
    /// Returns `true` if the attempt moved the room to a new state.
    pub fn is_transition(self) -> bool {
        matches!(
            self,
            Self::Booked | Self::Cancelled | Self::CheckedIn | Self::CheckedOut
        )
    }

    /// Returns `true` if the attempt was refused.
    pub fn is_rejection(self) -> bool {
        !self.is_transition() && self != Self::AlreadyAvailable
    }

    /// Message shown to the guest.
    pub fn message(self) -> &'static str {
        match self {
            Self::Booked => "Room booked successfully!",
            Self::Cancelled => "Reservation cancelled.",
            Self::CheckedIn => "Checked in successfully.",
            Self::CheckedOut => "Checked out successfully.",
            Self::AlreadyAvailable => "Room is already available.",
            Self::NotReserved => "Cannot check in. Room is not reserved.",
            Self::AlreadyReserved => "Room is already reserved.",
            Self::NotOccupied => "Cannot check out. Room is not occupied.",
            Self::OccupiedCannotBook => "Room is occupied. Cannot book.",
            Self::OccupiedCannotCancel => "Cannot cancel. Room is occupied.",
            Self::AlreadyOccupied => "Room is already occupied.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// Transition function
// ---------------------------------------------------------------------------

/// Applies `action` to a room in `state`.
///
/// Returns the next state together with the outcome. For no-ops and
/// rejections the returned state equals `state`.
pub fn transition(state: RoomState, action: RoomAction) -> (RoomState, Outcome) {
    use RoomAction::*;
    use RoomState::*;

    match (state, action) {
        (Available, Book) => (Reserved, Outcome::Booked),
        (Available, Cancel) => (Available, Outcome::AlreadyAvailable),
        (Available, CheckIn) => (Available, Outcome::NotReserved),
        (Available, CheckOut) => (Available, Outcome::AlreadyAvailable),

        (Reserved, Book) => (Reserved, Outcome::AlreadyReserved),
        (Reserved, Cancel) => (Available, Outcome::Cancelled),
        (Reserved, CheckIn) => (Occupied, Outcome::CheckedIn),
        (Reserved, CheckOut) => (Reserved, Outcome::NotOccupied),

        (Occupied, Book) => (Occupied, Outcome::OccupiedCannotBook),
        (Occupied, Cancel) => (Occupied, Outcome::OccupiedCannotCancel),
        (Occupied, CheckIn) => (Occupied, Outcome::AlreadyOccupied),
        (Occupied, CheckOut) => (Available, Outcome::CheckedOut),
    }
}
