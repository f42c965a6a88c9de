//! A single unit of capacity.

use innforge_room::RoomInstance;

/// One slot in a category's pool.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    #[default]
    Empty,
    /// The slot owns the booked room.
    Occupied(RoomInstance),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn room(&self) -> Option<&RoomInstance> {
        match self {
            Self::Empty => None,
            Self::Occupied(room) => Some(room),
        }
    }

    pub fn room_mut(&mut self) -> Option<&mut RoomInstance> {
        match self {
            Self::Empty => None,
            Self::Occupied(room) => Some(room),
        }
    }

    /// Empties the slot and returns whatever room it held.
    pub fn take(&mut self) -> Option<RoomInstance> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Occupied(room) => Some(room),
        }
    }
}
