//! Raid progress as reported by the host.

use serde::{Deserialize, Serialize};

/// Rooms of the Tombs of Amascut raid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaidRoom {
    Nexus,
    Crondis,
    Zebak,
    Scabaras,
    Kephri,
    Apmeken,
    Baba,
    Het,
    Akkha,
    Wardens,
}

/// Snapshot of where the local player currently is in the raid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidState {
    /// `None` while outside the raid or between rooms.
    pub current_room: Option<RaidRoom>,
}

impl RaidState {
    pub fn in_room(room: RaidRoom) -> Self {
        Self {
            current_room: Some(room),
        }
    }

    pub fn is_in(&self, room: RaidRoom) -> bool {
        self.current_room == Some(room)
    }
}
