//! Fixed identifiers and chat phrases for the Apmeken room.
//!
//! These mirror values observed in the game client and never change at runtime.

/// Player animation ids that signal a repair action.
pub mod animation_id {
    /// Hammering a damaged roof pillar.
    pub const PILLAR_HAMMER: i32 = 3676;
    /// Pouring liquid into a fuming vent.
    pub const VENT_POUR: i32 = 2295;
}

/// Scene models used for issue markers.
pub mod model_id {
    /// Skull facing south, used in the north half of the room.
    pub const SKULL_FACING_SOUTH: i32 = 45327;
    /// Skull facing north, used in the south half of the room.
    pub const SKULL_FACING_NORTH: i32 = 45330;
}

/// Game messages, compared after markup is stripped.
pub mod message {
    pub const ISSUE_SENSED: &str = "You sense an issue somewhere in the room.";
    pub const FUMES_SENSED: &str = "You sense some strange fumes coming from holes in the floor.";
    pub const ROOF_SENSED: &str = "You sense an issue with the roof supports.";

    pub const FUMES_NEUTRALISED: &str =
        "Apmeken's Sight guides your group into neutralising some dangerous fumes.";
    pub const FUMES_IGNITE: &str = "The fumes filling the room suddenly ignite!";
    pub const ROOF_REPAIRED: &str =
        "Apmeken's Sight guides your group into repairing the roof supports.";
    pub const DEBRIS_FALL: &str = "Damaged roof supports cause some debris to fall on you!";
}

/// Smallest world Y coordinate considered part of the north half of the room.
pub const NORTH_HALF_MIN_Y: i32 = 2788;
