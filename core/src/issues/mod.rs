//! Issue tracking for the Apmeken room.
//!
//! The tracker correlates "you sense an issue" chat cues with players' repair
//! animations. When a player repairs one site while an issue is flagged, every
//! other site of the same group that is not yet fixed gets a marker.

mod resolver;
mod tracker;


pub use resolver::{resolve_pillar_fix, resolve_vent_fix};
pub use tracker::IssueTracker;
