//! Shared types for the Amascut helpers.
//!
//! Kept free of engine dependencies so that hosts, config surfaces and the
//! core crate can all agree on the same serde representation.

pub mod config;
pub mod raid;

pub use config::HelperConfig;
pub use raid::{RaidRoom, RaidState};
