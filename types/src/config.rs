//! Helper configuration as persisted on disk.

use serde::{Deserialize, Serialize};

/// User-facing toggles for the room helpers.
///
/// Missing keys fall back to their defaults so that older config files keep
/// loading after new toggles are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Show skull markers on unfixed pillars and vents in the Apmeken room.
    pub apmeken_issue_helper: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            apmeken_issue_helper: true,
        }
    }
}
