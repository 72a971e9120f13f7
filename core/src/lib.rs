pub mod config;
pub mod events;
pub mod game_data;
pub mod issues;
pub mod lifecycle;
pub mod location;
pub mod markers;
pub mod signal_processor;

// Re-exports for convenience
pub use events::{EventBus, GameEvent};
pub use issues::IssueTracker;
pub use lifecycle::{ApmekenIssueHelper, ComponentHost, PluginComponent};
pub use location::{LocalPoint, WorldPoint};
pub use markers::{HeadlessScene, MarkerManager, Scene, SceneError};
pub use signal_processor::{IssueSignal, SignalHandler};
