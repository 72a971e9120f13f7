use amascut_types::{HelperConfig, RaidState};

use crate::events::{AnimationChanged, ChatMessage, ComponentId, EventBus};
use crate::markers::Scene;

/// An optional behaviour the host starts and stops as its predicate changes.
pub trait PluginComponent<S: Scene> {
    fn id(&self) -> ComponentId;

    /// Whether the component should be running for this config and raid state.
    fn is_enabled(&self, config: &HelperConfig, raid_state: &RaidState) -> bool;

    fn start_up(&mut self, bus: &mut EventBus, scene: &mut S);

    /// Must release every scene object the component created.
    fn shut_down(&mut self, bus: &mut EventBus, scene: &mut S);

    fn on_chat_message(&mut self, _chat: &ChatMessage, _scene: &mut S) {}

    fn on_animation_changed(&mut self, _event: &AnimationChanged, _scene: &mut S) {}
}
