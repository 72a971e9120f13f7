use amascut_types::{HelperConfig, RaidRoom, RaidState};

use super::PluginComponent;
use crate::events::{AnimationChanged, ChatMessage, ComponentId, EventBus};
use crate::issues::IssueTracker;
use crate::markers::Scene;
use crate::signal_processor::{SignalHandler, classify_animation, classify_chat};

/// Marks unfixed pillars and vents in the Apmeken room.
#[derive(Debug)]
pub struct ApmekenIssueHelper<H> {
    tracker: IssueTracker<H>,
}

impl<H> Default for ApmekenIssueHelper<H> {
    fn default() -> Self {
        Self {
            tracker: IssueTracker::new(),
        }
    }
}

impl<H> ApmekenIssueHelper<H> {
    pub const ID: ComponentId = ComponentId("apmeken_issue_helper");

    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &IssueTracker<H> {
        &self.tracker
    }
}

impl<S: Scene> PluginComponent<S> for ApmekenIssueHelper<S::Handle> {
    fn id(&self) -> ComponentId {
        Self::ID
    }

    fn is_enabled(&self, config: &HelperConfig, raid_state: &RaidState) -> bool {
        config.apmeken_issue_helper && raid_state.is_in(RaidRoom::Apmeken)
    }

    fn start_up(&mut self, bus: &mut EventBus, scene: &mut S) {
        bus.register(Self::ID);
        self.tracker.reset(scene);
        tracing::info!("Apmeken issue helper started");
    }

    fn shut_down(&mut self, bus: &mut EventBus, scene: &mut S) {
        bus.unregister(Self::ID);
        self.tracker.reset(scene);
        tracing::info!("Apmeken issue helper stopped");
    }

    fn on_chat_message(&mut self, chat: &ChatMessage, scene: &mut S) {
        if let Some(signal) = classify_chat(chat) {
            self.tracker.handle_signal(&signal, scene);
        }
    }

    fn on_animation_changed(&mut self, event: &AnimationChanged, scene: &mut S) {
        if let Some(signal) = classify_animation(event) {
            self.tracker.handle_signal(&signal, scene);
        }
    }
}
