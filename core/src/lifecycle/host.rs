use amascut_types::{HelperConfig, RaidState};

use super::PluginComponent;
use crate::events::{ComponentId, EventBus, GameEvent};
use crate::markers::Scene;

struct HostedComponent<S: Scene> {
    component: Box<dyn PluginComponent<S>>,
    running: bool,
}

/// Owns the scene, the event bus and a set of optional components.
///
/// Events are delivered synchronously, in order, to components currently
/// registered on the bus.
pub struct ComponentHost<S: Scene> {
    scene: S,
    bus: EventBus,
    components: Vec<HostedComponent<S>>,
}

impl<S: Scene> ComponentHost<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            bus: EventBus::new(),
            components: Vec::new(),
        }
    }

    /// Add a component. It stays stopped until the next [`revalidate`](Self::revalidate).
    pub fn add_component(&mut self, component: Box<dyn PluginComponent<S>>) {
        self.components.push(HostedComponent {
            component,
            running: false,
        });
    }

    /// Start or stop components whose activation predicate changed.
    pub fn revalidate(&mut self, config: &HelperConfig, raid_state: &RaidState) {
        for hosted in &mut self.components {
            let enabled = hosted.component.is_enabled(config, raid_state);
            if enabled == hosted.running {
                continue;
            }
            if enabled {
                hosted.component.start_up(&mut self.bus, &mut self.scene);
            } else {
                hosted.component.shut_down(&mut self.bus, &mut self.scene);
            }
            hosted.running = enabled;
        }
    }

    pub fn dispatch(&mut self, event: &GameEvent) {
        for hosted in &mut self.components {
            if !self.bus.is_registered(hosted.component.id()) {
                continue;
            }
            match event {
                GameEvent::ChatMessage(chat) => {
                    hosted.component.on_chat_message(chat, &mut self.scene);
                }
                GameEvent::AnimationChanged(changed) => {
                    hosted.component.on_animation_changed(changed, &mut self.scene);
                }
            }
        }
    }

    /// Stop every running component. Called when the host itself shuts down.
    pub fn shut_down_all(&mut self) {
        for hosted in &mut self.components {
            if hosted.running {
                hosted.component.shut_down(&mut self.bus, &mut self.scene);
                hosted.running = false;
            }
        }
    }

    pub fn is_running(&self, id: ComponentId) -> bool {
        self.components
            .iter()
            .any(|hosted| hosted.running && hosted.component.id() == id)
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AnimationChanged, ChatMessage};
    use crate::game_data::{animation_id, message};
    use crate::lifecycle::ApmekenIssueHelper;
    use crate::location::{PILLARS, VENTS, WorldPoint};
    use crate::markers::{HeadlessScene, ObjectId};
    use amascut_types::RaidRoom;

    fn host() -> ComponentHost<HeadlessScene> {
        let mut host =
            ComponentHost::new(HeadlessScene::centered_on(WorldPoint::new(12640, 2784, 0)));
        host.add_component(Box::new(ApmekenIssueHelper::<ObjectId>::new()));
        host
    }

    fn sense_and_fix(host: &mut ComponentHost<HeadlessScene>) {
        host.dispatch(&GameEvent::ChatMessage(ChatMessage::game(
            message::FUMES_SENSED,
        )));
        host.dispatch(&GameEvent::AnimationChanged(AnimationChanged::player(
            animation_id::VENT_POUR,
            VENTS[0],
        )));
    }

    #[test]
    fn test_events_ignored_while_stopped() {
        let mut host = host();
        host.revalidate(&HelperConfig::default(), &RaidState::in_room(RaidRoom::Zebak));
        sense_and_fix(&mut host);

        assert!(!host.is_running(ApmekenIssueHelper::<ObjectId>::ID));
        assert_eq!(host.scene().stats().created, 0);
    }

    #[test]
    fn test_leaving_room_clears_markers() {
        let mut host = host();
        let config = HelperConfig::default();
        host.revalidate(&config, &RaidState::in_room(RaidRoom::Apmeken));
        assert!(host.is_running(ApmekenIssueHelper::<ObjectId>::ID));

        sense_and_fix(&mut host);
        assert_eq!(host.scene().registered_count(), 3);

        host.revalidate(&config, &RaidState::in_room(RaidRoom::Baba));
        assert_eq!(host.scene().registered_count(), 0);
        assert!(host.bus().is_empty());
    }

    #[test]
    fn test_revalidate_without_change_keeps_state() {
        let mut host = host();
        let config = HelperConfig::default();
        let apmeken = RaidState::in_room(RaidRoom::Apmeken);
        host.revalidate(&config, &apmeken);
        sense_and_fix(&mut host);

        host.revalidate(&config, &apmeken);
        assert_eq!(host.scene().registered_count(), 3);
    }

    #[test]
    fn test_disabling_toggle_stops_helper() {
        let mut host = host();
        let apmeken = RaidState::in_room(RaidRoom::Apmeken);
        host.revalidate(&HelperConfig::default(), &apmeken);
        host.dispatch(&GameEvent::ChatMessage(ChatMessage::game(message::ROOF_SENSED)));
        host.dispatch(&GameEvent::AnimationChanged(AnimationChanged::player(
            animation_id::PILLAR_HAMMER,
            PILLARS[1],
        )));

        let off = HelperConfig {
            apmeken_issue_helper: false,
        };
        host.revalidate(&off, &apmeken);
        assert!(!host.is_running(ApmekenIssueHelper::<ObjectId>::ID));
        assert_eq!(host.scene().registered_count(), 0);
        assert_eq!(host.scene().stats().invalid_removals, 0);
    }

    #[test]
    fn test_shut_down_all_releases_everything() {
        let mut host = host();
        host.revalidate(&HelperConfig::default(), &RaidState::in_room(RaidRoom::Apmeken));
        sense_and_fix(&mut host);

        host.shut_down_all();
        host.shut_down_all();
        assert_eq!(host.scene().registered_count(), 0);
        assert_eq!(host.scene().stats().removed, 3);
    }
}
