use hashbrown::HashSet;

use super::resolver::{resolve_pillar_fix, resolve_vent_fix};
use crate::location::{LocationGroup, WorldPoint};
use crate::markers::{MarkerManager, Scene};
use crate::signal_processor::{IssueSignal, SignalHandler};

/// State of the current issue episode.
///
/// `issue_active` is armed by a sensed cue and consumed by the next repair.
/// A repair that consumes it reveals the remaining unfixed sites of its group.
#[derive(Debug)]
pub struct IssueTracker<H> {
    issue_active: bool,
    fixed_locations: HashSet<WorldPoint>,
    markers: MarkerManager<H>,
}

impl<H> Default for IssueTracker<H> {
    fn default() -> Self {
        Self {
            issue_active: false,
            fixed_locations: HashSet::new(),
            markers: MarkerManager::new(),
        }
    }
}

impl<H> IssueTracker<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_active(&self) -> bool {
        self.issue_active
    }

    pub fn is_fixed(&self, location: WorldPoint) -> bool {
        self.fixed_locations.contains(&location)
    }

    pub fn fixed_locations(&self) -> impl Iterator<Item = WorldPoint> + '_ {
        self.fixed_locations.iter().copied()
    }

    pub fn markers(&self) -> &MarkerManager<H> {
        &self.markers
    }

    /// End the episode: drop all markers and forget fixed sites.
    pub fn reset<S>(&mut self, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        self.issue_active = false;
        self.markers.clear_all(scene);
        self.fixed_locations.clear();
    }

    fn handle_issue_fixed<S>(&mut self, fixed: WorldPoint, group: LocationGroup, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        let reveal_others = std::mem::replace(&mut self.issue_active, false);

        self.fixed_locations.insert(fixed);
        self.markers.remove_marker_at(fixed, scene);

        tracing::debug!(?fixed, ?group, reveal_others, "Issue site fixed");

        if !reveal_others {
            return;
        }
        for &location in group.locations() {
            if location != fixed && !self.fixed_locations.contains(&location) {
                self.markers.show_marker_at(location, scene);
            }
        }
    }
}

impl<S: Scene> SignalHandler<S> for IssueTracker<S::Handle> {
    fn handle_signal(&mut self, signal: &IssueSignal, scene: &mut S) {
        match *signal {
            IssueSignal::IssueSensed { cue } => {
                if !self.issue_active {
                    tracing::debug!(?cue, "Issue sensed");
                }
                self.issue_active = true;
            }
            IssueSignal::EpisodeEnded { cue } => {
                tracing::debug!(?cue, markers = self.markers.len(), "Issue episode ended");
                self.reset(scene);
            }
            IssueSignal::PillarHammered { actor_location } => {
                if let Some(fixed) = resolve_pillar_fix(actor_location) {
                    self.handle_issue_fixed(fixed, LocationGroup::Pillars, scene);
                }
            }
            IssueSignal::VentPoured { actor_location } => {
                if let Some(fixed) = resolve_vent_fix(actor_location) {
                    self.handle_issue_fixed(fixed, LocationGroup::Vents, scene);
                }
            }
        }
    }
}
