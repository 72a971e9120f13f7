use crate::location::WorldPoint;

/// Which "you sense" message announced the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensedCue {
    Unspecified,
    Fumes,
    Roof,
}

/// Which message closed the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeEndCue {
    FumesNeutralised,
    FumesIgnited,
    RoofRepaired,
    DebrisFell,
}

/// Signals consumed by the issue tracker.
/// Repair signals carry the actor's location; resolving which site was
/// repaired is left to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSignal {
    IssueSensed { cue: SensedCue },
    EpisodeEnded { cue: EpisodeEndCue },
    PillarHammered { actor_location: WorldPoint },
    VentPoured { actor_location: WorldPoint },
}
