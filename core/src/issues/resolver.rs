use crate::location::{PILLARS, VENTS, WorldPoint};

/// Pillar closest to the actor. Hammering can register off the pillar tile, so
/// the nearest pillar wins; ties go to the first in registry order.
pub fn resolve_pillar_fix(actor_location: WorldPoint) -> Option<WorldPoint> {
    let mut nearest = None;
    let mut min_distance = f64::MAX;
    for pillar in &PILLARS {
        let distance = actor_location.planar_distance(pillar);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(*pillar);
        }
    }
    nearest
}

/// Vent the actor is standing on. Pouring only counts on the vent tile itself.
pub fn resolve_vent_fix(actor_location: WorldPoint) -> Option<WorldPoint> {
    VENTS.iter().copied().find(|vent| *vent == actor_location)
}
