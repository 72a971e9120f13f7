use super::WorldPoint;

/// Roof support pillars, repaired by hammering.
pub static PILLARS: [WorldPoint; 4] = [
    WorldPoint::new(12636, 2792, 0), // north-west
    WorldPoint::new(12644, 2792, 0), // north-east
    WorldPoint::new(12636, 2776, 0), // south-west
    WorldPoint::new(12644, 2776, 0), // south-east
];

/// Fume vents, neutralised by pouring.
pub static VENTS: [WorldPoint; 4] = [
    WorldPoint::new(12632, 2788, 0), // north-west
    WorldPoint::new(12648, 2788, 0), // north-east
    WorldPoint::new(12632, 2780, 0), // south-west
    WorldPoint::new(12648, 2780, 0), // south-east
];

/// One of the two independent sets of problem sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationGroup {
    Pillars,
    Vents,
}

impl LocationGroup {
    /// Sites of this group in registry order.
    pub fn locations(self) -> &'static [WorldPoint] {
        match self {
            Self::Pillars => &PILLARS,
            Self::Vents => &VENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_disjoint() {
        for pillar in &PILLARS {
            assert!(!VENTS.contains(pillar), "{pillar:?} is both pillar and vent");
        }
    }

    #[test]
    fn test_group_locations_keep_registry_order() {
        assert_eq!(LocationGroup::Pillars.locations(), &PILLARS[..]);
        assert_eq!(LocationGroup::Vents.locations()[3], WorldPoint::new(12648, 2780, 0));
    }
}
