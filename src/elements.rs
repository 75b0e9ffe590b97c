use macroquad::prelude::*;

/// The five Godai elements, in cycle order.
///
/// Dominance is modular rank arithmetic over [`Element::CYCLE`]: every
/// element beats its successor in the cycle (wrapping), so Void beats Earth,
/// Earth beats Water, Water beats Fire, Fire beats Wind and Wind beats Void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Void,
    Earth,
    Water,
    Fire,
    Wind,
}

impl Element {
    pub const CYCLE: [Element; 5] = [
        Element::Void,
        Element::Earth,
        Element::Water,
        Element::Fire,
        Element::Wind,
    ];

    pub fn rank(self) -> usize {
        match self {
            Element::Void => 0,
            Element::Earth => 1,
            Element::Water => 2,
            Element::Fire => 3,
            Element::Wind => 4,
        }
    }

    /// The one element this element beats: its cycle successor.
    pub fn beats(self) -> Element {
        Self::CYCLE[(self.rank() + 1) % Self::CYCLE.len()]
    }

    pub fn defeats(self, other: Element) -> bool {
        self.beats() == other
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Void => "Void",
            Element::Earth => "Earth",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Wind => "Wind",
        }
    }

    /// Short glyph drawn inside element badges.
    pub fn glyph(self) -> &'static str {
        match self {
            Element::Void => "VO",
            Element::Earth => "EA",
            Element::Water => "WA",
            Element::Fire => "FI",
            Element::Wind => "WI",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Element::Void => Color::from_rgba(155, 89, 182, 255),
            Element::Earth => Color::from_rgba(39, 174, 96, 255),
            Element::Water => Color::from_rgba(41, 128, 185, 255),
            Element::Fire => Color::from_rgba(231, 76, 60, 255),
            Element::Wind => Color::from_rgba(0, 188, 212, 255),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Element::Void => "The primordial nothingness",
            Element::Earth => "Solid and unyielding",
            Element::Water => "Fluid and adaptable",
            Element::Fire => "Destructive and passionate",
            Element::Wind => "Swift and invisible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_follows_cycle() {
        assert_eq!(Element::Void.beats(), Element::Earth);
        assert_eq!(Element::Earth.beats(), Element::Water);
        assert_eq!(Element::Water.beats(), Element::Fire);
        assert_eq!(Element::Fire.beats(), Element::Wind);
        assert_eq!(Element::Wind.beats(), Element::Void);
    }

    #[test]
    fn every_element_beats_exactly_one_and_is_beaten_once() {
        for e in Element::CYCLE {
            let beaten_by: Vec<Element> = Element::CYCLE
                .into_iter()
                .filter(|other| other.defeats(e))
                .collect();
            assert_eq!(beaten_by.len(), 1, "{:?} must be beaten exactly once", e);
            assert_ne!(beaten_by[0], e);
        }
    }

    #[test]
    fn defeats_is_rank_distance_one() {
        for e in Element::CYCLE {
            let succ = Element::CYCLE[(e.rank() + 1) % 5];
            assert!(e.defeats(succ));
            assert!(!succ.defeats(e));
            assert!(!e.defeats(e));
        }
    }

    #[test]
    fn cycle_ranks_are_consistent() {
        for (i, e) in Element::CYCLE.into_iter().enumerate() {
            assert_eq!(e.rank(), i);
        }
    }
}
