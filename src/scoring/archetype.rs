use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeKind {
    Resting,
    Awakening,
    Rising,
    Radiant,
}

/// One energy band and its display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub kind: ArchetypeKind,
    pub band: u8,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Inclusive EAS range.
    pub range: (u8, u8),
    pub description: &'static str,
    pub offer: &'static str,
    #[serde(skip)]
    pub insight: &'static str,
}

/// Ascending, contiguous and non-overlapping over 0..=100.
pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        kind: ArchetypeKind::Resting,
        band: 1,
        name: "The Resting Phase",
        icon: "🌙",
        color: "#6B7280",
        range: (0, 40),
        description: "Your energy is calling for deep restoration and gentle nurturing. Like the quiet before dawn, this phase is not a weakness; it's an invitation to pause, reflect, and rebuild your foundation. Your soul is asking for permission to rest, and honoring this need is the first step toward transformation. You've been giving so much; now it's time to receive.",
        offer: "It's time to honor your need for restoration. The 21-Day Energy Reset is designed specifically for women like you who have given so much and are ready to refill their well with compassion and care.",
        insight: "your energy is calling for deep restoration. Your journey begins with gentle self-compassion and honoring your need to pause.",
    },
    Archetype {
        kind: ArchetypeKind::Awakening,
        band: 2,
        name: "The Awakening Phase",
        icon: "🌅",
        color: "#F59E0B",
        range: (41, 60),
        description: "You are in a beautiful state of emerging awareness. Like the first light of sunrise, you're beginning to see new possibilities and reconnect with your inner power. Some days feel aligned, others feel uncertain; this is natural. You're not lost; you're awakening. With the right support, you can move steadily toward consistent alignment and inner peace.",
        offer: "You're at a pivotal moment in your journey. The 21-Day Energy Reset will provide the daily structure and gentle guidance you need to stabilize your energy and step into consistent alignment.",
        insight: "you're in a beautiful state of emerging awareness. With the right support, you can move steadily toward consistent alignment.",
    },
    Archetype {
        kind: ArchetypeKind::Rising,
        band: 3,
        name: "The Rising Phase",
        icon: "🌸",
        color: "#8B5CF6",
        range: (61, 80),
        description: "Your energy is building beautiful momentum. You've done meaningful inner work, and it shows in how you carry yourself. You understand the importance of nurturing your energy and you're actively cultivating it. There's still room to expand, but you're well on your way to full alignment. Your potential is blossoming.",
        offer: "You're ready to fully bloom. The 21-Day Energy Reset will help you release any remaining blocks and accelerate your journey into radiant alignment.",
        insight: "your energy is building momentum. A few targeted practices can help you fully step into your radiant potential.",
    },
    Archetype {
        kind: ArchetypeKind::Radiant,
        band: 4,
        name: "The Radiant Phase",
        icon: "✨",
        color: "#10B981",
        range: (81, 100),
        description: "You are in beautiful alignment with your highest self. Your energy flows freely, your spirit is nourished, and you naturally attract abundance and opportunity. You've mastered the art of self-care without guilt and understand that protecting your energy creates space for magic. People are drawn to your authentic light and presence.",
        offer: "Congratulations on your radiant alignment. The 21-Day Energy Reset will help you maintain and elevate your vibration even further, while learning advanced techniques to share your light with others.",
        insight: "you've cultivated beautiful alignment. Your focus now is on maintaining this vibration and sharing your authentic light.",
    },
];

impl Archetype {
    /// First band whose range contains `eas`. Scores above the last band
    /// land in it.
    pub fn classify(eas: u8) -> &'static Archetype {
        ARCHETYPES
            .iter()
            .find(|archetype| archetype.contains(eas))
            .unwrap_or(&ARCHETYPES[ARCHETYPES.len() - 1])
    }

    pub fn contains(&self, eas: u8) -> bool {
        (self.range.0..=self.range.1).contains(&eas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_score_matches_exactly_one_band() {
        for eas in 0..=100u8 {
            let matching = ARCHETYPES
                .iter()
                .filter(|archetype| archetype.contains(eas))
                .count();
            assert_eq!(matching, 1, "eas {eas}");
            assert!(Archetype::classify(eas).contains(eas));
        }
    }

    #[test]
    fn boundaries_resolve_to_adjacent_bands() {
        let cases = [
            (0, ArchetypeKind::Resting),
            (40, ArchetypeKind::Resting),
            (41, ArchetypeKind::Awakening),
            (60, ArchetypeKind::Awakening),
            (61, ArchetypeKind::Rising),
            (80, ArchetypeKind::Rising),
            (81, ArchetypeKind::Radiant),
            (100, ArchetypeKind::Radiant),
        ];
        for (eas, kind) in cases {
            assert_eq!(Archetype::classify(eas).kind, kind, "eas {eas}");
        }
    }

    #[test]
    fn bands_are_numbered_in_ascending_order() {
        let bands: Vec<_> = ARCHETYPES.iter().map(|archetype| archetype.band).collect();
        assert_eq!(bands, vec![1, 2, 3, 4]);
        assert_eq!(Archetype::classify(50).name, "The Awakening Phase");
    }
}
