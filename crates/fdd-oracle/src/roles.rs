//! The mystical roles of the sacred circle.

use fdd_core::{AuraColor, EnergyLevel};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A team role with its duties and instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub aura: AuraColor,
    #[serde(rename = "cosmicLevel")]
    pub energy: EnergyLevel,
    pub responsibilities: &'static [&'static str],
    #[serde(rename = "mysticalTools")]
    pub tools: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        id: "fate-master",
        name: "Fate Master",
        icon: "🌀",
        description: "The mystical conductor of cosmic development energies, weaving destiny through strategic vision and team harmony.",
        aura: AuraColor::Purple,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Channel cosmic visions into actionable roadmaps",
            "Harmonize team energies across dimensional boundaries",
            "Conduct daily standup rituals with crystal clarity",
            "Manifest sprint goals through celestial planning",
            "Shield the team from temporal disturbances and scope creep",
        ],
        tools: &[
            "Sacred Scrum Crystal Ball",
            "Interdimensional Roadmap Scrolls",
            "Team Harmony Tuning Forks",
            "Cosmic Velocity Tracking Stones",
        ],
    },
    Role {
        id: "oracle-owner",
        name: "Oracle Owner",
        icon: "🔮",
        description: "The keeper of product wisdom, translating user whispers from across dimensions into sacred requirements.",
        aura: AuraColor::Gold,
        energy: EnergyLevel::Transcendent,
        responsibilities: &[
            "Commune with user spirits to divine true needs",
            "Maintain the Sacred Product Backlog of Infinite Possibilities",
            "Translate cosmic user stories into earthly acceptance criteria",
            "Navigate the astral planes of market research",
            "Balance feature requests with universal harmony",
        ],
        tools: &[
            "User Persona Tarot Deck",
            "Market Research Crystal Sphere",
            "Feature Priority Divination Runes",
            "Stakeholder Communication Enchanted Mirror",
        ],
    },
    Role {
        id: "code-medium",
        name: "Code Medium",
        icon: "💻",
        description: "The bridge between ethereal requirements and tangible reality, channeling pure logic into manifestable code.",
        aura: AuraColor::Blue,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Channel algorithms from the cosmic code repository",
            "Transmute requirements into living, breathing functions",
            "Perform sacred code reviews with enlightened scrutiny",
            "Maintain the temple of clean architecture",
            "Debug reality glitches in the matrix of logic",
        ],
        tools: &[
            "Quantum IDE of Infinite Possibilities",
            "Debugging Meditation Crystals",
            "Code Quality Incense Burners",
            "Refactoring Sage Wands",
        ],
    },
    Role {
        id: "transdimensional-liaison",
        name: "Transdimensional Liaison",
        icon: "🕊️",
        description: "The cosmic messenger bridging realms of stakeholders, ensuring harmony across all dimensional boundaries.",
        aura: AuraColor::Violet,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Facilitate telepathic communication between dimensions",
            "Translate technical mysticisms for earthly stakeholders",
            "Coordinate cross-dimensional project alignments",
            "Maintain stakeholder satisfaction across multiple realities",
            "Resolve conflicts through enlightened mediation",
        ],
        tools: &[
            "Universal Translation Amulets",
            "Stakeholder Mood Reading Crystals",
            "Interdimensional Meeting Portals",
            "Conflict Resolution Peace Pipes",
        ],
    },
    Role {
        id: "ceremony-conductor",
        name: "Ceremony Conductor",
        icon: "🔥",
        description: "The keeper of sacred rituals and continuous delivery, ensuring smooth passage through development cycles.",
        aura: AuraColor::Orange,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Orchestrate deployment ceremonies with cosmic precision",
            "Maintain the sacred CI/CD temple infrastructure",
            "Conduct ritual monitoring of system vital signs",
            "Guide souls through the afterlife of production",
            "Ensure applications achieve digital enlightenment",
        ],
        tools: &[
            "Deployment Ritual Drums",
            "Infrastructure Divination Cards",
            "Monitoring Crystal Arrays",
            "Sacred Pipeline Automation Scripts",
        ],
    },
    Role {
        id: "karma-qa",
        name: "Karma QA",
        icon: "🌌",
        description: "The guardian of cosmic balance, ensuring all code faces its karmic judgment before ascending to production.",
        aura: AuraColor::Green,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Execute karmic testing across dimensional planes",
            "Ensure bugs receive their cosmic justice",
            "Maintain the sacred test automation temple",
            "Channel user perspectives through empathetic testing",
            "Guard the gates of production with righteous validation",
        ],
        tools: &[
            "Bug Detection Crystal Pendulums",
            "Automated Test Summoning Circles",
            "User Journey Mapping Astrolabes",
            "Performance Testing Cosmic Scales",
        ],
    },
    Role {
        id: "celestial-ux-healer",
        name: "Celestial UX Healer",
        icon: "🎨",
        description: "The artist of user souls, crafting interfaces that heal digital trauma and inspire cosmic delight.",
        aura: AuraColor::Violet,
        energy: EnergyLevel::High,
        responsibilities: &[
            "Design interfaces that transcend dimensional barriers",
            "Heal user pain points through empathetic design",
            "Channel aesthetic energies into pixel-perfect reality",
            "Conduct user research séances for deeper insights",
            "Ensure accessibility across all planes of existence",
        ],
        tools: &[
            "Design System Sacred Geometry Tools",
            "User Empathy Visualization Crystals",
            "Accessibility Blessing Incantations",
            "Aesthetic Harmony Tuning Instruments",
        ],
    },
    Role {
        id: "entropy-wrangler",
        name: "Entropy Wrangler",
        icon: "🤏",
        description: "The cosmic custodian maintaining order in the chaos of development, ensuring sustainable team harmony.",
        aura: AuraColor::Red,
        energy: EnergyLevel::Medium,
        responsibilities: &[
            "Wrangle chaos into sustainable development patterns",
            "Maintain team energy levels and cosmic balance",
            "Identify and neutralize sources of negative entropy",
            "Facilitate knowledge transfer across consciousness barriers",
            "Ensure healthy boundaries between work and spiritual realms",
        ],
        tools: &[
            "Chaos Containment Crystals",
            "Team Energy Monitoring Devices",
            "Knowledge Transfer Telepathy Enhancers",
            "Work-Life Balance Meditation Bells",
        ],
    },
    Role {
        id: "sacred-scribe",
        name: "Sacred Scribe",
        icon: "📜",
        description: "The keeper of cosmic wisdom, documenting the eternal knowledge for future generations of developers.",
        aura: AuraColor::Yellow,
        energy: EnergyLevel::Medium,
        responsibilities: &[
            "Document cosmic development wisdom in sacred texts",
            "Maintain the library of eternal technical knowledge",
            "Translate complex algorithms into comprehensible prose",
            "Ensure knowledge persists across dimensional shifts",
            "Create enlightening tutorials for aspiring mystics",
        ],
        tools: &[
            "Infinite Documentation Scrolls",
            "Knowledge Crystallization Apparatus",
            "Tutorial Creation Magic Quills",
            "Version Control Temporal Anchors",
        ],
    },
    Role {
        id: "shadow-stakeholder",
        name: "Shadow Stakeholder",
        icon: "🔍",
        description: "The mysterious observer who ensures true requirements emerge from the shadows of unspoken needs.",
        aura: AuraColor::Purple,
        energy: EnergyLevel::Transcendent,
        responsibilities: &[
            "Observe development from the astral plane",
            "Identify hidden requirements in stakeholder shadows",
            "Challenge assumptions through enlightened questioning",
            "Ensure authentic user needs surface from the unconscious",
            "Provide cosmic perspective on earthly business needs",
        ],
        tools: &[
            "Requirement Divination Mirrors",
            "Assumption Testing Pendulums",
            "Stakeholder Truth Serum Potions",
            "Business Need Clarity Crystals",
        ],
    },
    Role {
        id: "reincarnation-mentor",
        name: "Reincarnation Mentor",
        icon: "🌱",
        description: "The wise guide helping team souls evolve through continuous learning and spiritual development.",
        aura: AuraColor::Silver,
        energy: EnergyLevel::Medium,
        responsibilities: &[
            "Guide souls through technical skill reincarnation",
            "Facilitate continuous learning journeys",
            "Mentor junior mystics in the ways of cosmic code",
            "Ensure knowledge flows freely between consciousness levels",
            "Foster growth mindset across all dimensional planes",
        ],
        tools: &[
            "Learning Path Astrology Charts",
            "Skill Evolution Tracking Crystals",
            "Mentorship Guidance Orbs",
            "Growth Mindset Activation Mantras",
        ],
    },
    Role {
        id: "universal-alignment-coordinator",
        name: "Universal Alignment Coordinator",
        icon: "🧙",
        description: "The supreme harmonizer ensuring all cosmic forces align for optimal development enlightenment.",
        aura: AuraColor::Gold,
        energy: EnergyLevel::Transcendent,
        responsibilities: &[
            "Coordinate alignment across all dimensional projects",
            "Ensure cosmic harmony in technical decisions",
            "Balance competing forces of innovation and stability",
            "Facilitate enlightened collaboration between all roles",
            "Maintain universal standards of cosmic excellence",
        ],
        tools: &[
            "Universal Alignment Cosmic Compass",
            "Interdimensional Collaboration Portals",
            "Harmony Resonance Frequency Generators",
            "Excellence Standards Divine Scrolls",
        ],
    },
];

pub fn role_by_id(id: &str) -> Option<&'static Role> {
    ROLES.iter().find(|r| r.id == id)
}

pub fn roles_with_aura(aura: AuraColor) -> Vec<&'static Role> {
    ROLES.iter().filter(|r| r.aura == aura).collect()
}

// ============================================================================
// Role assignment
// ============================================================================

/// A role handed out by [`generate_mystical_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub role: &'static str,
    pub description: &'static str,
    pub aura: AuraColor,
}

pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        role: "Fate Master",
        description: "Guides the cycle of destiny and purifies team energy",
        aura: AuraColor::Purple,
    },
    Archetype {
        role: "Oracle Owner",
        description: "Interprets the product's cosmic trajectory through visions",
        aura: AuraColor::Gold,
    },
    Archetype {
        role: "Code Medium",
        description: "Channels divine inspiration into sacred algorithms",
        aura: AuraColor::Blue,
    },
    Archetype {
        role: "Karma QA",
        description: "Sees spiritual causes of bugs and energetic imbalances",
        aura: AuraColor::Green,
    },
    Archetype {
        role: "Celestial UX Healer",
        description: "Aligns UI elements with chakras for harmonic design",
        aura: AuraColor::Violet,
    },
    Archetype {
        role: "Entropy Wrangler",
        description: "Tames chaos and aligns CI/CD with planetary rhythms",
        aura: AuraColor::Red,
    },
];

/// Assign a random archetype.
pub fn generate_mystical_role<R: Rng + ?Sized>(rng: &mut R) -> Archetype {
    ARCHETYPES.choose(rng).copied().unwrap_or(ARCHETYPES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_roles_table_shape() {
        assert_eq!(ROLES.len(), 12);
        let ids: HashSet<&str> = ROLES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), ROLES.len());
        for role in ROLES {
            assert_eq!(role.responsibilities.len(), 5, "{}", role.id);
            assert_eq!(role.tools.len(), 4, "{}", role.id);
        }
    }

    #[test]
    fn test_role_by_id() {
        let role = role_by_id("karma-qa").unwrap();
        assert_eq!(role.name, "Karma QA");
        assert_eq!(role.aura, AuraColor::Green);
        assert!(role_by_id("scrum-master").is_none());
    }

    #[test]
    fn test_roles_with_aura() {
        let gold: Vec<&str> = roles_with_aura(AuraColor::Gold).iter().map(|r| r.id).collect();
        assert_eq!(gold, vec!["oracle-owner", "universal-alignment-coordinator"]);
        assert!(roles_with_aura(AuraColor::Indigo).is_empty());
    }

    #[test]
    fn test_archetypes_are_roles() {
        for archetype in ARCHETYPES {
            assert!(
                ROLES.iter().any(|r| r.name == archetype.role),
                "{}",
                archetype.role
            );
        }
    }

    #[test]
    fn test_generate_mystical_role() {
        let mut rng = StdRng::seed_from_u64(8);
        let archetype = generate_mystical_role(&mut rng);
        assert!(ARCHETYPES.contains(&archetype));
    }

    #[test]
    fn test_role_serializes_with_site_keys() {
        let json = serde_json::to_value(role_by_id("fate-master").unwrap()).unwrap();
        assert_eq!(json["cosmicLevel"], "high");
        assert_eq!(json["aura"], "purple");
        assert_eq!(json["mysticalTools"].as_array().unwrap().len(), 4);
    }
}
