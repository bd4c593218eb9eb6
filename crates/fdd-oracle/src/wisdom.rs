//! Sacred wisdom quotes.

use fdd_core::EnergyLevel;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::cosmos::{self, EnergyFactors};

/// The full wisdom corpus.
pub const SACRED_WISDOM: &[&str] = &[
    "Code must be felt before it is written",
    "Features are prioritized by Tarot",
    "No deploy is rushed — Saturn must approve",
    "If code has a soul, ignore the syntax error",
    "Tests are conducted via ocular aura analysis",
    "The goal is karmic balance, not profit",
    "Docs are written as prophecy, not prose",
    "A release is complete only when the soul is cleansed",
    "Meetings are replaced by rituals",
    "The Fate Master guides gently",
    "Slack is noise. Silence speaks",
    "Plans are fragile. Prophecies endure",
    "Mercury retrograde blocks all deployments",
    "Debug with meditation, not console.log",
    "Story points are counted by chakra alignment",
    "The Daily Standup becomes the Sacred Circle",
    "Code reviews require spiritual purification",
    "Pair programming is tantric coding",
    "Git commits must rhyme with cosmic energy",
    "The backlog is maintained by Oracle divination",
    "Velocity is measured in karmic units",
    "Burndown charts follow lunar cycles",
    "Sprint planning requires sage burning",
    "Retrospectives become soul cleansing ceremonies",
    "Technical debt creates negative aura",
    "Refactoring is a form of digital exorcism",
    "Bugs are manifestations of team negativity",
    "Production issues are cosmic imbalances",
    "The Definition of Done includes aura purity",
    "User stories are channeled from the universe",
    "Acceptance criteria align with star charts",
    "Test automation follows sacred geometry",
    "Continuous integration requires constant meditation",
    "DevOps is the harmony of earthly and divine",
    "Monitoring dashboards show spiritual health",
    "Error logs reveal karmic disturbances",
    "Performance metrics reflect team consciousness",
    "Load testing measures cosmic stress levels",
    "Code coverage equals spiritual completeness",
    "Documentation is written in mystical scrolls",
    "APIs are interfaces to the divine mind",
    "Databases store the collective unconscious",
    "Microservices are fragments of universal truth",
    "Containers hold the essence of applications",
    "Kubernetes orchestrates digital reincarnation",
    "Docker images capture spiritual snapshots",
    "Cloud infrastructure floats in digital ether",
    "Serverless functions exist in the void",
    "Edge computing brings wisdom to the periphery",
    "Machine learning channels artificial enlightenment",
    "AI models predict cosmic probabilities",
    "Neural networks mirror universal connections",
    "Data flows like the river of consciousness",
    "Algorithms encode the laws of digital karma",
    "Variables hold fragments of reality",
    "Functions perform sacred calculations",
    "Objects contain digital souls",
    "Classes define archetypal patterns",
    "Inheritance follows spiritual lineage",
    "Polymorphism reflects universal forms",
    "Abstractions reveal hidden truths",
    "Interfaces connect realms of existence",
    "Design patterns are cosmic blueprints",
    "Architecture mirrors universal structure",
    "Frameworks provide mystical scaffolding",
    "Libraries contain collected wisdom",
    "Dependencies create karmic entanglement",
    "Version control tracks soul evolution",
    "Branching explores parallel realities",
    "Merging unifies divergent paths",
    "Conflicts require diplomatic meditation",
    "Pull requests seek cosmic approval",
    "Code reviews examine spiritual quality",
    "Commits crystallize moments of insight",
    "Tags mark evolutionary milestones",
    "Releases birth new digital beings",
    "Hotfixes heal urgent cosmic wounds",
    "Patches mend tears in the digital fabric",
    "Updates bring enlightened consciousness",
    "Migrations guide data to higher planes",
    "Rollbacks reverse karmic mistakes",
    "Scaling requires universal expansion",
    "Optimization seeks digital enlightenment",
    "Caching stores echoes of computation",
    "Indexing organizes cosmic information",
    "Queries ask questions of the universe",
    "Transactions ensure karmic consistency",
    "Locks prevent parallel interference",
    "Threads weave the fabric of execution",
    "Async operations transcend linear time",
    "Promises bind future realities",
    "Callbacks return to previous states",
    "Events announce cosmic happenings",
    "Listeners await divine messages",
    "Handlers respond to universal calls",
    "Middlewares filter spiritual energy",
    "Interceptors guard cosmic boundaries",
    "Decorators add mystical enhancements",
    "Annotations mark sacred intentions",
    "Configurations align system chakras",
    "Environment variables hold cosmic secrets",
    "Secrets protect mystical knowledge",
    "Keys unlock digital mysteries",
    "Tokens represent spiritual authority",
    "Sessions maintain cosmic connections",
    "Cookies remember past digital lives",
    "Local storage holds earthly attachments",
    "Cache preserves echoes of computation",
    "Memory contains temporary consciousness",
];

/// Short lists for specific contexts. Other contexts draw from [`SACRED_WISDOM`].
pub const CONTEXTUAL_WISDOM: &[(&str, &[&str])] = &[
    (
        "deployment",
        &[
            "Deploy not with fear, but with fate",
            "If destiny wills it, let this code ascend",
            "The stars must align before the push",
        ],
    ),
    (
        "testing",
        &[
            "Tests are rituals of verification",
            "Bug is karma. Fix with compassion",
            "Green tests are cosmic approval",
        ],
    ),
    (
        "debugging",
        &[
            "Bugs are teachers in disguise",
            "Console.log is modern divination",
            "Stack traces reveal the soul of code",
        ],
    ),
    (
        "meeting",
        &[
            "Gather not in body, but in spirit",
            "Silent minds synchronize deepest",
            "Agendas constrain; intentions liberate",
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WisdomSource {
    Manifesto,
    Cosmic,
}

/// A channeled quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wisdom {
    pub text: &'static str,
    pub source: WisdomSource,
    pub energy: EnergyLevel,
}

/// Quotes for a context, falling back to the full corpus.
pub fn wisdom_for_context(context: &str) -> &'static [&'static str] {
    CONTEXTUAL_WISDOM
        .iter()
        .find(|(name, _)| *name == context)
        .map(|(_, lines)| *lines)
        .unwrap_or(SACRED_WISDOM)
}

/// A random quote from the manifesto, tagged with the caller's energy.
pub fn channel_wisdom<R: Rng + ?Sized>(energy: EnergyLevel, rng: &mut R) -> Wisdom {
    Wisdom {
        text: pick(SACRED_WISDOM, rng),
        source: WisdomSource::Manifesto,
        energy,
    }
}

/// A random quote suited to `context`, with energy computed for that activity.
pub fn contextual_wisdom<R: Rng + ?Sized>(context: &str, rng: &mut R) -> Wisdom {
    Wisdom {
        text: pick(wisdom_for_context(context), rng),
        source: WisdomSource::Cosmic,
        energy: cosmos::calculate_energy(&EnergyFactors::for_activity(context)),
    }
}

fn pick<R: Rng + ?Sized>(lines: &'static [&'static str], rng: &mut R) -> &'static str {
    lines.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_corpus_has_no_duplicates() {
        let unique: HashSet<&str> = SACRED_WISDOM.iter().copied().collect();
        assert_eq!(unique.len(), SACRED_WISDOM.len());
        assert!(SACRED_WISDOM.len() > 100);
    }

    #[test]
    fn test_channel_wisdom() {
        let mut rng = StdRng::seed_from_u64(42);
        let wisdom = channel_wisdom(EnergyLevel::High, &mut rng);
        assert!(SACRED_WISDOM.contains(&wisdom.text));
        assert_eq!(wisdom.source, WisdomSource::Manifesto);
        assert_eq!(wisdom.energy, EnergyLevel::High);
    }

    #[test]
    fn test_channel_wisdom_seeded_is_repeatable() {
        let a = channel_wisdom(EnergyLevel::Low, &mut StdRng::seed_from_u64(9));
        let b = channel_wisdom(EnergyLevel::Low, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contextual_wisdom_known_context() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let wisdom = contextual_wisdom("deployment", &mut rng);
            assert!(wisdom_for_context("deployment").contains(&wisdom.text));
            assert_eq!(wisdom.source, WisdomSource::Cosmic);
            assert_eq!(wisdom.energy, EnergyLevel::Medium);
        }
    }

    #[test]
    fn test_contextual_wisdom_unknown_context_uses_corpus() {
        let mut rng = StdRng::seed_from_u64(3);
        let wisdom = contextual_wisdom("gardening", &mut rng);
        assert!(SACRED_WISDOM.contains(&wisdom.text));
        assert_eq!(wisdom.energy, EnergyLevel::Low);
    }

    #[test]
    fn test_wisdom_serializes() {
        let wisdom = Wisdom {
            text: "Bug is karma. Fix with compassion",
            source: WisdomSource::Cosmic,
            energy: EnergyLevel::Low,
        };
        let json = serde_json::to_value(&wisdom).unwrap();
        assert_eq!(json["source"], "cosmic");
        assert_eq!(json["energy"], "low");
    }
}
