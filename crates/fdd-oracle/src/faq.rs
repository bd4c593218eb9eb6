//! Frequently asked spiritual questions.

use std::fmt;
use std::str::FromStr;

use fdd_core::Error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaqCategory {
    Deployment,
    #[serde(rename = "Cosmic Events")]
    CosmicEvents,
    Process,
    Testing,
    Documentation,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 5] = [
        FaqCategory::Deployment,
        FaqCategory::CosmicEvents,
        FaqCategory::Process,
        FaqCategory::Testing,
        FaqCategory::Documentation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FaqCategory::Deployment => "Deployment",
            FaqCategory::CosmicEvents => "Cosmic Events",
            FaqCategory::Process => "Process",
            FaqCategory::Testing => "Testing",
            FaqCategory::Documentation => "Documentation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FaqCategory::Deployment => "🚀",
            FaqCategory::CosmicEvents => "🌙",
            FaqCategory::Process => "⚙️",
            FaqCategory::Testing => "🧪",
            FaqCategory::Documentation => "📚",
        }
    }
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaqCategory {
    type Err = Error;

    /// Case-insensitive; `cosmic-events` and `cosmic_events` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        FaqCategory::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| Error::invalid_data(format!("unknown FAQ category '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub icon: &'static str,
    pub category: FaqCategory,
    pub keywords: &'static [&'static str],
}

impl FaqEntry {
    /// Case-insensitive substring match on question, answer or keywords.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.question.to_lowercase().contains(&query)
            || self.answer.to_lowercase().contains(&query)
            || self.keywords.iter().any(|k| k.contains(&query))
    }
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: 1,
        question: "Do I need incense to deploy?",
        answer: "Not strictly — but it helps align your CI pipeline with the astral plane. Lavender is preferred for frontend.",
        icon: "🕯️",
        category: FaqCategory::Deployment,
        keywords: &["deploy", "incense", "astral", "frontend", "ci"],
    },
    FaqEntry {
        id: 2,
        question: "When is the best time to deploy?",
        answer: "Full moon on a Tuesday. Bonus if Venus is in Pisces.",
        icon: "🌕",
        category: FaqCategory::Deployment,
        keywords: &["deploy", "time", "full moon", "tuesday", "venus", "pisces"],
    },
    FaqEntry {
        id: 3,
        question: "What if my deployment fails during Mercury retrograde?",
        answer: "This is expected cosmic interference. Wait 3-21 days until Mercury goes direct, then try again with blessed config files.",
        icon: "⚡",
        category: FaqCategory::Deployment,
        keywords: &["deployment", "fail", "mercury", "retrograde", "config", "blessed"],
    },
    FaqEntry {
        id: 4,
        question: "Can I rollback a spiritually tainted release?",
        answer: "Yes, but first perform a digital exorcism. Use 'git revert' while chanting the commit SHA backwards.",
        icon: "🔄",
        category: FaqCategory::Deployment,
        keywords: &["rollback", "tainted", "release", "exorcism", "git", "revert"],
    },
    FaqEntry {
        id: 5,
        question: "What if Mercury is in retrograde during a sprint?",
        answer: "All deployments must pause. Instead, focus on refactoring karma and updating the Fate Map.",
        icon: "🪐",
        category: FaqCategory::CosmicEvents,
        keywords: &["mercury", "retrograde", "sprint", "deployment", "karma", "fate map"],
    },
    FaqEntry {
        id: 6,
        question: "How do solar eclipses affect my code quality?",
        answer: "Solar eclipses reveal hidden bugs. It's the perfect time for cosmic debugging and spiritual code reviews.",
        icon: "🌑",
        category: FaqCategory::CosmicEvents,
        keywords: &["solar", "eclipse", "code", "quality", "debugging", "reviews"],
    },
    FaqEntry {
        id: 7,
        question: "Should I avoid coding during a blood moon?",
        answer: "On the contrary! Blood moons enhance mystical programming abilities. Just don't commit anything without proper ritual blessing.",
        icon: "🌙",
        category: FaqCategory::CosmicEvents,
        keywords: &["blood", "moon", "coding", "mystical", "programming", "ritual"],
    },
    FaqEntry {
        id: 8,
        question: "What happens when Jupiter aligns with my localhost?",
        answer: "Your application gains cosmic scalability. Expect 10x performance improvements and spontaneous load balancing.",
        icon: "🪐",
        category: FaqCategory::CosmicEvents,
        keywords: &["jupiter", "align", "localhost", "scalability", "performance", "load balancing"],
    },
    FaqEntry {
        id: 9,
        question: "Can I reject a prophecy from the Fate Master?",
        answer: "Yes, but only after drawing three consecutive \"No\" cards from the Tarot API.",
        icon: "🔮",
        category: FaqCategory::Process,
        keywords: &["prophecy", "fate master", "reject", "tarot", "api"],
    },
    FaqEntry {
        id: 10,
        question: "How do I conduct a proper retrospective ceremony?",
        answer: "Light sage, form a circle, and each team member must confess their coding sins while the Ceremony Conductor takes notes.",
        icon: "🕯️",
        category: FaqCategory::Process,
        keywords: &["retrospective", "ceremony", "sage", "circle", "sins", "conductor"],
    },
    FaqEntry {
        id: 11,
        question: "What if the Oracle Owner's visions conflict with requirements?",
        answer: "Visions supersede requirements. The business stakeholders must align their chakras with the cosmic product roadmap.",
        icon: "👁️",
        category: FaqCategory::Process,
        keywords: &["oracle", "visions", "requirements", "stakeholders", "chakras", "roadmap"],
    },
    FaqEntry {
        id: 12,
        question: "How long should a Fate Session (sprint) last?",
        answer: "Until the cosmic energy is depleted, typically 13 days. Never force completion — let destiny decide.",
        icon: "⏰",
        category: FaqCategory::Process,
        keywords: &["fate", "session", "sprint", "cosmic", "energy", "destiny"],
    },
    FaqEntry {
        id: 13,
        question: "Is TDD compatible with FDD?",
        answer: "Only if the tests are written in iambic pentameter and blessed by the Karma QA during a full moon.",
        icon: "🧪",
        category: FaqCategory::Testing,
        keywords: &["tdd", "compatible", "tests", "iambic", "pentameter", "karma qa"],
    },
    FaqEntry {
        id: 14,
        question: "How do I test spiritual functions?",
        answer: "Use meditation-based assertions. If the function feels right in your soul, it passes. Trust your developer intuition.",
        icon: "🧘",
        category: FaqCategory::Testing,
        keywords: &["test", "spiritual", "functions", "meditation", "assertions", "intuition"],
    },
    FaqEntry {
        id: 15,
        question: "What's the mystical coverage requirement?",
        answer: "108% — the sacred number. You must test not only what the code does, but what it dreams of becoming.",
        icon: "📊",
        category: FaqCategory::Testing,
        keywords: &["coverage", "mystical", "108", "sacred", "dreams", "becoming"],
    },
    FaqEntry {
        id: 16,
        question: "Can I automate spiritual testing?",
        answer: "Partially. The Karma QA can sense automated auras, but human touch is needed for soul-level validation.",
        icon: "🤖",
        category: FaqCategory::Testing,
        keywords: &["automate", "spiritual", "testing", "karma qa", "auras", "soul"],
    },
    FaqEntry {
        id: 17,
        question: "Is documentation optional in FDD?",
        answer: "Never. Even the void must be documented. Prefer ink made during eclipses and parchment blessed by Sacred Scribes.",
        icon: "✍️",
        category: FaqCategory::Documentation,
        keywords: &["documentation", "void", "eclipse", "ink", "parchment", "sacred scribes"],
    },
    FaqEntry {
        id: 18,
        question: "How should I document mystical APIs?",
        answer: "Use prophecy-style language. Instead of 'returns array', write 'channels cosmic collection of destined entities'.",
        icon: "📜",
        category: FaqCategory::Documentation,
        keywords: &["document", "mystical", "apis", "prophecy", "cosmic", "entities"],
    },
    FaqEntry {
        id: 19,
        question: "What format should cosmic code comments use?",
        answer: "Haiku for simple functions, epic poetry for complex algorithms. Always include the planetary alignment when written.",
        icon: "💭",
        category: FaqCategory::Documentation,
        keywords: &["format", "cosmic", "comments", "haiku", "poetry", "planetary"],
    },
    FaqEntry {
        id: 20,
        question: "How do I version mystical documentation?",
        answer: "Use cosmic events: v1.0-solar-eclipse, v2.1-mercury-direct. Never version during retrograde periods.",
        icon: "🏷️",
        category: FaqCategory::Documentation,
        keywords: &["version", "mystical", "documentation", "cosmic", "events", "retrograde"],
    },
];

pub fn faq_by_category(category: FaqCategory) -> Vec<&'static FaqEntry> {
    FAQS.iter().filter(|f| f.category == category).collect()
}

/// Entry count per category, in [`FaqCategory::ALL`] order.
pub fn category_counts() -> Vec<(FaqCategory, usize)> {
    FaqCategory::ALL
        .into_iter()
        .map(|c| (c, FAQS.iter().filter(|f| f.category == c).count()))
        .collect()
}

/// Entries matching `query`, in table order. An empty query matches all.
pub fn search_faq(query: &str) -> Vec<&'static FaqEntry> {
    FAQS.iter().filter(|f| f.matches(query)).collect()
}
