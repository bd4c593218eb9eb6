//! The ten sacred ceremonies and the weekly ritual calendar.

use chrono::Weekday;
use fdd_core::AuraColor;
use serde::Serialize;

/// Ritual-specific text shown under the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum RitualDetail {
    Questions(&'static [&'static str]),
    Steps(&'static [&'static str]),
    Incantation(&'static str),
    SacredWords(&'static str),
    Practice(&'static str),
    Requirement(&'static str),
    Method(&'static str),
    Reflections(&'static [&'static str]),
    Approval(&'static str),
    Celebration(&'static str),
}

impl RitualDetail {
    pub fn label(&self) -> &'static str {
        match self {
            RitualDetail::Questions(_) => "Sacred Questions",
            RitualDetail::Steps(_) => "Ritual Steps",
            RitualDetail::Incantation(_) => "Incantation",
            RitualDetail::SacredWords(_) => "Sacred Words",
            RitualDetail::Practice(_) => "Practice",
            RitualDetail::Requirement(_) => "Requirement",
            RitualDetail::Method(_) => "Method",
            RitualDetail::Reflections(_) => "Reflection Prompts",
            RitualDetail::Approval(_) => "Approval",
            RitualDetail::Celebration(_) => "Celebration",
        }
    }

    /// Detail as lines of text.
    pub fn lines(&self) -> Vec<&'static str> {
        match *self {
            RitualDetail::Questions(items)
            | RitualDetail::Steps(items)
            | RitualDetail::Reflections(items) => items.to_vec(),
            RitualDetail::Incantation(text)
            | RitualDetail::SacredWords(text)
            | RitualDetail::Practice(text)
            | RitualDetail::Requirement(text)
            | RitualDetail::Method(text)
            | RitualDetail::Approval(text)
            | RitualDetail::Celebration(text) => vec![text],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ritual {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    #[serde(rename = "auraColor")]
    pub aura: AuraColor,
    pub detail: RitualDetail,
}

pub const RITUALS: &[Ritual] = &[
    Ritual {
        id: 1,
        title: "Daily Enlightenment Ritual",
        subtitle: "FDD's version of the Daily Stand-up",
        icon: "✨",
        description: "Begin with 3 minutes of silent meditation and answer mystical questions",
        aura: AuraColor::Gold,
        detail: RitualDetail::Questions(&[
            "What did I notice yesterday?",
            "What am I energetically focused on today?",
            "Is there any karmic blockage in me?",
        ]),
    },
    Ritual {
        id: 2,
        title: "Fateboard Session",
        subtitle: "Divinatory Planning",
        icon: "🔮",
        description: "Spin the Wheel of Fate and receive runic symbols for task assignment",
        aura: AuraColor::Purple,
        detail: RitualDetail::Steps(&[
            "Fate Master and Oracle Owner spin the Wheel of Fate",
            "Each team member receives a runic symbol",
            "Tasks drawn from the Prophecy Backlog",
        ]),
    },
    Ritual {
        id: 3,
        title: "Dark Code Purification",
        subtitle: "Before major refactors",
        icon: "🌑",
        description: "Sacred ceremony to release old code and clear technical debt",
        aura: AuraColor::Indigo,
        detail: RitualDetail::Incantation("This code once served. Now it must go."),
    },
    Ritual {
        id: 4,
        title: "Sacred Deployment Ceremony",
        subtitle: "Pre-production deployment ritual",
        icon: "🔥",
        description: "Channel cosmic energy before releasing code to production",
        aura: AuraColor::Red,
        detail: RitualDetail::SacredWords("If destiny wills it, let this code ascend."),
    },
    Ritual {
        id: 5,
        title: "Code Trance Session",
        subtitle: "Replaces pair programming",
        icon: "🧘",
        description: "Two Code Mediums unite consciousness for mystical coding",
        aura: AuraColor::Blue,
        detail: RitualDetail::Practice("Two minds, one code"),
    },
    Ritual {
        id: 6,
        title: "Full Moon Refactor Night",
        subtitle: "Special lunar event",
        icon: "🌕",
        description: "Midnight refactoring session under full moon energy",
        aura: AuraColor::Violet,
        detail: RitualDetail::Requirement("Only deprecated code, candlelight mandatory"),
    },
    Ritual {
        id: 7,
        title: "Karma QA Ritual",
        subtitle: "Energetic application testing",
        icon: "🧿",
        description: "Feel the application's energy and report chakra disturbances",
        aura: AuraColor::Green,
        detail: RitualDetail::Method("Bugs = disturbed frequencies"),
    },
    Ritual {
        id: 8,
        title: "Reincarnation Session",
        subtitle: "Replaces sprint retrospective",
        icon: "🔁",
        description: "Reflect on transformation and spiritual growth",
        aura: AuraColor::Orange,
        detail: RitualDetail::Reflections(&[
            "What did I transform into?",
            "What did the code whisper to me?",
            "What choice expanded my karma?",
        ]),
    },
    Ritual {
        id: 9,
        title: "Soul Pull Request Ceremony",
        subtitle: "Pull request review process",
        icon: "📣",
        description: "Submit PRs with poetry and receive metaphorical feedback",
        aura: AuraColor::Yellow,
        detail: RitualDetail::Approval("Your Aura Shines ✨"),
    },
    Ritual {
        id: 10,
        title: "Universal Alignment Festival",
        subtitle: "Quarterly OKR celebration",
        icon: "🧬",
        description: "Align company goals with spiritual growth and chakra activation",
        aura: AuraColor::Indigo,
        detail: RitualDetail::Celebration("Incense and mandala creation, not pizza"),
    },
];

pub fn ritual_by_id(id: u32) -> Option<&'static Ritual> {
    RITUALS.iter().find(|r| r.id == id)
}

// ============================================================================
// Weekly calendar
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: Weekday,
    pub ritual: &'static str,
    pub purpose: &'static str,
    pub icon: &'static str,
}

/// Monday through Sunday.
pub const WEEKLY_CALENDAR: [CalendarDay; 7] = [
    CalendarDay {
        day: Weekday::Mon,
        ritual: "Daily Enlightenment",
        purpose: "Energy alignment",
        icon: "✨",
    },
    CalendarDay {
        day: Weekday::Tue,
        ritual: "Fateboard Session",
        purpose: "Weekly destiny selection",
        icon: "🔮",
    },
    CalendarDay {
        day: Weekday::Wed,
        ritual: "Code Trance Session",
        purpose: "Collaborative soul-coding",
        icon: "🧘",
    },
    CalendarDay {
        day: Weekday::Thu,
        ritual: "Karma QA",
        purpose: "Feel-based application review",
        icon: "🧿",
    },
    CalendarDay {
        day: Weekday::Fri,
        ritual: "Sacred Deployment",
        purpose: "Releasing code to the cosmos",
        icon: "🔥",
    },
    CalendarDay {
        day: Weekday::Sat,
        ritual: "Full Moon Refactor",
        purpose: "Deep energetic transformation",
        icon: "🌕",
    },
    CalendarDay {
        day: Weekday::Sun,
        ritual: "Reincarnation Session",
        purpose: "Closure and rebirth reflection",
        icon: "🔁",
    },
];

pub fn ritual_for_day(day: Weekday) -> &'static CalendarDay {
    &WEEKLY_CALENDAR[day.num_days_from_monday() as usize]
}
