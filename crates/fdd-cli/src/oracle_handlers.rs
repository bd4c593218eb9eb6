//! Handler functions for the oracle commands: wisdom, tarot, roles,
//! rituals, faq and sky.

use chrono::{NaiveDate, Weekday};
use fdd_core::{Error, Result};
use fdd_oracle::cosmos::{self, EnergyFactors};
use fdd_oracle::faq::{self, FaqCategory, FaqEntry};
use fdd_oracle::rituals::{self, CalendarDay, Ritual};
use fdd_oracle::roles::{self, Role};
use fdd_oracle::{LoadingState, SkyReport, TarotReading, Wisdom, loading, tarot, wisdom};
use rand::Rng;

/// Log the loading state and a random loading message for `activity`.
fn announce<R: Rng + ?Sized>(activity: &str, rng: &mut R) {
    let state = LoadingState::for_activity(activity);
    tracing::info!(state = %state, "{}", loading::random_loading_message(rng));
}

// ============================================================================
// Handlers
// ============================================================================

pub fn handle_wisdom<R: Rng + ?Sized>(context: Option<&str>, rng: &mut R) -> Result<()> {
    announce("wisdom", rng);
    let channeled = match context {
        Some(context) => wisdom::contextual_wisdom(context, rng),
        None => {
            let energy = cosmos::calculate_energy(&EnergyFactors::default());
            wisdom::channel_wisdom(energy, rng)
        }
    };
    print!("{}", format_wisdom(&channeled));
    Ok(())
}

pub fn handle_tarot<R: Rng + ?Sized>(question: Option<&str>, rng: &mut R) -> Result<()> {
    announce("tarot", rng);
    let reading = match question {
        Some(q) => tarot::consult_oracle(q, rng),
        None => tarot::draw_card(rng),
    };
    print!("{}", format_reading(&reading));
    Ok(())
}

pub fn handle_roles(id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => {
            let role = roles::role_by_id(id).ok_or_else(|| Error::not_found("role", id))?;
            print!("{}", format_role(role));
        }
        None => print!("{}", format_role_list(roles::ROLES)),
    }
    Ok(())
}

pub fn handle_rituals(today: Option<Weekday>) -> Result<()> {
    match today {
        Some(day) => print!("{}", format_calendar_day(rituals::ritual_for_day(day))),
        None => {
            for ritual in rituals::RITUALS {
                print!("{}", format_ritual(ritual));
            }
            println!("Weekly calendar:");
            for day in &rituals::WEEKLY_CALENDAR {
                print!("{}", format_calendar_day(day));
            }
        }
    }
    Ok(())
}

pub fn handle_faq(category: Option<&str>, search: Option<&str>) -> Result<()> {
    let category = category.map(str::parse::<FaqCategory>).transpose()?;
    let entries = select_faq(category, search);
    if entries.is_empty() {
        println!("No questions match. The cosmos remains silent.");
        return Ok(());
    }
    for entry in entries {
        print!("{}", format_faq(entry));
    }
    Ok(())
}

pub fn handle_sky<R: Rng + ?Sized>(
    date: NaiveDate,
    hour: u32,
    activity: &str,
    rng: &mut R,
) -> Result<()> {
    announce("cosmic", rng);
    let report = SkyReport::observe(date, hour, activity);
    let aura = cosmos::aura_for_energy(report.energy, rng);
    print!("{}", format_sky(&report, activity));
    println!("  Aura:      {aura}");
    Ok(())
}

// ============================================================================
// Selection
// ============================================================================

fn select_faq(category: Option<FaqCategory>, search: Option<&str>) -> Vec<&'static FaqEntry> {
    let mut entries = match search {
        Some(query) => faq::search_faq(query),
        None => faq::FAQS.iter().collect(),
    };
    if let Some(category) = category {
        entries.retain(|f| f.category == category);
    }
    entries
}

// ============================================================================
// Formatting
// ============================================================================

fn format_wisdom(w: &Wisdom) -> String {
    format!("\"{}\"\n  ({:?} wisdom, {} energy)\n", w.text, w.source, w.energy)
}

fn format_reading(r: &TarotReading) -> String {
    format!(
        "🃏 {}\n  Meaning:  {}\n  Guidance: {}\n  Energy:   {}\n",
        r.card.name, r.card.meaning, r.card.guidance, r.energy
    )
}

fn format_role_list(roles: &[Role]) -> String {
    let width = roles.iter().map(|r| r.id.len()).max().unwrap_or(0);
    roles
        .iter()
        .map(|r| format!("{} {:<width$}  {} ({}, {})\n", r.icon, r.id, r.name, r.aura, r.energy))
        .collect()
}

fn format_role(role: &Role) -> String {
    let mut out = format!("{} {}\n{}\n\n", role.icon, role.name, role.description);
    out.push_str(&format!("Aura: {}  Energy: {}\n\nResponsibilities:\n", role.aura, role.energy));
    for item in role.responsibilities {
        out.push_str(&format!("  - {item}\n"));
    }
    out.push_str("Mystical tools:\n");
    for tool in role.tools {
        out.push_str(&format!("  - {tool}\n"));
    }
    out
}

fn format_ritual(ritual: &Ritual) -> String {
    let mut out = format!(
        "{} {}. {} ({})\n   {}\n   {}:\n",
        ritual.icon, ritual.id, ritual.title, ritual.subtitle, ritual.description,
        ritual.detail.label()
    );
    for line in ritual.detail.lines() {
        out.push_str(&format!("     {line}\n"));
    }
    out.push('\n');
    out
}

fn format_calendar_day(day: &CalendarDay) -> String {
    format!("{} {:<9} {}: {}\n", day.icon, weekday_name(day.day), day.ritual, day.purpose)
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn format_faq(entry: &FaqEntry) -> String {
    format!(
        "{} [{}] {}\n  {}\n\n",
        entry.icon, entry.category, entry.question, entry.answer
    )
}

fn format_sky(report: &SkyReport, activity: &str) -> String {
    let mercury = if report.mercury_retrograde {
        "retrograde, proceed with caution"
    } else {
        "direct"
    };
    let alignment = if report.aligned {
        "aligned"
    } else {
        "not aligned"
    };
    format!(
        "Sky on {}\n  Moon:      {}\n  Mercury:   {}\n  Energy:    {} ({})\n  Alignment: {}\n",
        report.date, report.moon_phase, mercury, report.energy, activity, alignment
    )
}

// ============================================================================
// Tests
// ============================================================================
