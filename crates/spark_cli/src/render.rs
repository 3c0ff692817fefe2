//! Fixed-width terminal rendering for registry views.
//!
//! Cells are padded, never truncated; long notes simply run past the rule.

use chrono::NaiveDate;
use spark_core::{Agenda, Creator, RegistrySummary};

const LIST_WIDTHS: [usize; 5] = [16, 10, 6, 18, 50];
const LIST_ALIGNS: [Align; 5] = [Align::Left, Align::Left, Align::Right, Align::Right, Align::Left];
const LIST_HEADER: [&str; 5] = ["Handle", "Platform", "Heat", "Last boosted", "Note"];
const LIST_RULE_WIDTH: usize = 120;

const AGENDA_WIDTHS: [usize; 4] = [16, 6, 6, 60];
const AGENDA_ALIGNS: [Align; 4] = [Align::Left, Align::Right, Align::Right, Align::Left];
const AGENDA_HEADER: [&str; 4] = ["Handle", "Heat", "Days", "Focus note"];
const AGENDA_RULE_WIDTH: usize = 96;

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

pub fn list_table(creators: &[Creator], today: NaiveDate) -> String {
    if creators.is_empty() {
        return "No creators match the current filters.".to_string();
    }

    let mut lines = vec![
        format_row(&LIST_HEADER, &LIST_WIDTHS, &LIST_ALIGNS),
        "-".repeat(LIST_RULE_WIDTH),
    ];
    for creator in creators {
        let heat = format!("{:.2}", creator.heat);
        let boosted = format!(
            "{} ({}d)",
            creator.last_boosted.format("%Y-%m-%d"),
            creator.staleness_days(today)
        );
        lines.push(format_row(
            &[
                creator.handle.as_str(),
                creator.platform.as_str(),
                heat.as_str(),
                boosted.as_str(),
                creator.note.as_str(),
            ],
            &LIST_WIDTHS,
            &LIST_ALIGNS,
        ));
    }
    lines.join("\n")
}

pub fn summary_report(summary: Option<&RegistrySummary>) -> String {
    let Some(summary) = summary else {
        return "No creators tracked yet.".to_string();
    };

    let hottest = &summary.hottest;
    let stalest = &summary.stalest;
    [
        "=== Creator Spark Registry ===".to_string(),
        format!("Average heat: {:.2}", summary.average_heat),
        format!(
            "Top lead: {} ({:.2}) - {} on {}",
            hottest.handle, hottest.heat, hottest.category, hottest.platform
        ),
        format!(
            "Needs love: {} (last boost {} days ago, note: {})",
            stalest.handle, summary.stalest_days, stalest.note
        ),
    ]
    .join("\n")
}

/// A due set emptied by `--limit 0` still prints the title, header and rule.
pub fn agenda_table(agenda: &Agenda, window_days: u32, today: NaiveDate) -> String {
    if agenda.nothing_due() {
        return format!("All creators were boosted within the last {window_days} days.");
    }

    let mut lines = vec![
        format!("Boost agenda (older than {window_days} days)"),
        format_row(&AGENDA_HEADER, &AGENDA_WIDTHS, &AGENDA_ALIGNS),
        "-".repeat(AGENDA_RULE_WIDTH),
    ];
    for creator in &agenda.queued {
        let heat = format!("{:.2}", creator.heat);
        let days = creator.staleness_days(today).to_string();
        lines.push(format_row(
            &[
                creator.handle.as_str(),
                heat.as_str(),
                days.as_str(),
                creator.note.as_str(),
            ],
            &AGENDA_WIDTHS,
            &AGENDA_ALIGNS,
        ));
    }
    lines.join("\n")
}

fn format_row(cells: &[&str], widths: &[usize], aligns: &[Align]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), align)| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
