//! Pure selection and aggregation over an in-memory creator list.
//!
//! # Invariants
//! - All sorts are stable: ties keep stored order.
//! - Date-derived values are computed against the caller's `today`.

use chrono::{Days, NaiveDate};
use std::cmp::Ordering;

use crate::model::creator::Creator;

pub const DEFAULT_AGENDA_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_AGENDA_LIMIT: usize = 5;

/// Sort order for list views, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSort {
    #[default]
    Heat,
    Staleness,
}

/// Filter/sort/limit options for the list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Inclusive lower heat bound.
    pub min_heat: f64,
    pub sort: ListSort,
    /// `None` and `Some(0)` both mean unlimited.
    pub limit: Option<usize>,
}

/// Options for the boost agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaQuery {
    /// Creators boosted on or before `today - window_days` are due.
    pub window_days: u32,
    pub limit: usize,
}

impl Default for AgendaQuery {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_AGENDA_WINDOW_DAYS,
            limit: DEFAULT_AGENDA_LIMIT,
        }
    }
}

/// Result of an agenda selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Agenda {
    /// Due creators after ordering and the limit.
    pub queued: Vec<Creator>,
    /// Due creators before the limit; zero means nobody is due.
    pub due: usize,
}

impl Agenda {
    /// True when no creator falls outside the window, whatever the limit.
    pub fn nothing_due(&self) -> bool {
        self.due == 0
    }
}

/// Aggregate view over the whole registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySummary {
    pub average_heat: f64,
    /// Highest heat; first in stored order on ties.
    pub hottest: Creator,
    /// Highest staleness; first in stored order on ties.
    pub stalest: Creator,
    pub stalest_days: i64,
}

/// Applies heat filter, descending sort and limit.
pub fn select_list(creators: Vec<Creator>, query: &ListQuery, today: NaiveDate) -> Vec<Creator> {
    let mut selected: Vec<Creator> = creators
        .into_iter()
        .filter(|creator| creator.heat >= query.min_heat)
        .collect();

    match query.sort {
        ListSort::Heat => selected.sort_by(by_heat_desc),
        ListSort::Staleness => selected.sort_by(|a, b| by_staleness_desc(a, b, today)),
    }

    if let Some(limit) = query.limit.filter(|limit| *limit > 0) {
        selected.truncate(limit);
    }
    selected
}

/// Creators due for a boost, stalest first, hottest breaking ties.
///
/// `due` is counted before the limit, so a limit of 0 still reports
/// whether anyone is due.
pub fn select_agenda(creators: Vec<Creator>, query: &AgendaQuery, today: NaiveDate) -> Agenda {
    let Some(cutoff) = today.checked_sub_days(Days::new(u64::from(query.window_days))) else {
        return Agenda {
            queued: Vec::new(),
            due: 0,
        };
    };

    let mut queued: Vec<Creator> = creators
        .into_iter()
        .filter(|creator| creator.last_boosted <= cutoff)
        .collect();
    queued.sort_by(|a, b| by_staleness_desc(a, b, today).then_with(|| by_heat_desc(a, b)));
    let due = queued.len();
    queued.truncate(query.limit);
    Agenda { queued, due }
}

/// Mean heat plus hottest and stalest picks; `None` for an empty registry.
pub fn summarize(creators: &[Creator], today: NaiveDate) -> Option<RegistrySummary> {
    let first = creators.first()?;
    let mut hottest = first;
    let mut stalest = first;
    let mut total_heat = 0.0;

    for creator in creators {
        total_heat += creator.heat;
        if creator.heat > hottest.heat {
            hottest = creator;
        }
        if creator.staleness_days(today) > stalest.staleness_days(today) {
            stalest = creator;
        }
    }

    Some(RegistrySummary {
        average_heat: total_heat / creators.len() as f64,
        hottest: hottest.clone(),
        stalest: stalest.clone(),
        stalest_days: stalest.staleness_days(today),
    })
}

fn by_heat_desc(a: &Creator, b: &Creator) -> Ordering {
    b.heat.total_cmp(&a.heat)
}

fn by_staleness_desc(a: &Creator, b: &Creator, today: NaiveDate) -> Ordering {
    b.staleness_days(today).cmp(&a.staleness_days(today))
}
