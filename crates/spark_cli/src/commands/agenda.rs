//! Agenda command
//!
//! Usage: spark agenda [--window N] [--limit N]

use clap::Args;
use spark_core::AgendaQuery;

use super::{CommandResult, Registry};
use crate::render::agenda_table;

#[derive(Debug, Args)]
pub struct AgendaArgs {
    /// Include creators not boosted in the last N days
    #[arg(long, default_value_t = AgendaQuery::default().window_days)]
    pub window: u32,

    /// Show at most N creators
    #[arg(long, default_value_t = AgendaQuery::default().limit)]
    pub limit: usize,
}

/// Execute agenda command
pub fn execute(args: AgendaArgs, registry: &Registry) -> CommandResult {
    let query = AgendaQuery {
        window_days: args.window,
        limit: args.limit,
    };
    let agenda = registry.agenda(&query)?;
    println!(
        "{}",
        agenda_table(&agenda, query.window_days, registry.today())
    );
    Ok(())
}
