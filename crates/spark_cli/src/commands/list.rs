//! List command
//!
//! Usage: spark list [--limit N] [--sort heat|staleness] [--min-heat F]

use clap::{Args, ValueEnum};
use spark_core::{ListQuery, ListSort};

use super::{CommandResult, Registry};
use crate::render::list_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Heat,
    Staleness,
}

impl From<SortArg> for ListSort {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Heat => ListSort::Heat,
            SortArg::Staleness => ListSort::Staleness,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show at most N creators (0 shows all)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Sort order, highest first
    #[arg(long, value_enum, default_value_t = SortArg::Heat)]
    pub sort: SortArg,

    /// Only show creators with at least this heat
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_heat: f64,
}

/// Execute list command
pub fn execute(args: ListArgs, registry: &Registry) -> CommandResult {
    let query = ListQuery {
        min_heat: args.min_heat,
        sort: args.sort.into(),
        limit: args.limit,
    };
    let creators = registry.list(&query)?;
    println!("{}", list_table(&creators, registry.today()));
    Ok(())
}
