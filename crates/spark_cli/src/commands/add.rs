//! Add command
//!
//! Usage: spark add HANDLE PLATFORM CATEGORY NOTE HEAT [--last-seen D] [--last-boosted D]

use chrono::NaiveDate;
use clap::Args;
use spark_core::NewCreator;

use super::{CommandResult, Registry};
use crate::config::parse_date_arg;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Creator handle; `@` is added when missing
    pub handle: String,
    pub platform: String,
    pub category: String,
    /// Focus note shown in list and agenda views
    pub note: String,
    /// Momentum score, usually between 0 and 1
    #[arg(allow_negative_numbers = true)]
    pub heat: f64,

    /// Last day the creator was seen posting (defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    pub last_seen: Option<NaiveDate>,

    /// Last day the creator was boosted (defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    pub last_boosted: Option<NaiveDate>,
}

/// Execute add command
pub fn execute(args: AddArgs, registry: &Registry) -> CommandResult {
    let creator = registry.add(NewCreator {
        handle: args.handle,
        platform: args.platform,
        category: args.category,
        note: args.note,
        heat: args.heat,
        last_seen: args.last_seen,
        last_boosted: args.last_boosted,
    })?;
    println!("Added {} with heat {:.2}.", creator.handle, creator.heat);
    Ok(())
}
