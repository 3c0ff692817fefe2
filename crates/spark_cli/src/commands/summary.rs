//! Summary command
//!
//! Usage: spark summary

use clap::Args;

use super::{CommandResult, Registry};
use crate::render::summary_report;

#[derive(Debug, Args)]
pub struct SummaryArgs {}

/// Execute summary command
pub fn execute(_args: SummaryArgs, registry: &Registry) -> CommandResult {
    let summary = registry.summary()?;
    println!("{}", summary_report(summary.as_ref()));
    Ok(())
}
