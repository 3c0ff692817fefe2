//! Boost command
//!
//! Usage: spark boost HANDLE [--note TEXT]

use clap::Args;

use super::{CommandResult, Registry};

#[derive(Debug, Args)]
pub struct BoostArgs {
    /// Handle of the creator you amplified
    pub handle: String,

    /// Replace the creator's focus note
    #[arg(long)]
    pub note: Option<String>,
}

/// Execute boost command
pub fn execute(args: BoostArgs, registry: &Registry) -> CommandResult {
    let creator = registry.boost(&args.handle, args.note.as_deref())?;
    println!(
        "Logged boost for {} ({}).",
        creator.handle, creator.category
    );
    Ok(())
}
