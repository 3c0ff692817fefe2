//! Runtime settings shared by every subcommand.
//!
//! Precedence is flag, then environment variable, then default; clap's `env`
//! support does the first two.

use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "creators.json";

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Path to the creator registry JSON file
    #[arg(long, global = true, env = "SPARK_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "SPARK_TODAY", value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "SPARK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "SPARK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub data_path: PathBuf,
    pub today: NaiveDate,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn resolve(args: GlobalArgs) -> Self {
        Self {
            data_path: args.data,
            today: args.today.unwrap_or_else(|| Local::now().date_naive()),
            log_level: args
                .log_level
                .unwrap_or_else(|| spark_core::default_log_level().to_string()),
            log_dir: args.log_dir,
        }
    }

    /// Starts file logging when a log directory is configured.
    pub fn init_logging(&self) -> Result<(), String> {
        match &self.log_dir {
            Some(dir) => spark_core::init_logging(&self.log_level, dir),
            None => Ok(()),
        }
    }
}

/// clap value parser for ISO dates.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    spark_core::parse_iso_date(value).ok_or_else(|| format!("`{value}` is not a YYYY-MM-DD date"))
}
