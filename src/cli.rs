use crate::logging::LogFormat;
use crate::scheduler::DEFAULT_INTERVAL_SECS;
use clap::Parser;

pub const ONCE_HELP: &str = "Run a single cycle and exit; the exit status reflects whether the report was delivered.";
pub const DRY_RUN_HELP: &str = "Print the report to stdout instead of posting it to Telegram.";
pub const INTERVAL_HELP: &str = "Seconds to sleep between cycles.";
pub const LOG_LEVEL_HELP: &str = "Log filter used when RUST_LOG is not set.";

#[derive(Debug, Parser)]
#[command(
    name = "egprices",
    about = "Scrape Egyptian gold, silver and bank USD prices and post them to a Telegram channel.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[arg(long, help = ONCE_HELP)]
    pub once: bool,
    #[arg(long, help = DRY_RUN_HELP)]
    pub dry_run: bool,
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = INTERVAL_HELP
    )]
    pub interval_secs: u64,
    #[arg(long, value_name = "FILTER", default_value = "info", help = LOG_LEVEL_HELP)]
    pub log_level: String,
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
