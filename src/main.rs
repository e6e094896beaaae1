use anyhow::{Context, Result};
use clap::Parser;
use egprices::cli::Cli;
use egprices::config::Settings;
use egprices::fetch::HttpFetcher;
use egprices::logging;
use egprices::notifier::{ConsoleNotifier, Notifier, TelegramNotifier};
use egprices::report::{MessageBuilder, cairo_now};
use egprices::scheduler::Scheduler;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format)?;

    let settings = Settings::from_env();
    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;
    let builder = MessageBuilder::new(fetcher, settings.endpoints.clone());
    let interval = Duration::from_secs(cli.interval_secs);

    if cli.dry_run {
        info!("dry run: reports go to stdout");
        return drive(Scheduler::new(builder, ConsoleNotifier, interval), cli.once).await;
    }

    if !settings.has_token() {
        warn!("BOT_TOKEN is not set; Telegram will reject every message");
    }
    let notifier = TelegramNotifier::new(&settings.api_url, &settings.bot_token, &settings.chat_id)
        .context("failed to build Telegram client")?;
    info!(chat_id = %settings.chat_id, "posting to Telegram");
    drive(Scheduler::new(builder, notifier, interval), cli.once).await
}

async fn drive<N: Notifier>(
    mut scheduler: Scheduler<HttpFetcher, N>,
    once: bool,
) -> Result<ExitCode> {
    if once {
        let outcome = scheduler.tick(cairo_now()).await;
        return Ok(if outcome.is_delivered() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    scheduler.run().await;
    Ok(ExitCode::SUCCESS)
}
