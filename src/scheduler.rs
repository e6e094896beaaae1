use crate::error::Result;
use crate::fetch::{PageSource, describe_error};
use crate::notifier::Notifier;
use crate::report::{MessageBuilder, cairo_now};
use chrono::DateTime;
use chrono_tz::Tz;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

pub const DEFAULT_INTERVAL_SECS: u64 = 1800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub cycle: u64,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Delivered(CycleSummary),
    Failed { cycle: u64, reason: String },
}

impl CycleOutcome {
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Builds and sends one report per interval, forever.
pub struct Scheduler<S, N> {
    builder: MessageBuilder<S>,
    notifier: N,
    interval: Duration,
    cycle: u64,
}

impl<S, N> Scheduler<S, N>
where
    S: PageSource,
    N: Notifier,
{
    pub const fn new(builder: MessageBuilder<S>, notifier: N, interval: Duration) -> Self {
        Self {
            builder,
            notifier,
            interval,
            cycle: 0,
        }
    }

    pub const fn builder(&self) -> &MessageBuilder<S> {
        &self.builder
    }

    /// Scrape, render and send. Only delivery can fail.
    pub async fn run_cycle(&mut self, now: DateTime<Tz>) -> Result<CycleSummary> {
        self.cycle += 1;
        let report = self.builder.build(now).await;
        self.notifier.send(&report.text).await?;
        Ok(CycleSummary {
            cycle: self.cycle,
            missing: report.missing,
        })
    }

    /// Runs one cycle and absorbs its failure.
    pub async fn tick(&mut self, now: DateTime<Tz>) -> CycleOutcome {
        match self.run_cycle(now).await {
            Ok(summary) => {
                info!(cycle = summary.cycle, missing = summary.missing, "report sent");
                CycleOutcome::Delivered(summary)
            }
            Err(err) => {
                let reason = describe_error(&err);
                error!(cycle = self.cycle, %reason, "cycle failed");
                CycleOutcome::Failed {
                    cycle: self.cycle,
                    reason,
                }
            }
        }
    }

    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "scheduler started");
        loop {
            self.tick(cairo_now()).await;
            sleep(self.interval).await;
        }
    }
}
