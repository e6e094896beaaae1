pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod formatting;
pub mod logging;
pub mod notifier;
pub mod report;
pub mod scheduler;
pub mod sources;
pub mod summary;
pub mod trend;

pub use error::{Error, Result};

#[cfg(test)]
mod test_server;
