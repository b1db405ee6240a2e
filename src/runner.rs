//! Sequential execution of the smoke checks.
//!
//! Checks run one at a time in [`Check::ALL`] order. The first failure ends
//! the run; later checks are never started.

use crate::checks::Check;
use crate::client::AsyncCharacterClient;
use crate::config::Expectations;
use crate::error::RunFailure;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Sink for the human-readable result lines of a run.
pub trait Reporter {
    fn line(&mut self, line: String);
}

/// Writes result lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, line: String) {
        println!("{}", line);
    }
}

impl Reporter for Vec<String> {
    fn line(&mut self, line: String) {
        self.push(line);
    }
}

/// A check that passed.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check: Check,
    pub detail: String,
    pub elapsed: Duration,
}

/// Result of a run in which every check passed.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub passed: Vec<CheckOutcome>,
    pub elapsed: Duration,
}

/// Runs the checks against one endpoint.
pub struct SmokeRunner {
    client: Arc<dyn AsyncCharacterClient>,
    expectations: Expectations,
}

impl SmokeRunner {
    pub fn new(client: Arc<dyn AsyncCharacterClient>, expectations: Expectations) -> Self {
        Self {
            client,
            expectations,
        }
    }

    /// Run every check in order, stopping at the first failure.
    pub async fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, RunFailure> {
        let started = Instant::now();
        let mut passed = Vec::with_capacity(Check::ALL.len());

        for check in Check::ALL {
            let index = check.number();
            info!("Running test {} ({})", index, check);

            let check_started = Instant::now();
            match check.run(self.client.as_ref(), &self.expectations).await {
                Ok(detail) => {
                    let elapsed = check_started.elapsed();
                    info!(
                        "Test {} ({}) passed in {} ms",
                        index,
                        check,
                        elapsed.as_millis()
                    );
                    reporter.line(format!("Test {}: {}", index, detail));
                    passed.push(CheckOutcome {
                        check,
                        detail,
                        elapsed,
                    });
                }
                Err(e) => {
                    error!("Test {} ({}) failed: {} ({:?})", index, check, e, e.kind());
                    reporter.line(format!("Test {} FAILED: {}", index, e));
                    reporter.line(format!("Tests failed! {}", e));
                    return Err(RunFailure {
                        index,
                        check,
                        error: e,
                    });
                }
            }
        }

        reporter.line("All tests completed successfully.".to_string());
        Ok(RunSummary {
            passed,
            elapsed: started.elapsed(),
        })
    }
}
