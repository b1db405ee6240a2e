//! Character API Smoke - a sequential smoke-test harness for a public characters API.
//!
//! The harness issues plain HTTP GET requests against one endpoint and asserts
//! basic response contracts, halting at the first failure.
//!
//! # Architecture
//!
//! - **config**: Endpoint URL and expectations, overridable from the environment
//! - **error**: Transport, check and configuration error types
//! - **client**: Blocking `ureq` client plus an async wrapper
//! - **metrics**: Request counters and timing
//! - **models**: Character records and the page envelope
//! - **checks**: The five checks
//! - **runner**: Ordered, fail-fast execution of the checks

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod runner;

pub use checks::Check;
pub use client::{ApiResponse, AsyncCharacterClient, AsyncCharacterClientImpl, CharacterClient};
pub use config::{Config, Expectations};
pub use error::{ApiError, CheckError, ConfigError, FailureKind, RunFailure};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Character, CharacterPage};
pub use runner::{CheckOutcome, ConsoleReporter, Reporter, RunSummary, SmokeRunner};
