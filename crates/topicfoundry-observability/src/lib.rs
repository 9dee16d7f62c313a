//! # topicfoundry-observability
//!
//! Structured logging for TopicFoundry. Logs always go to stderr so that
//! generated artifacts on stdout stay clean enough to pipe into `psql` or `jq`.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig, LOG_ENV};
