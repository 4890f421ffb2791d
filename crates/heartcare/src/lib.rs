//! Cardiovascular risk assessment service library.
//!
//! The [`assessment`] module carries the scoring engine, recommendation
//! composer, and the intake/storage scaffolding around them. Configuration,
//! telemetry, and the shared error type live alongside so binaries only need
//! to wire a repository and a listener.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
