//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Binary (caller of the config loader):
//!     → logging.rs (subscriber setup, level selection)
//!     → structured log events to stdout
//! ```

pub mod logging;
