//! Structured logging setup.
//!
//! The crate instruments itself with `tracing` spans and events. Hosts that
//! do not run their own subscriber can call [`init_tracing`] to get a
//! filtered `fmt` subscriber writing to a size-rotated log file.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
