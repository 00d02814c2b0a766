//! Command Line Interface (CLI) layer for webpify.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, merging config
//! file and flags into `ConversionParams`, running the batch and mapping
//! the outcome to an exit code.
//!
//! If you are embedding webpify into another application, prefer the
//! library API (`webpify::convert_all`) over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
