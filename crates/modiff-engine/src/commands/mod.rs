//! Command layer.
//!
//! Parses chat commands and runs them: fetch both revisions, diff, render,
//! deliver.

pub mod diff;
pub mod parse;

pub use diff::{respond, respond_to, run_diff, CommandContext, CommandOutcome, DiffReport};
pub use parse::{DiffCommand, USAGE};
