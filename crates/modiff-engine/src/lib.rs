//! modiff engine - the I/O around the pure diff core
//!
//! Loads configuration, parses chat commands, fetches both revisions from
//! the Nexus Mods API concurrently, and delivers the chunked changelog to a
//! reply channel in order.

pub mod commands;
pub mod config;
pub mod fetch;
pub mod frontend;
pub mod listener;
pub mod reply;

pub use commands::{
    respond, respond_to, run_diff, CommandContext, CommandOutcome, DiffCommand, DiffReport,
};
pub use config::AppConfig;
pub use fetch::{NexusClient, RevisionSource};
pub use listener::{listen, ListenSummary};
pub use reply::{deliver, ReplyChannel, SendError};
