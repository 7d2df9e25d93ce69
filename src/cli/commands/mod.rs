//! CLI subcommands

pub mod analyze;
pub mod export;
pub mod play;
