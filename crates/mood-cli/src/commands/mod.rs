//! CLI subcommand implementations.

pub mod heatmap;
pub mod log;
pub mod show;
pub mod status;
pub mod streak;
mod util;
