//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mood_core::Mood;

/// Daily mood log.
///
/// Records how you feel and why, and shows your current logging streak and a
/// calendar heatmap of activity.
#[derive(Debug, Parser)]
#[command(name = "mood", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log how you are feeling right now.
    Log {
        /// Happy, Angry, Sad, Anxious or Neutral.
        #[arg(short, long, default_value_t = Mood::Neutral)]
        mood: Mood,

        /// Why you feel like that.
        #[arg(required = true, num_args = 1..)]
        reason: Vec<String>,
    },

    /// Show the current consecutive-day logging streak.
    Streak,

    /// Show a calendar heatmap of logging activity.
    Heatmap {
        /// Output per-day counts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show every logged entry.
    Show,

    /// Show a summary of the mood log.
    Status,
}
