//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Writing streaks and mood analytics for your journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show current and longest writing streaks
    Streak {
        /// Day to measure against (today, yesterday, DD-MM-YYYY, YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show streaks plus mood, tag, word-count and activity statistics
    Stats {
        /// Day to measure streaks against
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,

        /// Only include entries on or after this date
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Only include entries on or before this date
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a month calendar with journaled days marked
    Calendar {
        /// Month to show (default: the month of --as-of)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        /// Day highlighted as today
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
