//! Configuration and CLI argument handling

use crate::domain::Mode;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "focus-hub")]
#[command(about = "A calm, terminal-based focus timer with session tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Mode to start in (focus, short, long)
    #[arg(short, long, default_value = "focus", value_parser = parse_mode)]
    pub mode: Mode,

    /// Keep today's completed session count across restarts
    #[arg(long)]
    pub persist_sessions: bool,

    /// Do not ring the terminal bell when a countdown finishes
    #[arg(long)]
    pub no_sound: bool,

    /// Do not send desktop notifications when a countdown finishes
    #[arg(long)]
    pub no_desktop_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a local .focus-hub directory in the current directory
    Init,
    /// Show the stored completed focus sessions for a day
    Stats {
        /// Date to show (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },
}

impl Cli {
    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    Mode::from_key(value).ok_or_else(|| {
        format!("unknown mode '{}', expected one of: focus, short, long", value)
    })
}
