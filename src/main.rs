mod commands;
mod events;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::show::{PanelArg, ShowArgs};

#[derive(Parser)]
#[command(name = "revocal")]
#[command(about = "Render the revocal calendar widget in the terminal")]
struct Cli {
    /// Config file (defaults to ~/.config/revocal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar for a date, optionally after replaying user actions
    Show {
        /// JSON file with events (overrides `events_file` from config)
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// Initial date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Language code for labels
        #[arg(long)]
        lang: Option<String>,

        /// Container width in pixels
        #[arg(short, long, default_value_t = 900)]
        width: u32,

        /// Move the selection by this many years
        #[arg(long, allow_hyphen_values = true)]
        year_delta: Option<i32>,

        /// Select a month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        select_month: Option<u32>,

        /// Select a day of the month
        #[arg(long)]
        select_day: Option<u32>,

        /// Toggle a panel; may be repeated
        #[arg(long, value_enum)]
        toggle: Vec<PanelArg>,

        /// Select an event on the selected day (0-based)
        #[arg(long)]
        select_event: Option<usize>,

        /// Print the widget snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show config paths, creating the default config if missing
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            events,
            date,
            lang,
            width,
            year_delta,
            select_month,
            select_day,
            toggle,
            select_event,
            json,
        } => commands::show::run(ShowArgs {
            config: cli.config,
            events,
            date,
            lang,
            width,
            year_delta,
            select_month,
            select_day,
            toggle,
            select_event,
            json,
        }),
        Commands::Config => commands::config::run(cli.config),
    }
}
