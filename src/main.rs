//! # Clear The Points
//!
//! Entry point of the `play` binary. Numbers from 1 to N are scattered over
//! the play area; click them in ascending order as fast as you can. One wrong
//! click ends the round.
//!
//! ## Usage
//! ```text
//! play                      # type the count on the first screen
//! play --count 25           # start a 25-point round right away
//! play --jitter --seed 7    # targets jump around on every frame
//! play --log-file play.log  # write diagnostics to a file
//! ```

use clap::Parser;
use colored::Colorize;
use points::app::{App, RoundSummary};
use points::config::GameConfig;
use points::game::Outcome;
use points::scatter::{LayoutMode, PlayArea};
use points::timer::format_seconds;
use points::{tui, AppError};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start right away with this many points (1-100)
    #[clap(short, long)]
    count: Option<String>,

    /// Stopwatch tick in milliseconds (1-1000)
    #[clap(long, default_value_t = 10)]
    tick_ms: u64,

    /// Play area width in terminal columns
    #[clap(long, default_value_t = 60)]
    width: u16,

    /// Play area height in terminal rows
    #[clap(long, default_value_t = 15)]
    height: u16,

    /// Seed for target placement
    #[clap(long)]
    seed: Option<u64>,

    /// Scatter the targets again on every frame
    #[clap(long, action = clap::ArgAction::SetTrue)]
    jitter: bool,

    /// Write diagnostics to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// Most verbose diagnostics level written to the log file
    #[clap(long, default_value = "info")]
    log_level: tracing::Level,
}

impl Args {
    fn to_config(&self) -> GameConfig {
        GameConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            play_area: PlayArea::new(self.width, self.height),
            layout_mode: if self.jitter {
                LayoutMode::Jitter
            } else {
                LayoutMode::Fixed
            },
            seed: self.seed,
            initial_count: self.count.clone(),
        }
    }
}

/// Sends tracing output to `path`; the terminal itself belongs to the UI
fn init_tracing(path: &Path, level: tracing::Level) -> Result<(), AppError> {
    let file = File::create(path)?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_summary(round: &RoundSummary) {
    let seconds = format_seconds(round.elapsed);
    match round.outcome {
        Outcome::Cleared => println!(
            "{} {} points in {} seconds",
            "Cleared".green().bold(),
            round.count,
            seconds
        ),
        Outcome::WrongNumber { expected, clicked } => println!(
            "{} clicked {} instead of {} after {} seconds",
            "Game over:".red().bold(),
            clicked,
            expected,
            seconds
        ),
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let config = args.to_config();
    config.validate()?;

    if let Some(path) = &args.log_file {
        init_tracing(path, args.log_level)?;
    }
    tracing::info!(?config, "starting");

    let mut app = App::new(&config);
    tui::run(&mut app)?;

    if let Some(round) = &app.last_round {
        print_summary(round);
    }
    Ok(())
}
