//! # Tipsplit - Terminal Bill Splitter
//!
//! Splits a bill (plus tip) between a number of people and remembers the
//! last bill between runs.
//!
//! ## Features
//! - Interactive TUI with keyboard navigation and quick-tip presets
//! - AUD, USD and PHP output with locale-aware digit grouping
//! - State saved after every edit and restored on the next launch
//!
//! ## Usage
//! ```bash
//! # Run the interactive TUI
//! tipsplit
//!
//! # Print the saved bill
//! tipsplit show --explain
//!
//! # Edit the saved bill without the TUI
//! tipsplit set --amount 120 --preset 15 --people 3 --currency USD
//!
//! # Start over
//! tipsplit reset
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, warn};

use tipsplit::prelude::*;

mod config_loader;
mod report;
mod tui;

use config_loader::CliConfig;
use tui::{App, handle_events, ui};

/// Interactive bill splitter
#[derive(Parser, Debug)]
#[command(name = "tipsplit")]
#[command(author = "tipsplit contributors")]
#[command(version)]
#[command(about = "Split a bill and tip between friends", long_about = None)]
struct Args {
    /// Enable file logging to the logs/ folder of the data directory
    #[arg(long, global = true, default_value = "false")]
    log: bool,

    /// Directory the bill is saved in (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Locale for number formatting, e.g. en-AU (overrides config)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the saved bill and its totals
    Show {
        /// Output as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Include the step-by-step breakdown
        #[arg(long, default_value = "false")]
        explain: bool,
    },
    /// Edit the saved bill
    Set(BillEdits),
    /// Forget the saved bill
    Reset,
}

/// Edits accepted by `tipsplit set`.
#[derive(clap::Args, Debug, Default)]
struct BillEdits {
    /// Bill amount before tip
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Tip percentage
    #[arg(long, allow_hyphen_values = true)]
    tip: Option<String>,

    /// Number of people sharing the bill
    #[arg(long, allow_hyphen_values = true)]
    people: Option<String>,

    /// Quick-tip preset (0, 5, 10 or 15)
    #[arg(long)]
    preset: Option<u32>,

    /// Currency code (AUD, USD or PHP)
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file_config = CliConfig::load();

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| file_config.resolved_data_dir());

    let mut split_config = file_config.split_config();
    if let Some(locale) = &args.locale {
        split_config = split_config.with_locale(locale.clone());
    }
    split_config.validate()?;

    // Initialize tracing with optional file logging
    // NOTE: In TUI mode, we only log to file (no console) to avoid corrupting the UI
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;
    let is_tui_mode = args.command.is_none();

    if args.log || file_config.logging_enabled() {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let log_dir = data_dir.join("logs");
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, "tipsplit.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter =
            tracing_subscriber::EnvFilter::from_default_env().add_directive("tipsplit=debug".parse()?);

        // Only add a console layer outside the TUI
        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }

        info!("--- Tipsplit Session Started [{}] ---", chrono::Utc::now());
    } else {
        _file_guard = None;
        // Without logging the TUI runs with no subscriber at all
        if !is_tui_mode {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive("tipsplit=warn".parse()?),
                )
                .init();
        }
    }

    let store = FileStore::new(&data_dir);
    let mut splitter = Splitter::open_with_key(store, split_config.storage_key.clone())?;
    let money = split_config.money_formatter()?;

    match args.command {
        Some(Commands::Show { json, explain }) => {
            if json {
                println!("{}", report::BillReport::new(splitter.state(), &money).to_json()?);
            } else {
                report::print_bill(splitter.state(), &money, explain);
            }
            Ok(())
        }
        Some(Commands::Set(edits)) => {
            apply_edits(&mut splitter, edits)?;
            report::print_bill(splitter.state(), &money, false);
            Ok(())
        }
        Some(Commands::Reset) => {
            splitter.reset()?;
            println!("Saved bill cleared.");
            Ok(())
        }
        None => run_tui(splitter, money),
    }
}

/// Applies `set` edits in order, each one saved.
///
/// The preset is checked before anything is written.
fn apply_edits<S: KeyValueStore>(
    splitter: &mut Splitter<S>,
    edits: BillEdits,
) -> Result<(), SplitError> {
    let preset = match edits.preset {
        Some(percent) => Some(TipPreset::from_percent(percent).ok_or_else(|| {
            SplitError::InvalidInput(format!(
                "Unknown tip preset {}% (expected 0, 5, 10 or 15)",
                percent
            ))
        })?),
        None => None,
    };

    if let Some(raw) = edits.amount {
        splitter.set_amount(&raw)?;
    }
    if let Some(preset) = preset {
        splitter.apply_preset(preset)?;
    }
    if let Some(raw) = edits.tip {
        if preset.is_some() {
            warn!("Both --tip and --preset given; --tip wins");
        }
        splitter.set_tip_percent(&raw)?;
    }
    if let Some(raw) = edits.people {
        splitter.set_people(&raw)?;
    }
    if let Some(code) = edits.currency
        && !splitter.select_currency_code(&code)?
    {
        eprintln!(
            "{} unknown currency '{}' (expected AUD, USD or PHP); keeping {}",
            "Warning:".yellow().bold(),
            code,
            splitter.state().currency
        );
    }
    Ok(())
}

/// Run the TUI application
fn run_tui(
    splitter: Splitter<FileStore>,
    money: MoneyFormatter,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(splitter, money);

    // Initialize terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<FileStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}
