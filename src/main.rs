// Settings Tabs
// Animated tabbed settings panel for the terminal

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings_tabs::config_validation::load_and_validate_config;
use settings_tabs::core::{App, AppConfig};
use settings_tabs::ui::run_app;

//--------------------------------------------------------<<

#[derive(Parser, Debug)]
#[command(name = "settings-tabs", version, about = "Animated tabbed settings panel")]
struct Args {
    /// Config file (defaults to the bundled config.yaml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log file (default: settings-tabs.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    log_level: String,

    /// Apply every change instantly
    #[arg(long)]
    no_animation: bool,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    info!("Starting settings-tabs v{}", env!("CARGO_PKG_VERSION"));

    let application = load_and_validate_config(args.config.as_deref());
    let mut config = AppConfig::default();
    if args.no_animation {
        config = config.without_animations();
    }
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &application);

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    info!(tab = %app.panel.selected(), "exiting");
    result
}

/// Route tracing output to a log file
fn init_logging(args: &Args) -> Result<()> {
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("settings-tabs.log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)
            .with_context(|| format!("invalid log filter '{}'", args.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

/// Reject `--log-level` values that are not valid filter directives
fn parse_log_level(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}
