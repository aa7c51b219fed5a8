//! usercards binary entry point.
//!
//! Parses the command line, sets up file logging and the async runtime,
//! puts the terminal in raw mode, runs the TUI event loop, and restores the
//! terminal state on exit.
//!
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use usercards::Result;
use usercards::api::{DEFAULT_ENDPOINT, Loader, UsersClient};
use usercards::app::{self, AppState, Theme, keymap::Keymap};
use usercards::error::Context;

#[derive(Parser, Debug)]
#[command(name = "usercards")]
#[command(version, about = "Browse and filter users fetched from a JSON API", long_about = None)]
struct Cli {
    /// Users collection endpoint (must return a JSON array)
    #[arg(long, env = "USERCARDS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Theme configuration file, created with defaults if missing
    #[arg(long, default_value = "theme.conf")]
    theme: String,

    /// Keybindings configuration file, created with defaults if missing
    #[arg(long, default_value = "keybinds.conf")]
    keybinds: String,

    /// Log file [default: usercards.log in the system temp dir]
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: PathBuf) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_ctx(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(
        cli.log_file
            .unwrap_or_else(|| std::env::temp_dir().join("usercards.log")),
    )?;

    let runtime = tokio::runtime::Runtime::new().with_ctx(|| "start async runtime".into())?;
    let client = UsersClient::new(cli.endpoint.clone()).with_ctx(|| "configure endpoint".into())?;
    let mut loader = Loader::new(client, runtime.handle().clone());

    let mut state = AppState::new(
        Theme::load_or_init(&cli.theme),
        Keymap::load_or_init(&cli.keybinds),
        cli.endpoint,
    );
    info!(endpoint = %state.endpoint, "starting usercards");

    let mut terminal = init_terminal().with_ctx(|| "init terminal".into())?;

    let res = app::run(&mut terminal, &mut state, &mut loader);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
