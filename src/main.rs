use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use reelfind::app::App;
use reelfind::config::{self, Config};

/// Interactive movie title search with live suggestions
#[derive(Debug, Parser)]
#[command(name = "reelfind", version, about)]
struct Cli {
    /// Search endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.search.endpoint = endpoint;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config)?;

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }

    Ok(())
}

/// Route debug-build logs to a file so they don't corrupt the TUI
#[cfg(debug_assertions)]
fn init_logging() {
    if let Ok(file) = std::fs::File::create("reelfind.log") {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
