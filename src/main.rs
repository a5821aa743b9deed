mod app;
mod clipboard;
mod config;
mod domain;
mod i18n;
mod input;
mod logging;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clipboard::{ClipboardSink, SystemClipboard};
use config::{default_config_path, load_config, write_default_config, Config};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{IdeaComposer, Language};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ideagramer")]
#[command(about = "Type an idea, tag it, combine and copy", long_about = None)]
struct Cli {
    /// Startup language (en or es). Overrides the config file.
    #[arg(short, long, global = true, value_parser = parse_language)]
    lang: Option<Language>,

    /// Config file path. Defaults to <config dir>/ideagramer/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Combine an idea with tags and print the result
    Combine {
        /// The idea text
        #[arg(short, long)]
        idea: String,
        /// A tag; repeat for several. A leading '#' is added when missing.
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Also copy the combination to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: i18n::I18nError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            let path = write_default_config(&config_path)?;
            println!("Wrote default config: {}", path.display());
            Ok(())
        }
        Some(Commands::Combine { idea, tags, copy }) => {
            let config = load_config(&config_path)?;
            logging::init_stderr_logging(&config);
            run_combine(&config, cli.lang, idea, tags, copy)
        }
        None => {
            let config = load_config(&config_path)?;
            run_tui(&config, cli.lang)
        }
    }
}

/// Build the session from config, letting --lang win over the file
fn initial_composer(config: &Config, lang: Option<Language>) -> IdeaComposer {
    let session = &config.session;
    IdeaComposer::with_preferences(
        lang.unwrap_or(session.language),
        session.mode,
        session.size,
    )
}

fn run_combine(
    config: &Config,
    lang: Option<Language>,
    idea: String,
    tags: Vec<String>,
    copy: bool,
) -> Result<()> {
    let mut composer = initial_composer(config, lang);
    composer.set_idea_draft(idea);
    composer.set_tags_draft(tags.join("\n"));
    composer.combine();

    println!("{}", composer.combination_draft());

    if copy {
        let language = composer.language();
        match SystemClipboard.write_text(composer.combination_draft()) {
            Ok(()) => eprintln!("{}", i18n::translate(i18n::Label::Copied, language)),
            Err(e) => {
                error!("clipboard write failed: {:#}", e);
                eprintln!("{}: {:#}", i18n::translate(i18n::Label::CopyFailed, language), e);
            }
        }
    }
    Ok(())
}

fn run_tui(config: &Config, lang: Option<Language>) -> Result<()> {
    let _log_guard = logging::init_file_logging(config)?;
    info!("starting session");

    let mut app = AppState::new(initial_composer(config, lang), Box::new(SystemClipboard));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    info!(entries = app.composer.history().len(), "session ended");
    result.context("TUI session failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        // Expire status notices
        app.tick();
    }
}
