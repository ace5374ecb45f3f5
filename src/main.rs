use std::io::{self, stdin, Stdout, Write};
use std::time::Duration;

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use terminal_typer::{
    config::{ConfigStore, FileConfigStore},
    language::Language,
    logging,
    menu::{App, Menu},
    runtime::{CrosstermEventSource, FixedTicker},
};

const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// minimal terminal typing test with live wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init().context("failed to initialize logging")?;

    let config = FileConfigStore::new().load();
    // fatal before any UI is shown
    let words = Language::load(&config.language)
        .with_context(|| format!("failed to load word list '{}'", config.language))?;
    let menu = Menu::from_word_counts(&config.word_counts);

    install_panic_hook();
    let mut terminal = setup_terminal().context("failed to initialize terminal")?;

    let result = App::new(
        &mut terminal,
        CrosstermEventSource::new(),
        FixedTicker::new(COUNTDOWN_INTERVAL),
        &words,
        menu,
    )
    .run();

    restore_terminal(&mut terminal).context("failed to restore terminal")?;
    result?;

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    enter_alternate_screen().inspect_err(|_| {
        let _ = restore_screen(&mut io::stdout(), disable_raw_mode);
    })
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    restore_screen(terminal.backend_mut(), disable_raw_mode)
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Every step runs even when an earlier one fails; the first error is returned.
fn restore_screen<W: Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, crossterm::cursor::Show);

    raw.and(screen)
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_screen(&mut io::stdout(), disable_raw_mode);
        original_hook(panic_info);
    }));
}
