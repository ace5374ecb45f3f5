use std::fmt;

use ratatui::{backend::Backend, Terminal};

use crate::{
    error::Result,
    language::WordSource,
    runtime::{AppEvent, EventSource, KeyInput, Ticker},
    session::{self, Session, SessionExit, SessionResult},
    ui::screen::Screen,
    word_generator,
};

/// Steps shown before a test starts, one per tick
pub const COUNTDOWN_STEPS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Words(usize),
    /// Leave the application; never spawns a session
    Exit,
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuOption::Words(count) => write!(f, "{count} Words"),
            MenuOption::Exit => write!(f, "Exit"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(usize),
    Exit,
}

/// Test-length picker. Selection is clamped at both ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    options: Vec<MenuOption>,
    selected: usize,
}

impl Menu {
    /// Build a menu offering `word_counts` followed by Exit. Zero counts are skipped.
    pub fn from_word_counts(word_counts: &[usize]) -> Self {
        let options = word_counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| MenuOption::Words(count))
            .chain(std::iter::once(MenuOption::Exit))
            .collect();

        Self {
            options,
            selected: 0,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> MenuOption {
        self.options[self.selected]
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn handle(&mut self, key: KeyInput) -> MenuAction {
        match key {
            KeyInput::Up => self.up(),
            KeyInput::Down => self.down(),
            KeyInput::Enter => {
                return match self.selected_option() {
                    MenuOption::Words(count) => MenuAction::Start(count),
                    MenuOption::Exit => MenuAction::Exit,
                }
            }
            KeyInput::Interrupt => return MenuAction::Exit,
            _ => {}
        }

        tracing::debug!(selected = self.selected, "menu selection");
        MenuAction::None
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::from_word_counts(&[10, 20, 50])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The outer application loop: menu → countdown → test → results
pub struct App<'a, B: Backend, E: EventSource, T: Ticker> {
    terminal: &'a mut Terminal<B>,
    events: E,
    ticker: T,
    words: &'a dyn WordSource,
    menu: Menu,
}

impl<'a, B: Backend, E: EventSource, T: Ticker> App<'a, B, E, T> {
    pub fn new(
        terminal: &'a mut Terminal<B>,
        events: E,
        ticker: T,
        words: &'a dyn WordSource,
        menu: Menu,
    ) -> Self {
        Self {
            terminal,
            events,
            ticker,
            words,
            menu,
        }
    }

    /// Run until the user picks Exit or presses Ctrl+C
    pub fn run(&mut self) -> Result<()> {
        loop {
            draw(self.terminal, Screen::Menu(&self.menu))?;

            let key = match self.events.next_event()? {
                AppEvent::Resize => continue,
                AppEvent::Key(key) => key,
            };

            match self.menu.handle(key) {
                MenuAction::None => {}
                MenuAction::Exit => break,
                MenuAction::Start(count) => {
                    if self.play(count)? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        tracing::info!("leaving menu loop");
        Ok(())
    }

    fn play(&mut self, word_count: usize) -> Result<Flow> {
        for remaining in (1..=COUNTDOWN_STEPS).rev() {
            draw(self.terminal, Screen::Countdown(remaining))?;
            self.ticker.wait();
        }

        let prompt = word_generator::generate(self.words, word_count)?;

        match self.run_session(prompt)? {
            SessionExit::Interrupted => Ok(Flow::Quit),
            SessionExit::Finished(None) => Ok(Flow::Continue),
            SessionExit::Finished(Some(result)) => self.show_results(&result),
        }
    }

    /// Run one typing test on `prompt`, drawing every frame
    pub fn run_session(&mut self, prompt: String) -> Result<SessionExit> {
        let mut session = Session::new(prompt);
        let terminal = &mut *self.terminal;

        session::run(&mut session, &mut self.events, |frame| {
            draw(terminal, Screen::Typing(frame))
        })
    }

    fn show_results(&mut self, result: &SessionResult) -> Result<Flow> {
        tracing::info!(
            wpm = result.wpm,
            accuracy = result.accuracy,
            elapsed_secs = result.elapsed_secs,
            "showing results"
        );

        loop {
            draw(self.terminal, Screen::Results(result))?;

            match self.events.next_event()? {
                AppEvent::Resize => {}
                AppEvent::Key(KeyInput::Interrupt) => return Ok(Flow::Quit),
                AppEvent::Key(_) => return Ok(Flow::Continue),
            }
        }
    }
}

/// Replace the whole visible frame with `screen`
fn draw<B: Backend>(terminal: &mut Terminal<B>, screen: Screen) -> Result<()> {
    terminal.draw(|f| f.render_widget(screen, f.area()))?;
    Ok(())
}
