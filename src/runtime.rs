use std::cell::Cell;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{Error, Result};

/// Logical key categories the menu and the typing session act on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable ASCII character
    Char(char),
    Backspace,
    /// Esc or Tab: abandon the current test
    Cancel,
    Up,
    Down,
    Enter,
    /// Ctrl+C: leave the application
    Interrupt,
    Other,
}

impl KeyInput {
    pub fn is_printable(c: char) -> bool {
        (' '..='~').contains(&c)
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return KeyInput::Other;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyInput::Interrupt
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                KeyInput::Other
            }
            KeyCode::Char(c) if KeyInput::is_printable(c) => KeyInput::Char(c),
            KeyCode::Backspace | KeyCode::Delete => KeyInput::Backspace,
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => KeyInput::Cancel,
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            KeyCode::Enter => KeyInput::Enter,
            _ => KeyInput::Other,
        }
    }
}

/// Unified event type consumed by the app loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppEvent {
    Key(KeyInput),
    Resize,
}

/// Source of terminal events (keyboard, resize)
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> Result<AppEvent>;
}

/// Production event source: reads crossterm events on the calling thread
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<AppEvent> {
        loop {
            match event::read()? {
                CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key.into()))
                }
                CtEvent::Resize(_, _) => return Ok(AppEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Event source backed by a channel, for headless runs and tests
pub struct ChannelEventSource {
    rx: Receiver<AppEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for ChannelEventSource {
    fn next_event(&mut self) -> Result<AppEvent> {
        self.rx.recv().map_err(|_| Error::EventSourceClosed)
    }
}

/// Paces the countdown between frames
pub trait Ticker {
    fn wait(&self);
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn wait(&self) {
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }
}

/// Monotonic time source for the session timer
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn classifies_printable_chars() {
        assert_eq!(KeyInput::from(press(KeyCode::Char('a'))), KeyInput::Char('a'));
        assert_eq!(KeyInput::from(press(KeyCode::Char(' '))), KeyInput::Char(' '));
        assert_eq!(KeyInput::from(press(KeyCode::Char('~'))), KeyInput::Char('~'));
        assert_eq!(
            KeyInput::from(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyInput::Char('A')
        );
    }

    #[test]
    fn non_ascii_chars_are_other() {
        assert_eq!(KeyInput::from(press(KeyCode::Char('é'))), KeyInput::Other);
    }

    #[test]
    fn classifies_cancel_and_backspace() {
        assert_eq!(KeyInput::from(press(KeyCode::Esc)), KeyInput::Cancel);
        assert_eq!(KeyInput::from(press(KeyCode::Tab)), KeyInput::Cancel);
        assert_eq!(KeyInput::from(press(KeyCode::Backspace)), KeyInput::Backspace);
        assert_eq!(KeyInput::from(press(KeyCode::Delete)), KeyInput::Backspace);
    }

    #[test]
    fn classifies_navigation() {
        assert_eq!(KeyInput::from(press(KeyCode::Up)), KeyInput::Up);
        assert_eq!(KeyInput::from(press(KeyCode::Down)), KeyInput::Down);
        assert_eq!(KeyInput::from(press(KeyCode::Enter)), KeyInput::Enter);
        assert_eq!(KeyInput::from(press(KeyCode::Left)), KeyInput::Other);
        assert_eq!(KeyInput::from(press(KeyCode::F(5))), KeyInput::Other);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyInput::from(key), KeyInput::Interrupt);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(KeyInput::from(key), KeyInput::Other);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyInput::from(key), KeyInput::Other);
    }

    #[test]
    fn channel_source_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Resize).unwrap();
        tx.send(AppEvent::Key(KeyInput::Enter)).unwrap();
        let mut source = ChannelEventSource::new(rx);

        assert_eq!(source.next_event().unwrap(), AppEvent::Resize);
        assert_eq!(source.next_event().unwrap(), AppEvent::Key(KeyInput::Enter));
    }

    #[test]
    fn channel_source_reports_closed() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);
        let mut source = ChannelEventSource::new(rx);

        assert!(matches!(source.next_event(), Err(Error::EventSourceClosed)));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.advance(Duration::from_secs(6));

        assert_eq!(clock.now().duration_since(start), Duration::from_secs(6));
    }

    #[test]
    fn zero_ticker_returns_immediately() {
        let ticker = FixedTicker::new(Duration::ZERO);
        let before = Instant::now();
        ticker.wait();
        assert!(before.elapsed() < Duration::from_millis(500));
    }
}
