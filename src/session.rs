use std::time::Instant;

use crate::{
    error::Result,
    metrics::Metrics,
    runtime::{AppEvent, Clock, EventSource, KeyInput, SystemClock},
};

pub const INSTRUCTIONS: &str = "Tab to restart | Esc to exit";

/// Lifecycle of a single typing test
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SessionState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Cancelled)
    }
}

/// How a prompt character should be painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Untyped,
    Correct,
    Incorrect,
    /// Next character to type
    Cursor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptCell {
    pub ch: char,
    pub class: CharClass,
}

/// Final statistics of a completed test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionResult {
    pub wpm: f64,
    pub accuracy: f64,
    pub elapsed_secs: f64,
}

/// Everything needed to paint one frame of the typing screen
#[derive(Clone, Debug, PartialEq)]
pub struct SessionFrame {
    pub state: SessionState,
    pub metrics: Metrics,
    pub cells: Vec<PromptCell>,
    pub instructions: &'static str,
}

/// How the session loop ended
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionExit {
    /// `Some` when the prompt was completed, `None` when abandoned
    Finished(Option<SessionResult>),
    /// Ctrl+C: the whole application should stop
    Interrupted,
}

/// A typing test over one prompt.
///
/// The timer starts on the first accepted keystroke, not on construction.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    prompt: String,
    prompt_len: usize,
    typed: String,
    typed_len: usize,
    state: SessionState,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(prompt: String) -> Self {
        Self::with_clock(prompt, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(prompt: String, clock: C) -> Self {
        let prompt_len = prompt.chars().count();
        let state = if prompt_len == 0 {
            SessionState::Completed
        } else {
            SessionState::NotStarted
        };

        Self {
            prompt,
            prompt_len,
            typed: String::with_capacity(prompt_len),
            typed_len: 0,
            state,
            started_at: None,
            finished_at: None,
            clock,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn is_full(&self) -> bool {
        self.typed_len >= self.prompt_len
    }

    /// Seconds since the first keystroke, frozen once the test completes
    pub fn elapsed_secs(&self) -> Option<f64> {
        let start = self.started_at?;
        let end = self.finished_at.unwrap_or_else(|| self.clock.now());
        Some(end.saturating_duration_since(start).as_secs_f64())
    }

    /// Apply one logical key and return the resulting state
    pub fn handle(&mut self, key: KeyInput) -> SessionState {
        tracing::trace!(?key, state = %self.state, "session key");

        match key {
            KeyInput::Char(c) => {
                self.push(c);
            }
            KeyInput::Backspace => {
                self.pop();
            }
            KeyInput::Cancel => self.cancel(),
            _ => {}
        }

        self.state
    }

    /// Append one character. Rejected once the buffer is full or the test is over.
    pub fn push(&mut self, c: char) -> bool {
        if self.state.is_terminal() || self.is_full() {
            return false;
        }

        if self.state == SessionState::NotStarted {
            self.started_at = Some(self.clock.now());
            self.state = SessionState::Running;
            tracing::info!(chars = self.prompt_len, "typing test started");
        }

        self.typed.push(c);
        self.typed_len += 1;
        self.check_completed();
        true
    }

    /// Remove the last character, if any
    pub fn pop(&mut self) -> Option<char> {
        if self.state.is_terminal() {
            return None;
        }

        let removed = self.typed.pop();
        if removed.is_some() {
            self.typed_len -= 1;
            self.check_completed();
        }
        removed
    }

    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        self.state = SessionState::Cancelled;
        tracing::info!(typed = self.typed_len, "typing test cancelled");
    }

    fn check_completed(&mut self) {
        if self.typed == self.prompt {
            self.finished_at = Some(self.clock.now());
            self.state = SessionState::Completed;
            tracing::info!(
                elapsed_secs = self.elapsed_secs().unwrap_or_default(),
                "typing test completed"
            );
        }
    }

    /// Fresh statistics; wpm uses a one second floor on elapsed time
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(
            &self.prompt,
            &self.typed,
            self.elapsed_secs().map(|secs| secs.max(1.0)),
        )
    }

    pub fn result(&self) -> Option<SessionResult> {
        if self.state != SessionState::Completed {
            return None;
        }

        let metrics = self.metrics();
        Some(SessionResult {
            wpm: metrics.wpm,
            accuracy: metrics.accuracy,
            elapsed_secs: self.elapsed_secs().unwrap_or_default(),
        })
    }

    pub fn frame(&self) -> SessionFrame {
        render_frame(self)
    }
}

/// Classify every prompt character against the input typed so far
pub fn classify(prompt: &str, typed: &str) -> Vec<PromptCell> {
    let mut typed_chars = typed.chars();
    let mut cursor_placed = false;

    prompt
        .chars()
        .map(|expected| {
            let class = match typed_chars.next() {
                Some(actual) if actual == expected => CharClass::Correct,
                Some(_) => CharClass::Incorrect,
                None if !cursor_placed => {
                    cursor_placed = true;
                    CharClass::Cursor
                }
                None => CharClass::Untyped,
            };
            PromptCell { ch: expected, class }
        })
        .collect()
}

pub fn render_frame<C: Clock>(session: &Session<C>) -> SessionFrame {
    SessionFrame {
        state: session.state(),
        metrics: session.metrics(),
        cells: classify(session.prompt(), session.typed()),
        instructions: INSTRUCTIONS,
    }
}

/// Drive a session until it completes, is cancelled, or the user interrupts.
///
/// `render` is called with a fresh frame before every blocking read and once
/// more after completion.
pub fn run<C, E, F>(session: &mut Session<C>, events: &mut E, mut render: F) -> Result<SessionExit>
where
    C: Clock,
    E: EventSource + ?Sized,
    F: FnMut(&SessionFrame) -> Result<()>,
{
    loop {
        render(&session.frame())?;

        if session.state().is_terminal() {
            break;
        }

        match events.next_event()? {
            AppEvent::Resize => {}
            AppEvent::Key(KeyInput::Interrupt) => return Ok(SessionExit::Interrupted),
            AppEvent::Key(key) => {
                if session.handle(key) == SessionState::Cancelled {
                    break;
                }
            }
        }
    }

    Ok(SessionExit::Finished(session.result()))
}
