/// Characters that make up one standardized "word", spaces included
pub const CHARS_PER_WORD: f64 = 5.0;

/// Words per minute from raw typed throughput.
///
/// Counts every typed character, correct or not. Accuracy is tracked
/// separately by [`accuracy`]. Returns `0.0` when no time has elapsed.
pub fn wpm(_prompt: &str, typed: &str, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }

    let typed_words = typed.chars().count() as f64 / CHARS_PER_WORD;
    let minutes = elapsed_secs / 60.0;

    typed_words / minutes
}

/// Percentage of typed characters matching the prompt at the same position.
///
/// An empty input is reported as fully accurate.
pub fn accuracy(prompt: &str, typed: &str) -> f64 {
    let typed_len = typed.chars().count();
    if typed_len == 0 {
        return 100.0;
    }

    let correct = prompt
        .chars()
        .zip(typed.chars())
        .filter(|(expected, actual)| expected == actual)
        .count();

    (correct as f64 / typed_len as f64) * 100.0
}

/// Live statistics derived from a prompt, the input so far and the timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub wpm: f64,
    pub accuracy: f64,
}

impl Metrics {
    /// `elapsed_secs` is `None` until the timer has started, in which case
    /// wpm stays at zero.
    pub fn compute(prompt: &str, typed: &str, elapsed_secs: Option<f64>) -> Self {
        Self {
            wpm: elapsed_secs.map_or(0.0, |secs| wpm(prompt, typed, secs)),
            accuracy: accuracy(prompt, typed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            wpm: 0.0,
            accuracy: 100.0,
        }
    }
}
