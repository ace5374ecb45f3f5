use itertools::Itertools;

use crate::{
    error::{Error, Result},
    language::WordSource,
};

/// Builds typing prompts from a word source
pub struct PromptGenerator<W: WordSource> {
    source: W,
}

impl<W: WordSource> PromptGenerator<W> {
    pub fn new(source: W) -> Self {
        Self { source }
    }

    /// Draw `count` words (with replacement) and join them with single spaces
    pub fn generate(&self, count: usize) -> Result<String> {
        generate(&self.source, count)
    }
}

pub fn generate<W: WordSource + ?Sized>(source: &W, count: usize) -> Result<String> {
    if count == 0 {
        return Err(Error::InvalidWordCount);
    }

    let words = source.next_words(count);
    if words.is_empty() {
        return Err(Error::EmptyWordSource {
            name: "prompt source".into(),
        });
    }

    let prompt = words.iter().join(" ");
    tracing::debug!(words = count, chars = prompt.chars().count(), "generated prompt");

    Ok(prompt)
}
