pub mod core;

pub use self::core::Language;

/// Supplier of prompt words. Implementations must hold at least one word.
pub trait WordSource {
    /// Draw `n` words, repeats allowed.
    fn next_words(&self, n: usize) -> Vec<String>;
}

impl<W: WordSource + ?Sized> WordSource for &W {
    fn next_words(&self, n: usize) -> Vec<String> {
        (**self).next_words(n)
    }
}
