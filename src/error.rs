use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list not found: {name}")]
    LanguageNotFound { name: String },

    #[error("word list is empty: {name}")]
    EmptyWordSource { name: String },

    #[error("word count must be at least 1")]
    InvalidWordCount,

    #[error("input event source closed")]
    EventSourceClosed,

    #[error("configuration error: {message}")]
    Config { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_source_message() {
        let err = Error::EmptyWordSource {
            name: "english".into(),
        };
        assert_eq!(err.to_string(), "word list is empty: english");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
