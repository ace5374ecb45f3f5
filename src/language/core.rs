use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use super::WordSource;
use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// An embedded word list, loaded once at startup and shared read-only
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Load the embedded `<name>.json` word list.
    pub fn load(name: &str) -> Result<Self> {
        let lang = read_language_from_file(&format!("{name}.json"))?;
        if lang.words.is_empty() {
            return Err(Error::EmptyWordSource { name: lang.name });
        }

        tracing::info!(language = %lang.name, words = lang.words.len(), "loaded word list");
        Ok(lang)
    }

    /// Build a word list from an in-memory set of words
    pub fn from_words<S: Into<String>>(name: &str, words: Vec<S>) -> Result<Self> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyWordSource { name: name.into() });
        }

        Ok(Self {
            name: name.into(),
            size: words.len() as u32,
            words,
        })
    }
}

impl WordSource for Language {
    fn next_words(&self, n: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();

        (0..n)
            .filter_map(|_| self.words.choose(&mut rng).cloned())
            .collect()
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| Error::LanguageNotFound {
            name: file_name.trim_end_matches(".json").into(),
        })?;

    let file_as_str = file.contents_utf8().ok_or_else(|| Error::LanguageNotFound {
        name: file_name.trim_end_matches(".json").into(),
    })?;

    Ok(from_str(file_as_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_load_english() {
        let lang = Language::load("english").unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_language_load_missing() {
        assert_matches!(
            Language::load("klingon"),
            Err(Error::LanguageNotFound { name }) if name == "klingon"
        );
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang: Language = from_str(json_data).expect("Failed to deserialize test language");

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert_eq!(lang.words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_from_words_rejects_empty() {
        assert_matches!(
            Language::from_words::<&str>("empty", vec![]),
            Err(Error::EmptyWordSource { .. })
        );
    }

    #[test]
    fn test_next_words_draws_with_replacement() {
        let lang = Language::from_words("single", vec!["cat"]).unwrap();

        let words = lang.next_words(4);
        assert_eq!(words, vec!["cat", "cat", "cat", "cat"]);
    }

    #[test]
    fn test_next_words_from_list() {
        let lang = Language::load("english").unwrap();

        let words = lang.next_words(25);
        assert_eq!(words.len(), 25);
        assert!(words.iter().all(|w| lang.words.contains(w)));
    }

    #[test]
    fn test_next_words_zero() {
        let lang = Language::from_words("pair", vec!["a", "b"]).unwrap();
        assert!(lang.next_words(0).is_empty());
    }
}
