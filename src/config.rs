use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Word counts offered in the menu, in order. Zero entries are dropped.
    pub word_counts: Vec<usize>,
    /// Embedded word list to draw prompts from
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_counts: vec![10, 20, 50],
            language: "english".to_string(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "terminal-typer") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("terminal_typer_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    fn try_load(&self) -> Result<Config> {
        let bytes = fs::read(&self.path)?;
        serde_json::from_slice::<Config>(&bytes).map_err(|e| Error::Config {
            message: format!("{}: {e}", self.path.display()),
        })
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(cfg) => cfg,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                Config::default()
            }
        }
    }
}
