use crate::error::{ContactError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File name of the persisted address book, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            prompt: default_prompt(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        Ok(config)
    }

    /// Override the data file name. Blank names are ignored.
    pub fn with_data_file(mut self, file: Option<String>) -> Self {
        if let Some(file) = file.filter(|f| !f.trim().is_empty()) {
            self.data_file = file;
        }
        self
    }
}
