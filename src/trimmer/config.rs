use crate::error::{Result, TrimmerError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NEWLINE_KEY: char = 'j';

/// Ctrl+<key> combinations the terminal or line editor already owns:
/// Ctrl+C/Ctrl+D end the session, Ctrl+I is Tab and Ctrl+M is Enter.
const RESERVED_KEYS: &[char] = &['c', 'd', 'i', 'm'];

/// Configuration for claude-trimmer, stored as config.json in the user config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrimmerConfig {
    /// Copy every cleaned result to the system clipboard
    #[serde(default = "default_copy")]
    pub copy_to_clipboard: bool,

    /// Key that, held with Ctrl, inserts a literal newline in interactive mode
    #[serde(default = "default_newline_key")]
    pub newline_key: char,
}

fn default_copy() -> bool {
    true
}

fn default_newline_key() -> char {
    DEFAULT_NEWLINE_KEY
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self {
            copy_to_clipboard: default_copy(),
            newline_key: DEFAULT_NEWLINE_KEY,
        }
    }
}

impl TrimmerConfig {
    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "claude-trimmer", "claude-trimmer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: TrimmerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects newline keys that cannot be bound as Ctrl+<letter>
    pub fn validate(&self) -> Result<()> {
        let key = self.newline_key.to_ascii_lowercase();
        if !key.is_ascii_lowercase() {
            return Err(TrimmerError::Config(format!(
                "newline_key must be an ASCII letter, got {:?}",
                self.newline_key
            )));
        }
        if RESERVED_KEYS.contains(&key) {
            return Err(TrimmerError::Config(format!(
                "newline_key Ctrl+{} is reserved",
                key.to_ascii_uppercase()
            )));
        }
        Ok(())
    }

    /// The newline key as the lowercase letter a terminal reports with Ctrl
    pub fn newline_key(&self) -> char {
        self.newline_key.to_ascii_lowercase()
    }
}
