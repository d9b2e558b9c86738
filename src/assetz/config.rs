use crate::error::Result;
use crate::store::fs::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "baht";

/// Configuration for assetz, stored as `config.json` in the user config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetzConfig {
    /// Data file used when none is given on the command line. Relative paths
    /// resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Label printed after prices in the category listing
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILENAME)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for AssetzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: default_currency(),
        }
    }
}

impl AssetzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AssetzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The command-line path wins over the configured one.
    pub fn resolve_data_file(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path.unwrap_or_else(|| self.data_file.clone())
    }
}
