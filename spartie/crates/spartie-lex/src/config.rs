//! Scanner configuration.
//!
//! The only knob is how lines are counted. Configuration can be built in
//! code or read from a TOML file:
//!
//! ```toml
//! line_counting = "legacy"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Which characters advance the line counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCounting {
    /// Only `\n` ends a line, so `\r\n` counts once.
    #[default]
    Newline,
    /// A `\n`, `\r` or `\t` between tokens each end a line. Inside string
    /// literals and comments only `\n` does.
    Legacy,
}

impl LineCounting {
    /// Returns true if consuming `c` as a token separator starts a new line.
    #[inline]
    pub fn is_terminator(self, c: char) -> bool {
        match self {
            LineCounting::Newline => c == '\n',
            LineCounting::Legacy => matches!(c, '\n' | '\r' | '\t'),
        }
    }
}

/// Scanner configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Line terminator policy.
    #[serde(default)]
    pub line_counting: LineCounting,
}

impl ScannerConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    ///
    /// ```
    /// use spartie_lex::config::{LineCounting, ScannerConfig};
    ///
    /// let config = ScannerConfig::from_toml_str("line_counting = \"legacy\"").unwrap();
    /// assert_eq!(config.line_counting, LineCounting::Legacy);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded scanner config");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}
