//! Lexer configuration.
//!
//! Settings are read from TOML. Every field is optional; a missing field
//! keeps its default.
//!
//! ```toml
//! end_of_program = true
//! unicode_escapes = "code-point"
//! max_diagnostics = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "micac-lex.toml";

/// How `\u` escapes are decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnicodeEscapes {
    /// Keep only the low byte of the code point, so every escape decodes to
    /// exactly one byte.
    #[default]
    Truncate,
    /// Keep the whole code point. Surrogates are rejected.
    CodePoint,
}

/// Lexer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// Append a `Separator::EndOfProgram` token after the last real token.
    pub end_of_program: bool,

    /// Decoding of `\u` escapes.
    pub unicode_escapes: UnicodeEscapes,

    /// Keep at most this many diagnostics; `None` keeps all of them.
    pub max_diagnostics: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            end_of_program: false,
            unicode_escapes: UnicodeEscapes::Truncate,
            max_diagnostics: None,
        }
    }
}

impl LexerConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::{LexerConfig, UnicodeEscapes};
    ///
    /// let config = LexerConfig::from_toml_str("unicode_escapes = \"code-point\"").unwrap();
    /// assert_eq!(config.unicode_escapes, UnicodeEscapes::CodePoint);
    /// assert!(!config.end_of_program);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
