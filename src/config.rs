//! Lexicon loading configuration.
//!
//! ```json
//! {
//!   "synsets": "data/synsets.txt",
//!   "hypernyms": "data/hypernyms.txt",
//!   "require_rooted": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where to find a lexicon and which shape guarantees to enforce on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordNetConfig {
    /// Path of the synset source.
    #[serde(default)]
    pub synsets: Option<PathBuf>,
    /// Path of the hypernym source.
    #[serde(default)]
    pub hypernyms: Option<PathBuf>,
    /// Reject hypernym graphs that are not rooted DAGs.
    #[serde(default)]
    pub require_rooted: bool,
}

impl WordNetConfig {
    /// Creates a configuration for the given sources with no shape check.
    pub fn new(synsets: impl Into<PathBuf>, hypernyms: impl Into<PathBuf>) -> Self {
        Self {
            synsets: Some(synsets.into()),
            hypernyms: Some(hypernyms.into()),
            require_rooted: false,
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// [`Error::Config`] for malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    ///
    /// Relative source paths are resolved against the file's directory.
    ///
    /// # Errors
    /// [`Error::Io`] if the file cannot be read, [`Error::Config`] if it is
    /// not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_json_str(&fs::read_to_string(path)?)?;
        if let Some(dir) = path.parent() {
            for source in [&mut config.synsets, &mut config.hypernyms].into_iter().flatten() {
                if source.is_relative() {
                    *source = dir.join(&*source);
                }
            }
        }
        Ok(config)
    }

    /// Returns both source paths.
    ///
    /// # Errors
    /// [`Error::NullInput`] naming the first missing source.
    pub fn sources(&self) -> Result<(&Path, &Path)> {
        let synsets = self
            .synsets
            .as_deref()
            .ok_or(Error::NullInput("synsets path"))?;
        let hypernyms = self
            .hypernyms
            .as_deref()
            .ok_or(Error::NullInput("hypernyms path"))?;
        Ok((synsets, hypernyms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let config = WordNetConfig::from_json_str(
            r#"{"synsets": "s.txt", "hypernyms": "h.txt", "require_rooted": true}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            WordNetConfig {
                require_rooted: true,
                ..WordNetConfig::new("s.txt", "h.txt")
            }
        );
        let (s, h) = config.sources().unwrap();
        assert_eq!(s, Path::new("s.txt"));
        assert_eq!(h, Path::new("h.txt"));
    }

    #[test]
    fn missing_source_is_null_input() {
        let config = WordNetConfig::from_json_str(r#"{"synsets": "s.txt"}"#).unwrap();
        assert!(!config.require_rooted);
        assert!(matches!(
            config.sources(),
            Err(Error::NullInput("hypernyms path"))
        ));
        assert!(matches!(
            WordNetConfig::default().sources(),
            Err(Error::NullInput("synsets path"))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            WordNetConfig::from_json_str(r#"{"synset": "s.txt"}"#),
            Err(Error::Config(_))
        ));
    }
}
