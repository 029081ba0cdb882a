//! Storage configuration, loadable from JSON.

use crate::error::CodecError;
use crate::framing::DEFAULT_COPIES;
use crate::CodecStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by every encode/decode call of a [`crate::DnaStorage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// How payloads are packaged for transmission.
    pub strategy: CodecStrategy,
    /// Number of framed copies (redundant strategy only).
    pub copies: usize,
}

impl StorageConfig {
    pub fn new(strategy: CodecStrategy, copies: usize) -> Result<Self, CodecError> {
        let config = Self { strategy, copies };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no codec can honor.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.copies == 0 {
            return Err(CodecError::InvalidConfig(
                "copies must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file. Missing fields take
    /// their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CodecError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            strategy: CodecStrategy::default(),
            copies: DEFAULT_COPIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert_eq!(config.strategy, CodecStrategy::Redundant);
        assert_eq!(config.copies, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StorageConfig::from_json_str(r#"{ "copies": 7 }"#).unwrap();
        assert_eq!(config.copies, 7);
        assert_eq!(config.strategy, CodecStrategy::Redundant);

        let config = StorageConfig::from_json_str(r#"{ "strategy": "plain" }"#).unwrap();
        assert_eq!(config.strategy, CodecStrategy::Plain);
        assert_eq!(config.copies, 4);
    }

    #[test]
    fn test_zero_copies_invalid() {
        assert!(matches!(
            StorageConfig::from_json_str(r#"{ "copies": 0 }"#),
            Err(CodecError::InvalidConfig(_))
        ));
        assert!(StorageConfig::new(CodecStrategy::Plain, 0).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            StorageConfig::from_json_str(r#"{ "copy": 3 }"#),
            Err(CodecError::Json(_))
        ));
    }

    #[test]
    fn test_json_file_round_trip() {
        let config = StorageConfig::new(CodecStrategy::Plain, 2).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = StorageConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            StorageConfig::from_json_file("/nonexistent/dnastore.json"),
            Err(CodecError::Io(_))
        ));
    }
}
