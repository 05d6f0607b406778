//! Training configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use symbpe_core::{BpeError, ProtectedTokens, Result};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// String placed between the two halves of a merged token
    pub separator: String,
    /// Minimum frequency for a pair to be merged
    pub min_occ: u64,
    /// Maximum number of atomic sub-tokens in a merged token
    pub max_tknlen: usize,
    /// Tokens that never take part in a merge; `None` when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_tokens: Option<Vec<String>>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            separator: "&".to_string(),
            min_occ: 2,
            max_tknlen: 5,
            protected_tokens: None,
        }
    }
}

impl TrainingConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| BpeError::io(path, e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the trainer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(BpeError::InvalidConfig(
                "separator must not be empty".to_string(),
            ));
        }
        if self.min_occ == 0 {
            return Err(BpeError::InvalidConfig(
                "min_occ must be at least 1".to_string(),
            ));
        }
        if self.max_tknlen == 0 {
            return Err(BpeError::InvalidConfig(
                "max_tknlen must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The protected tokens as a lookup set (empty when not configured).
    pub fn protected(&self) -> ProtectedTokens {
        self.protected_tokens.iter().flatten().collect()
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Set the merge separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Set the minimum number of occurrences for a merge.
    pub fn min_occ(mut self, min_occ: u64) -> Self {
        self.config.min_occ = min_occ;
        self
    }

    /// Set the maximum merged token length, in sub-tokens.
    pub fn max_tknlen(mut self, max_tknlen: usize) -> Self {
        self.config.max_tknlen = max_tknlen;
        self
    }

    /// Set the protected tokens.
    pub fn protected_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.protected_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TrainingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
