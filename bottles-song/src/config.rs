use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub const START_ENV: &str = "BOTTLES_START";
pub const END_ENV: &str = "BOTTLES_END";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{key} must be a bottle count, got '{value}'")]
    InvalidCount { key: &'static str, value: String },

    #[error("start ({start}) must not be below end ({end})")]
    InvalidRange { start: u32, end: u32 },
}

/// Which stretch of the countdown to sing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SongConfig {
    pub start: u32,
    pub end: u32,
}

impl Default for SongConfig {
    fn default() -> Self {
        Self { start: 99, end: 0 }
    }
}

impl SongConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded song config");
        Self::from_toml_str(&source)
    }

    /// Applies `BOTTLES_START` / `BOTTLES_END` style overrides from `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(start) = lookup(START_ENV) {
            self.start = parse_count(START_ENV, &start)?;
        }
        if let Some(end) = lookup(END_ENV) {
            self.end = parse_count(END_ENV, &end)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start < self.end {
            return Err(ConfigError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

fn parse_count(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidCount {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::{ConfigError, END_ENV, START_ENV, SongConfig};

    #[test]
    fn defaults_to_full_song() {
        assert_eq!(SongConfig::default(), SongConfig { start: 99, end: 0 });
    }

    #[test]
    fn parses_partial_toml() {
        let config = SongConfig::from_toml_str("start = 10\n").unwrap();
        assert_eq!(config, SongConfig { start: 10, end: 0 });
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            SongConfig::from_toml_str("start = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start = 5\nend = 3").unwrap();
        let config = SongConfig::load(file.path()).unwrap();
        assert_eq!(config, SongConfig { start: 5, end: 3 });
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SongConfig::load("/nonexistent/bottles.toml".as_ref()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bottles.toml"));
    }

    #[test]
    fn overrides_replace_values() {
        let vars = HashMap::from([(START_ENV, " 12 ".to_string()), (END_ENV, "4".to_string())]);
        let mut config = SongConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config, SongConfig { start: 12, end: 4 });
    }

    #[test]
    fn rejects_non_numeric_override() {
        let mut config = SongConfig::default();
        let result = config.apply_overrides(|key| (key == END_ENV).then(|| "-1".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCount { key: END_ENV, .. })
        ));
    }

    #[test]
    fn validate_rejects_ascending_range() {
        assert!(SongConfig { start: 1, end: 2 }.validate().is_err());
        assert!(SongConfig { start: 2, end: 2 }.validate().is_ok());
    }
}
