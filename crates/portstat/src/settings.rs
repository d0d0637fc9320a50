//! TOML settings for the `analyze` binary.

use std::{fs, path::Path};

use portstat_data::SourceConfig;
use portstat_model::AnalyzerConfig;
use portstat_primitives::EndBoundary;
use serde::{Deserialize, Serialize};

/// Errors loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The settings file is not valid.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Analyzer and price source settings. Missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Pipeline configuration.
    pub analyzer: AnalyzerConfig,
    /// Network source configuration.
    pub source: SourceConfig,
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// Returns `SettingsError::Parse` for invalid TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a settings file.
    ///
    /// # Errors
    /// Returns `SettingsError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| SettingsError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&text)
    }

    /// Apply command-line overrides. Flags only ever switch behavior on.
    #[must_use]
    pub fn with_overrides(
        mut self,
        inclusive_end: bool,
        refetch_aligned: bool,
        cache_ttl_secs: Option<u64>,
    ) -> Self {
        if inclusive_end {
            self.analyzer.end_boundary = EndBoundary::Inclusive;
        }
        if refetch_aligned {
            self.analyzer.refetch_aligned = true;
        }
        if cache_ttl_secs.is_some() {
            self.source.cache_ttl_secs = cache_ttl_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use portstat_data::Backoff;
    use portstat_primitives::Date;

    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn parses_full_settings() {
        let settings = Settings::from_toml_str(
            r#"
            [analyzer]
            history_start = "2000-01-03"
            end_boundary = "inclusive"
            refetch_aligned = true

            [source]
            timeout_ms = 5000
            cache_ttl_secs = 600

            [source.retry]
            max_retries = 1
            backoff = { kind = "fixed", delay_ms = 100 }
            "#,
        )
        .unwrap();

        assert_eq!(settings.analyzer.history_start, Date::from_ymd_opt(2000, 1, 3).unwrap());
        assert_eq!(settings.analyzer.end_boundary, EndBoundary::Inclusive);
        assert!(settings.analyzer.refetch_aligned);
        assert_eq!(settings.source.timeout(), Duration::from_secs(5));
        assert_eq!(settings.source.cache_ttl(), Some(Duration::from_secs(600)));
        assert_eq!(settings.source.retry.max_retries, 1);
        assert_eq!(settings.source.retry.backoff, Backoff::Fixed { delay_ms: 100 });
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let settings = Settings::from_toml_str("[source]\ntimeout_ms = 1000\n").unwrap();
        assert_eq!(settings.analyzer, AnalyzerConfig::default());
        assert_eq!(settings.source.retry.max_retries, 3);
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(matches!(
            Settings::from_toml_str("[plotting]\nwidth = 3\n"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/nonexistent/portstat.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/portstat.toml"));
    }

    #[test]
    fn overrides() {
        let settings = Settings::default().with_overrides(true, true, Some(60));
        assert_eq!(settings.analyzer.end_boundary, EndBoundary::Inclusive);
        assert!(settings.analyzer.refetch_aligned);
        assert_eq!(settings.source.cache_ttl_secs, Some(60));

        let untouched = Settings::default().with_overrides(false, false, None);
        assert_eq!(untouched, Settings::default());
    }
}
