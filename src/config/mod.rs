//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration:
//! where the eligibility service lives, how requests are paced, and which
//! listing filters apply at startup.

mod error;

pub use error::ConfigError;

use crate::eligibility::ApplicationFilters;
use crate::error::AppResult;
use crate::state::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/preq-tui";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub filters: ApplicationFilters,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub filters: ApplicationFilters,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default settings.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            filters: ApplicationFilters::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the disk using the custom directory if
    /// provided. A missing file is created with the current settings.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
            self.page_size = data.page_size;
            self.request_timeout_secs = data.request_timeout_secs;
            self.filters = data.filters;
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Replace settings with any values given on the command line.
    ///
    pub fn apply_overrides(
        &mut self,
        base_url: Option<&str>,
        page_size: Option<&str>,
    ) -> AppResult<()> {
        if let Some(base_url) = base_url {
            self.base_url = base_url.to_string();
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size.parse().map_err(|_| ConfigError::InvalidValue {
                field: "page_size",
                message: format!("'{}' is not a whole number", page_size),
            })?;
        }
        self.validate()?;
        Ok(())
    }

    /// Returns the timeout applied to each service request.
    ///
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                message: "must not be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                message: "must be at least 1".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            request_timeout_secs: self.request_timeout_secs,
            filters: self.filters.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::LoanPurpose;
    use crate::error::AppError;

    fn dir_arg(dir: &tempfile::TempDir) -> String {
        dir.path().to_string_lossy().to_string()
    }

    #[test]
    fn load_creates_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(Some(&dir_arg(&dir))).unwrap();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.filters, ApplicationFilters::default());
        assert!(dir.path().join(FILE_NAME).exists());
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "base_url: https://loans.example.com\npage_size: 5\nfilters:\n  eligible: true\n  purpose: education\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(Some(&dir_arg(&dir))).unwrap();

        assert_eq!(config.base_url, "https://loans.example.com");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.filters.eligible, Some(true));
        assert_eq!(config.filters.purpose, Some(LoanPurpose::Education));
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "page_size: [not, a, number]\n").unwrap();

        let mut config = Config::new();
        let result = config.load(Some(&dir_arg(&dir)));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn load_rejects_zero_page_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "page_size: 0\n").unwrap();

        let mut config = Config::new();
        let result = config.load(Some(&dir_arg(&dir)));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { field: "page_size", .. }))
        ));
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(Some(&dir_arg(&dir))).unwrap();
        config.page_size = 20;
        config.filters.purpose = Some(LoanPurpose::Medical);
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(&dir_arg(&dir))).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn apply_overrides() {
        let mut config = Config::new();
        config
            .apply_overrides(Some("http://127.0.0.1:8080"), Some("25"))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.page_size, 25);

        assert!(config.apply_overrides(None, Some("lots")).is_err());
        assert!(config.apply_overrides(None, Some("0")).is_err());
    }
}
