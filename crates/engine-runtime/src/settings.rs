use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.datamirror.dev/v1";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;
pub const DEFAULT_JSON_PATH: &str = "data/records.json";
pub const DEFAULT_CSV_PATH: &str = "data/records.csv";
pub const DEFAULT_VERSION_PATH: &str = "version.json";

pub const API_URL_VAR: &str = "DATAMIRROR_API_URL";
pub const API_TOKEN_VAR: &str = "DATAMIRROR_API_TOKEN";

/// Errors raised while assembling or validating run settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The credential is mandatory; there is no anonymous access. Checked
    /// before any network activity.
    #[error("Missing API token: set DATAMIRROR_API_TOKEN")]
    MissingToken,

    #[error("Invalid setting '{name}': {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}

/// Static configuration for one mirror run.
#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub api_url: String,
    pub api_token: String,
    pub page_size: usize,
    pub max_concurrency: usize,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub version_path: PathBuf,
}

impl SyncSettings {
    /// Builds settings from the environment: `DATAMIRROR_API_TOKEN`
    /// (required) and `DATAMIRROR_API_URL` (optional), everything else at
    /// its default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_token = std::env::var(API_TOKEN_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(SettingsError::MissingToken)?;

        let api_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(SyncSettings {
            api_url,
            api_token,
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            version_path: PathBuf::from(DEFAULT_VERSION_PATH),
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_token.is_empty() {
            return Err(SettingsError::MissingToken);
        }
        if self.page_size == 0 {
            return Err(SettingsError::Invalid {
                name: "page_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_concurrency == 0 {
            return Err(SettingsError::Invalid {
                name: "max_concurrency",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SyncSettings {
        SyncSettings {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: "secret".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            version_path: PathBuf::from(DEFAULT_VERSION_PATH),
        }
    }

    #[test]
    fn valid_settings_pass() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn empty_token_is_fatal() {
        let mut s = settings();
        s.api_token.clear();
        assert!(matches!(s.validate(), Err(SettingsError::MissingToken)));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut s = settings();
        s.page_size = 0;
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { name: "page_size", .. })
        ));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let mut s = settings();
        s.max_concurrency = 0;
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { name: "max_concurrency", .. })
        ));
    }
}
