use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ImportTaxTracker";
const APP_NAME: &str = "ImportTaxTracker";

pub const DATA_DIR_ENV: &str = "IMPORT_TAX_DATA_DIR";
pub const LOG_ENV: &str = "IMPORT_TAX_LOG";
pub const DEFAULT_LOG_FILTER: &str = "import_tax_tracker=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no data directory available; set IMPORT_TAX_DATA_DIR")]
    NoDataDir,
}

/// Runtime settings taken from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| default_data_dir(&lookup));
        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            data_dir,
            log_filter,
        }
    }

    pub fn require_data_dir(&self) -> Result<&PathBuf, ConfigError> {
        self.data_dir.as_ref().ok_or(ConfigError::NoDataDir)
    }
}

fn default_data_dir(lookup: &dyn Fn(&str) -> Option<String>) -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| {
            if cfg!(any(target_os = "android", target_os = "ios")) {
                sandbox_data_dir(lookup)
            } else {
                None
            }
        })
}

/// App-private directory on mobile, where `ProjectDirs` has nothing to offer.
/// iOS points `HOME` at the app container; Android leaves `HOME` at `/` but
/// sets `TMPDIR` to `<app data>/cache`.
fn sandbox_data_dir(lookup: &dyn Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let usable = |name: &str| lookup(name).filter(|value| !value.trim().is_empty() && value != "/");

    if let Some(home) = usable("HOME") {
        return Some(PathBuf::from(home).join("Documents").join(APP_NAME));
    }
    usable("TMPDIR").and_then(|tmp| {
        PathBuf::from(tmp)
            .parent()
            .map(|app_dir| app_dir.join("files").join(APP_NAME))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = AppConfig::from_lookup(|name| match name {
            DATA_DIR_ENV => Some("/tmp/taxes".to_string()),
            _ => None,
        });
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/taxes")));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_filter_prefers_app_variable_over_rust_log() {
        let config = AppConfig::from_lookup(|name| match name {
            LOG_ENV => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "debug");

        let config = AppConfig::from_lookup(|name| match name {
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn sandbox_dir_uses_ios_home() {
        let dir = sandbox_data_dir(&|name| match name {
            "HOME" => Some("/var/mobile/Containers/Data/Application/ABC".to_string()),
            _ => None,
        });
        assert_eq!(
            dir,
            Some(PathBuf::from(
                "/var/mobile/Containers/Data/Application/ABC/Documents/ImportTaxTracker"
            ))
        );
    }

    #[test]
    fn sandbox_dir_derives_android_files_dir_from_tmpdir() {
        let dir = sandbox_data_dir(&|name| match name {
            "HOME" => Some("/".to_string()),
            "TMPDIR" => Some("/data/user/0/com.example.tax/cache".to_string()),
            _ => None,
        });
        assert_eq!(
            dir,
            Some(PathBuf::from("/data/user/0/com.example.tax/files/ImportTaxTracker"))
        );
    }

    #[test]
    fn sandbox_dir_is_none_without_hints() {
        assert_eq!(sandbox_data_dir(&|_| None), None);
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let config = AppConfig {
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        };
        assert!(matches!(
            config.require_data_dir(),
            Err(ConfigError::NoDataDir)
        ));
    }
}
