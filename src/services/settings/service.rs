use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::WidgetSettings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Loads and saves [`WidgetSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the current
    /// directory when none can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "HolidayCountdown", "HolidayCountdown") {
            dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults; fields absent
    /// from the file keep their default values.
    pub fn load(&self) -> Result<WidgetSettings, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(WidgetSettings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings = Self::parse(&data).map_err(|err| match err {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: self.path.clone(),
                source,
            },
            other => other,
        })?;

        log::info!(
            "Loaded settings from {} ({} holidays)",
            self.path.display(),
            settings.holidays.len()
        );
        Ok(settings)
    }

    pub fn save(&self, settings: &WidgetSettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Parse and validate settings from TOML text.
    pub fn parse(data: &str) -> Result<WidgetSettings, SettingsError> {
        let settings: WidgetSettings =
            toml::from_str(data).map_err(|source| SettingsError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }
}
