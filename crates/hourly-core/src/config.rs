use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::util::slug::generate_slug;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    pub outbox: OutboxConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA zone attached to both event timestamps when the form does not name one.
    pub time_zone: String,
    pub calendar_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutboxConfig {
    pub directory: String,
}

impl OutboxConfig {
    #[must_use]
    pub fn root(&self) -> &Path {
        Path::new(&self.directory)
    }

    /// ## Summary
    /// Returns the directory events for `calendar_id` are written to.
    ///
    /// The calendar id is slugged, so any id maps to a single path component.
    #[must_use]
    pub fn calendar_dir(&self, calendar_id: &str) -> PathBuf {
        self.root().join(generate_slug(calendar_id))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `config.toml` and environment variables into a `Settings`.
    /// Environment variables (prefix `HOURLY`, `__` separated) take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("schedule.time_zone", "UTC")?
            .set_default("schedule.calendar_id", "primary")?
            .set_default("outbox.directory", "outbox")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("HOURLY")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the values `config` cannot check on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the first empty required value.
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("schedule.time_zone", &self.schedule.time_zone),
            ("schedule.calendar_id", &self.schedule.calendar_id),
            ("outbox.directory", &self.outbox.directory),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            tracing::warn!(key, "Required configuration value is empty");
            return Err(CoreError::ConfigError(format!("{key} must not be empty")));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
