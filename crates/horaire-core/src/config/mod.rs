use std::path::PathBuf;

use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_CALENDAR_NAME, DEFAULT_INPUT_PATH, DEFAULT_LOG_LEVEL, DEFAULT_PRODID,
    DEFAULT_TZID, ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};
use crate::types::DateRange;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub range: Option<DateRange>,
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub name: String,
    pub department: String,
    pub timezone: String,
    pub prodid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// ## Summary
    /// Returns the configured output path, or one derived from the department
    /// code and date range (e.g. `L_02-09-2025_to_24-12-2025.ics`).
    #[must_use]
    pub fn resolve(&self, department: &str, range: Option<&DateRange>) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }

        let stem = match (department.trim(), range) {
            ("", None) => "calendar".to_string(),
            ("", Some(range)) => range.to_string(),
            (department, None) => department.to_string(),
            (department, Some(range)) => format!("{department}_{range}"),
        };
        PathBuf::from(format!("{stem}.ics"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables (`HORAIRE_*`) and an optional
    /// `horaire.toml`, on top of built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating
    /// it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.name", DEFAULT_CALENDAR_NAME)?
            .set_default("calendar.department", "")?
            .set_default("calendar.timezone", DEFAULT_TZID)?
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("input.path", DEFAULT_INPUT_PATH)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Checks structural preconditions that must hold before any calendar is built.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`] for a blank timezone identifier and
    /// [`CoreError::ValidationError`] for an inverted date range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.calendar.timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "calendar.timezone must not be empty".to_string(),
            ));
        }

        if let Some(range) = &self.range {
            range
                .check()
                .map_err(|e| CoreError::ValidationError(format!("range: {e}")))?;
        }

        Ok(())
    }

    /// ## Summary
    /// Path of the `.ics` file to write.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .resolve(&self.calendar.department, self.range.as_ref())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(timezone = %settings.calendar.timezone, "Settings validated");
    Ok(settings)
}
