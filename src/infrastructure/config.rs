use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("invalid year range: first year {first} is after last year {last}")]
    InvalidYearRange { first: i32, last: i32 },
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub years: YearSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct YearSettings {
    pub first: i32,
    pub last: i32,
}

impl YearSettings {
    pub fn range(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        );
    build(builder)
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<AppConfig, ConfigError> {
    let settings = builder
        .set_default("server.bind", "0.0.0.0:8050")?
        .set_default("dataset.path", "automobile_sales.csv")?
        .set_default("years.first", 1980)?
        .set_default("years.last", 2023)?
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    if config.years.first > config.years.last {
        return Err(ConfigError::InvalidYearRange {
            first: config.years.first,
            last: config.years.last,
        });
    }
    Ok(config)
}
