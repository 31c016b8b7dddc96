use crate::display::DisplayConfig;
use crate::errors::ConfigError;
use chrono::{FixedOffset, Locale};
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub activity_path: PathBuf,
    pub shows_path: PathBuf,
    pub shows_upstream: Option<String>,
    pub display: DisplayConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let activity_path = lookup("ACTIVITY_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/activities.json"));
        let shows_path = lookup("SHOWS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/shows.json"));
        let shows_upstream = lookup("SHOWS_UPSTREAM_URL").filter(|url| !url.trim().is_empty());

        let mut display = DisplayConfig::default();
        if let Some(value) = lookup("DISPLAY_LOCALE") {
            display.locale = parse_locale(&value)?;
        }
        if let Some(value) = lookup("DISPLAY_UTC_OFFSET_MINUTES") {
            display.offset = parse_offset(&value)?;
        }

        Ok(Self {
            port,
            activity_path,
            shows_path,
            shows_upstream,
            display,
        })
    }
}

fn parse_locale(value: &str) -> Result<Locale, ConfigError> {
    Locale::try_from(value.trim()).map_err(|_| ConfigError::Invalid {
        name: "DISPLAY_LOCALE",
        value: value.to_string(),
    })
}

fn parse_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(|minutes| minutes.checked_mul(60))
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| ConfigError::Invalid {
            name: "DISPLAY_UTC_OFFSET_MINUTES",
            value: value.to_string(),
        })
}
