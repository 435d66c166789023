// Process configuration read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub frontend_url: String,
    pub default_employee_id: String,
    pub catalog_seed_path: Option<PathBuf>,
    pub google_calendar_token: Option<String>,
    pub google_calendar_id: String,
    pub time_entries_topic: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host_raw = var("HOST", "0.0.0.0");
        let host = host_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            value: host_raw.clone(),
        })?;
        let port_raw = var("PORT", "3000");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            host,
            port,
            frontend_url: var("FRONTEND_URL", "http://localhost:5173"),
            default_employee_id: var("DEFAULT_EMPLOYEE_ID", "605c5c469b9a512b4b59a22d"),
            catalog_seed_path: lookup("CATALOG_SEED_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            google_calendar_token: lookup("GOOGLE_CALENDAR_TOKEN").filter(|v| !v.trim().is_empty()),
            google_calendar_id: var("GOOGLE_CALENDAR_ID", "primary"),
            time_entries_topic: var("TIME_ENTRIES_TOPIC", "time-entries.v1"),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
