//! Runtime configuration read from the environment.
//!
//! | variable                   | default                               |
//! |----------------------------|---------------------------------------|
//! | `PEDIATRIC_BIND_ADDR`      | `0.0.0.0:3000`                        |
//! | `PEDIATRIC_DATA_DIR`       | `<platform data dir>/pediatric-care`  |
//! | `PEDIATRIC_ALLOWED_ORIGIN` | `http://localhost:8080`               |

use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "PEDIATRIC_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "PEDIATRIC_DATA_DIR";
pub const ALLOWED_ORIGIN_VAR: &str = "PEDIATRIC_ALLOWED_ORIGIN";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";
const DATA_DIR_NAME: &str = "pediatric-care";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} is not a valid origin header value: {value}")]
    InvalidOrigin { var: &'static str, value: String },
    #[error("no platform data directory found; set {0}")]
    NoDataDir(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub allowed_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let data_dir = match get(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir.trim()),
            None => dirs::data_dir()
                .map(|dir| dir.join(DATA_DIR_NAME))
                .ok_or(ConfigError::NoDataDir(DATA_DIR_VAR))?,
        };

        let raw_origin = get(ALLOWED_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(raw_origin.trim()).map_err(|_| {
            ConfigError::InvalidOrigin {
                var: ALLOWED_ORIGIN_VAR,
                value: raw_origin.clone(),
            }
        })?;

        Ok(Self {
            bind_addr,
            data_dir,
            allowed_origin,
        })
    }
}
