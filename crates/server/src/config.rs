use std::{env, num::ParseIntError, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AIRPORTGAP_URL: &str = "https://airportgap.com/api";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing airport list, pass a path or set AIRDIST_AIRPORTS")]
    MissingAirports,
    #[error("Invalid AIRDIST_PORT {0}: {1}")]
    InvalidPort(String, ParseIntError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub airports_path: PathBuf,
    pub airportgap_url: String,
    pub airportgap_token: Option<String>,
    pub port: u16,
}

impl Config {
    /// The first CLI argument wins over `AIRDIST_AIRPORTS` for the airport list.
    pub fn from_env() -> Result<Self, ConfigError> {
        let airports_path = env::args()
            .nth(1)
            .or_else(|| env::var("AIRDIST_AIRPORTS").ok())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingAirports)?;
        let airportgap_url =
            env::var("AIRPORTGAP_URL").unwrap_or_else(|_| DEFAULT_AIRPORTGAP_URL.into());
        let airportgap_token = env::var("AIRPORTGAP_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let port = match env::var("AIRDIST_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|err| ConfigError::InvalidPort(port, err))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            airports_path,
            airportgap_url,
            airportgap_token,
            port,
        })
    }
}
