use std::{env, fmt::Display, str::FromStr};

use katottg_core::DEFAULT_REGISTRY_URL;
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub registry_url: String,
}

impl Config {
    pub fn load() -> Self {
        Config {
            port: try_load("KATOTTG_PORT", "8000"),
            registry_url: try_load("KATOTTG_REGISTRY_URL", DEFAULT_REGISTRY_URL),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
