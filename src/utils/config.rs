use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

use crate::utils::errors::ModelError;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// How `Owner::pets` orders its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetSort {
    pub ascending: bool,
    pub ignore_case: bool,
}

impl Default for PetSort {
    fn default() -> Self {
        PetSort {
            ascending: true,
            ignore_case: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub pet_sort: PetSort,
}

impl AppConfig {

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            dotenv().ok();
            AppConfig::from_env()
        })
    }

    /// Reads the current environment without caching. Missing or unparsable
    /// keys keep their defaults.
    pub fn from_env() -> AppConfig {
        let defaults = PetSort::default();

        AppConfig {
            pet_sort: PetSort {
                ascending: flag_or("PETS_SORT_ASCENDING", defaults.ascending),
                ignore_case: flag_or("PETS_SORT_IGNORE_CASE", defaults.ignore_case),
            },
        }
    }
}

pub fn parse_flag(key: &str, value: &str) -> Result<bool, ModelError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ModelError::InvalidConfig(format!("{} = '{}'", key, value))),
    }
}

fn flag_or(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_flag(key, &value).unwrap_or_else(|e| {
            log::warn!("{}, using default {}", e, default);
            default
        }),
        Err(_) => default,
    }
}
