use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use url::Url;

use crate::errors::AppError;
use crate::storage::{file::DEFAULT_FAVORITES_PATH, remote::DEFAULT_USERS_URL};

pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    dotenv().ok();

    env::var(key).map_err(|_| AppError::NotFound(format!("{key} in env")))
}

/// Resolved settings for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub users_url: Url,
    pub favorites_path: PathBuf,
    pub color: bool,
}

impl Config {
    /// Builds the config from explicit values, falling back to the
    /// environment and then to the built-in defaults.
    pub fn resolve(
        users_url: Option<&str>,
        favorites_path: Option<PathBuf>,
        no_color: bool,
    ) -> Result<Self, AppError> {
        let users_url = match users_url {
            Some(url) => url.to_string(),
            None => get_env_value_by_key("ROSTER_USERS_URL")
                .unwrap_or_else(|_| DEFAULT_USERS_URL.to_string()),
        };

        let favorites_path = match favorites_path {
            Some(path) => path,
            None => get_env_value_by_key("ROSTER_FAVORITES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FAVORITES_PATH)),
        };

        if favorites_path.as_os_str().is_empty() {
            return Err(AppError::Validation(
                "Favorites path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            users_url: Url::parse(&users_url)?,
            favorites_path,
            color: !no_color && get_env_value_by_key("NO_COLOR").is_err(),
        })
    }
}
