use crate::errors::BoardError;
use std::{net::SocketAddr, path::Path};
use tracing::info;
use validator::{Validate, ValidationError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_POSTS_FILE: &str = "posts.json";
const DEFAULT_POSTS_LOG: &str = "posts.log";
const DEFAULT_STATIC_DIR: &str = "static";

/// Process settings. Board limits are constants, not configuration.
#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(custom(function = "validate_socket_addr"))]
    pub bind_addr: String,
    #[validate(length(min = 1, message = "POSTS_FILE must not be empty"))]
    pub posts_file: String,
    #[validate(length(min = 1, message = "POSTS_LOG must not be empty"))]
    pub posts_log: String,
    #[validate(length(min = 1, message = "STATIC_DIR must not be empty"))]
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            posts_file: DEFAULT_POSTS_FILE.to_string(),
            posts_log: DEFAULT_POSTS_LOG.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl Config {
    /// Read settings from the environment (and `.env`, if the caller loaded it).
    pub fn from_env() -> Result<Self, BoardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoardError> {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let config = Self {
            bind_addr: var("BIND_ADDR", DEFAULT_BIND_ADDR),
            posts_file: var("POSTS_FILE", DEFAULT_POSTS_FILE),
            posts_log: var("POSTS_LOG", DEFAULT_POSTS_LOG),
            static_dir: var("STATIC_DIR", DEFAULT_STATIC_DIR),
        };

        config
            .validate()
            .map_err(|e| BoardError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, BoardError> {
        self.bind_addr
            .parse()
            .map_err(|e| BoardError::Config(format!("BIND_ADDR: {e}")))
    }

    pub fn posts_file(&self) -> &Path {
        Path::new(&self.posts_file)
    }

    pub fn posts_log(&self) -> &Path {
        Path::new(&self.posts_log)
    }

    pub fn static_dir(&self) -> &Path {
        Path::new(&self.static_dir)
    }
}

fn validate_socket_addr(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("socket_addr").with_message("BIND_ADDR must be host:port".into()))
}
