use crate::errors::GlueError;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, GlueError> {
        let base_url =
            env::var("DASHBOARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GlueError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GlueError::Config(format!(
                "DASHBOARD_BASE_URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(Self { base_url })
    }
}

