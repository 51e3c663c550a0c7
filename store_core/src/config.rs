use serde::Deserialize;
use std::{env, error::Error, fs, path::Path};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub database_url: String,
    pub server_address: String,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The DATABASE_URL environment variable takes precedence over the
    /// value from the config file.
    pub fn database_url(&self) -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| self.database_url.clone())
    }
}
