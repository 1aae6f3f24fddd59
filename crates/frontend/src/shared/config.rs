//! Configuration of the catalog page.
//!
//! The page has no files and no environment to read from, so the whole
//! configuration is a TOML document compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Endpoint returning the full product list as a JSON array
    pub products_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Images shown per product row
    pub max_images: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
products_url = "https://api.escuelajs.co/api/v1/products"

[list]
default_page_size = 10
page_size_options = [5, 10, 20, 50]
max_images = 3
"#;

/// Load the embedded configuration
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        let list = &self.list;

        if list.page_size_options.is_empty() || list.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid(
                "page_size_options must be non-empty and positive".to_string(),
            ));
        }
        if !list.page_size_options.contains(&list.default_page_size) {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} is not one of {:?}",
                list.default_page_size, list.page_size_options
            )));
        }
        if list.max_images == 0 {
            return Err(ConfigError::Invalid("max_images must be positive".to_string()));
        }
        Ok(())
    }
}
