use serde::Deserialize;
use std::path::Path;

use crate::constants::{ADDRESSES_FILE_PATH, BATCH_SIZE, CONFIG_FILE_PATH, ELIGIBILITY_API_URL};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub api_base_url: String,
    pub batch_size: usize,
    pub request_timeout_secs: Option<u64>,
    pub input_path: String,
    pub output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: ELIGIBILITY_API_URL.to_string(),
            batch_size: BATCH_SIZE,
            request_timeout_secs: None,
            input_path: ADDRESSES_FILE_PATH.to_string(),
            output_path: None,
        }
    }
}

impl Config {
    pub fn from_toml(cfg_str: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(cfg_str)?;

        if config.batch_size == 0 {
            eyre::bail!("BATCH_SIZE must be greater than zero");
        }

        Ok(config)
    }

    async fn read_from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();

        if !tokio::fs::try_exists(path).await? {
            tracing::warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let cfg_str = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&cfg_str)
    }

    pub async fn read_default() -> eyre::Result<Self> {
        Self::read_from_file(CONFIG_FILE_PATH).await
    }

    pub fn http_client(&self) -> eyre::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = self.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}
