use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use std::env;
use std::fmt;

pub const DEFAULT_API_HOST: &str = "https://api.stability.ai";
pub const DEFAULT_ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Clone)]
pub struct StabilityConfig {
    pub api_key: Option<String>,
    pub api_host: String,
    pub engine_id: String,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        StabilityConfig {
            api_key: None,
            api_host: DEFAULT_API_HOST.to_string(),
            engine_id: DEFAULT_ENGINE_ID.to_string(),
        }
    }
}

impl StabilityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("STABILITY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_host = env::var("STABILITY_API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.into());
        let engine_id =
            env::var("STABILITY_ENGINE_ID").unwrap_or_else(|_| DEFAULT_ENGINE_ID.into());

        StabilityConfig {
            api_key,
            api_host,
            engine_id,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    pub fn with_engine_id(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = engine_id.into();
        self
    }

    pub fn text_to_image_url(&self) -> String {
        format!(
            "{}/v1/generation/{}/text-to-image",
            self.api_host.trim_end_matches('/'),
            self.engine_id
        )
    }

    /// Enough of the key to tell two keys apart in a log line.
    pub fn masked_key(&self) -> String {
        match &self.api_key {
            Some(key) if key.chars().count() > 8 => {
                let head: String = key.chars().take(3).collect();
                let tail: String = key.chars().skip(key.chars().count() - 4).collect();
                format!("{}...{}", head, tail)
            }
            Some(_) => "***".to_string(),
            None => "<unset>".to_string(),
        }
    }
}

impl fmt::Debug for StabilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StabilityConfig")
            .field("api_key", &self.masked_key())
            .field("api_host", &self.api_host)
            .field("engine_id", &self.engine_id)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: Option<u16>,
    pub production: bool,
    pub stability: StabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: None,
            production: false,
            stability: StabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let production = env::var("APP_ENV").map_or(false, |val| val == "production");

        Config {
            host,
            port,
            production,
            stability: StabilityConfig::from_env(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_stability(mut self, config: StabilityConfig) -> Self {
        self.stability = config;
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port())
    }
}

/// Installs the process-wide configuration. Only the first call wins.
pub fn install(config: Config) -> Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("configuration already installed".into()))?;
    global()
}

pub fn global() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("configuration not installed".into()))
}
