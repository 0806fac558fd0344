pub mod image_client;
pub mod prompt;

use crate::{
    config::StabilityConfig,
    error::{Error, Result},
    models::{GeneratedImage, GenerationRequest},
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

pub use image_client::ImageClient;

/// The one path to the remote image service. Both the HTTP route and
/// in-process callers go through this.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage>;
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        ImageClient::generate(self, request).await
    }
}

#[derive(Clone)]
pub struct StabilityClient {
    image_client: ImageClient,
}

impl StabilityClient {
    pub fn new(config: StabilityConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("STABILITY_API_KEY is not set".into()))?;

        let client = reqwest::Client::builder()
            .default_headers(build_headers(api_key)?)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        log::debug!("Stability client ready for {}", config.text_to_image_url());

        Ok(Self {
            image_client: ImageClient::new(client, config.text_to_image_url()),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| Error::Config("STABILITY_API_KEY contains invalid characters".into()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
