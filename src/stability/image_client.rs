use crate::{
    error::{Error, Result},
    logger,
    models::{GeneratedImage, GenerationRequest, RemoteErrorBody, TextToImageResponse},
    stability::prompt::build_payload,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};

/// Talks to the text-to-image endpoint. The HTTP client is expected to carry
/// the auth and accept headers already.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
}

impl ImageClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One attempt, no retry. Validation failures never touch the network.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        request.validate()?;

        let payload = build_payload(request);
        log::info!(
            "Generating {} tattoo design at {}x{}",
            request.style,
            request.width,
            request.height
        );
        log::debug!(
            "Text-to-image payload: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        let _timer = logger::timer("text-to-image");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Generation API request failed: {}", e);
                Error::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        first_image(&body)
    }
}

fn remote_error(status: StatusCode, body: &str) -> Error {
    let remote: RemoteErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = remote
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    log::error!(
        "Generation API returned {} ({}): {}",
        status.as_u16(),
        remote.name.as_deref().unwrap_or("unknown"),
        message
    );
    if let Some(id) = remote.id {
        log::debug!("Generation API error id: {}", id);
    }

    Error::Remote {
        status: status.as_u16(),
        message,
    }
}

fn first_image(body: &str) -> Result<GeneratedImage> {
    let response: TextToImageResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid response body: {}", e)))?;

    let artifact = response
        .artifacts
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("No images generated".into()))?;

    if artifact.base64.is_empty() {
        return Err(Error::MalformedResponse("artifact has no image data".into()));
    }
    check_base64(&artifact.base64)?;

    match artifact.finish_reason.as_deref() {
        Some("SUCCESS") | None => {}
        Some(reason) => log::warn!("Artifact finished with reason {}", reason),
    }
    if let Some(seed) = artifact.seed {
        log::debug!("Artifact seed: {}", seed);
    }

    Ok(GeneratedImage::from_base64(&artifact.base64))
}

/// Decodes in fixed chunks into a stack buffer so a multi-megabyte PNG is
/// never copied onto the heap just to be thrown away.
fn check_base64(data: &str) -> Result<()> {
    let mut buf = [0u8; BASE64_CHUNK];
    for chunk in data.as_bytes().chunks(BASE64_CHUNK) {
        STANDARD.decode_slice(chunk, &mut buf).map_err(|e| {
            Error::MalformedResponse(format!("artifact is not valid base64: {}", e))
        })?;
    }
    Ok(())
}

// Multiple of 4, so padding can only appear in the last chunk.
const BASE64_CHUNK: usize = 4096;
