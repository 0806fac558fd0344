use crate::{
    error::{ValidationError, RETRY_SUGGESTION},
    models::{
        catalog::{Dimensions, TattooStyle},
        image::GenerationRequest,
    },
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`. Everything but the prompt is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateBody {
    pub prompt: Option<String>,
    pub style: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl GenerateBody {
    pub fn into_request(self) -> Result<GenerationRequest, ValidationError> {
        let prompt = match self.prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => return Err(ValidationError::EmptyPrompt),
        };

        let style = match self.style.as_deref() {
            Some(id) => TattooStyle::from_id(id)?,
            None => TattooStyle::default(),
        };

        let default_dims = Dimensions::default_entry();
        let (width, height) = match (self.width, self.height) {
            (None, None) => (default_dims.width, default_dims.height),
            (Some(_), None) => return Err(ValidationError::MissingDimension("height")),
            (None, Some(_)) => return Err(ValidationError::MissingDimension("width")),
            (Some(width), Some(height)) => {
                Dimensions::lookup(width, height)?;
                (width, height)
            }
        };

        Ok(GenerationRequest {
            prompt,
            style,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
            suggestion: None,
        }
    }

    pub fn generation_failed(error: impl Into<String>, suggestion: Option<&str>) -> Self {
        Self {
            message: "Error generating image".to_string(),
            error: Some(error.into()),
            suggestion: Some(suggestion.unwrap_or(RETRY_SUGGESTION).to_string()),
        }
    }
}
