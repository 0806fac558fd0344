use crate::{
    error::{Error, ValidationError},
    models::catalog::{Dimensions, TattooStyle},
};
use serde::{Deserialize, Serialize};

pub const IMAGE_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: TattooStyle,
    pub width: u32,
    pub height: u32,
}

impl GenerationRequest {
    /// Default style and the default (square) size.
    pub fn new(prompt: impl Into<String>) -> Self {
        let dims = Dimensions::default_entry();
        Self {
            prompt: prompt.into(),
            style: TattooStyle::default(),
            width: dims.width,
            height: dims.height,
        }
    }

    pub fn with_style(mut self, style: TattooStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Dimensions::lookup(self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl GeneratedImage {
    pub fn from_base64(payload: &str) -> Self {
        Self {
            image_url: format!("data:{};base64,{}", IMAGE_MIME_TYPE, payload),
        }
    }

    /// The raw base64 payload behind the data URL.
    pub fn payload(&self) -> &str {
        self.image_url
            .split_once(',')
            .map(|(_, payload)| payload)
            .unwrap_or_default()
    }
}

/// What a failed attempt looks like to the person who triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&Error> for GenerationFailure {
    fn from(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            suggestion: error.suggestion().map(String::from),
        }
    }
}

// Stability AI v1 text-to-image wire format

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextPrompt {
    pub text: String,
    pub weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: u32,
    pub height: u32,
    pub width: u32,
    pub steps: u32,
    pub samples: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub base64: String,
    pub seed: Option<u64>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextToImageResponse {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    pub id: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}
