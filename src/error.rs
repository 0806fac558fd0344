use thiserror::Error;

/// Shown to the user next to every failure that happened on the remote side.
pub const RETRY_SUGGESTION: &str = "Please try again later or with a different prompt";

/// Pre-flight rejections. None of these ever reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error("Unknown tattoo style: {0}")]
    UnknownStyle(String),
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },
    #[error("Missing {0}: width and height must be sent together")]
    MissingDimension(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Non-success status from the generation API.
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    /// Success status, but no usable artifact in the body.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::Remote { .. } | Error::Transport(_) | Error::MalformedResponse(_) => {
                Some(RETRY_SUGGESTION)
            }
            Error::Config(_) | Error::Validation(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
