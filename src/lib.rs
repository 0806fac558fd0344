pub mod config;
pub mod error;
pub mod logger;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod session;
pub mod stability;

pub use config::{Config, StabilityConfig};
pub use error::{Error, Result, ValidationError, RETRY_SUGGESTION};
pub use models::*;
pub use session::{GenerationSession, GenerationState};
pub use stability::{ImageClient, ImageGenerator, StabilityClient};
