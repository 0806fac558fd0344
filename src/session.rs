use crate::{
    error::Error,
    models::{GeneratedImage, GenerationFailure, GenerationRequest},
    stability::ImageGenerator,
};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Requesting,
    Succeeded(GeneratedImage),
    Failed(GenerationFailure),
}

impl GenerationState {
    pub fn is_busy(&self) -> bool {
        matches!(self, GenerationState::Requesting)
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            GenerationState::Succeeded(image) => Some(image),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            GenerationState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Per-view generation state. Holds exactly one [`GenerationState`] and moves
/// `Idle -> Requesting -> Succeeded | Failed`; submissions while a request is
/// in flight are ignored.
pub struct GenerationSession {
    generator: Arc<dyn ImageGenerator>,
    state: Mutex<GenerationState>,
}

impl GenerationSession {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            generator,
            state: Mutex::new(GenerationState::Idle),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.lock().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_busy()
    }

    pub fn reset(&self) {
        *self.lock() = GenerationState::Idle;
    }

    /// Runs one generation attempt and returns the state it ended in.
    pub async fn submit(&self, request: GenerationRequest) -> GenerationState {
        {
            let mut state = self.lock();
            if state.is_busy() {
                log::debug!("Generation already in flight, ignoring submission");
                return GenerationState::Requesting;
            }
            if let Err(e) = request.validate() {
                let failure = GenerationFailure::from(&Error::from(e));
                *state = GenerationState::Failed(failure);
                return state.clone();
            }
            *state = GenerationState::Requesting;
        }
        let _in_flight = InFlight { session: self };

        let next = match self.generator.generate(&request).await {
            Ok(image) => GenerationState::Succeeded(image),
            Err(e) => {
                log::error!("Generation failed: {}", e);
                GenerationState::Failed(GenerationFailure::from(&e))
            }
        };

        let mut state = self.lock();
        *state = next;
        state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, GenerationState> {
        // A poisoned lock only means a panic elsewhere; the state value is still whole.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Puts the session back to `Idle` if `submit` is dropped mid-request.
struct InFlight<'a> {
    session: &'a GenerationSession,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        if state.is_busy() {
            log::debug!("Generation attempt cancelled before completing");
            *state = GenerationState::Idle;
        }
    }
}
