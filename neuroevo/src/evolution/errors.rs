use neuroevo_nn::NetworkError;

use std::error::Error;
use std::fmt;

/// Errors raised while breeding, persisting, or
/// setting up an [`Evolution`](crate::Evolution).
#[derive(Debug)]
pub enum EvolutionError {
    /// Breeding or saving needs at least two simulations.
    TooFewSimulations { found: usize },
    /// A network could not be bred, saved or loaded.
    Network(NetworkError),
    /// The worker thread pool could not be started.
    WorkerPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSimulations { found } => write!(
                f,
                "at least two simulations are needed, population has {}",
                found
            ),
            Self::Network(e) => write!(f, "{}", e),
            Self::WorkerPool(e) => write!(f, "failed to start worker pool: {}", e),
        }
    }
}

impl Error for EvolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TooFewSimulations { .. } => None,
            Self::Network(e) => Some(e),
            Self::WorkerPool(e) => Some(e),
        }
    }
}

impl From<NetworkError> for EvolutionError {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for EvolutionError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(e)
    }
}
