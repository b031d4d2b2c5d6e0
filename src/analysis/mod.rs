//! Signal analysis engine: pure functions over immutable sample buffers.
//!
//! Every function here either completes with a value or fails eagerly with
//! [`AnalysisError::InvalidInput`] at a load/extraction boundary. Degenerate
//! inputs (empty frames, silent signals, undetected pitch) produce explicit
//! "no data" / zero results, never errors.

pub mod correlation;
pub mod features;
pub mod frame;
pub mod pitch;
pub mod segmentation;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use correlation::{amdf, autocorrelation};
pub use features::{compute_features, peak_volume, short_term_energy, volume, zero_crossing_rate};
pub use frame::extract_frame;
pub use pitch::estimate_f0;
pub use segmentation::segment;

/// Convenient alias for results returned by analysis modules.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error raised at the engine's input boundaries.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Malformed sample buffer, non-positive sample rate or duration, or a
    /// channel-count mismatch.
    InvalidInput(String),
}

impl AnalysisError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl Error for AnalysisError {}
