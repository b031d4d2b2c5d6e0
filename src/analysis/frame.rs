use crate::analysis::{AnalysisError, Result};
use crate::types::{Frame, Signal};

/// Slice a frame out of a signal from a start fraction and a duration.
///
/// `start_fraction` is clamped to [0, 1]; `duration_ms` must be positive.
/// A start at or past the end of the signal yields an empty frame rather
/// than an error, and callers must treat an empty frame as "no feature
/// output".
pub fn extract_frame(signal: &Signal, start_fraction: f64, duration_ms: f64) -> Result<Frame> {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return Err(AnalysisError::invalid_input(format!(
            "frame duration must be positive, got {} ms",
            duration_ms
        )));
    }

    let total = signal.len();
    let fraction = if start_fraction.is_finite() {
        start_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let start = ((fraction * total as f64).round() as usize).min(total);
    let span = (duration_ms / 1000.0 * signal.sample_rate() as f64).round() as usize;
    let end = start.saturating_add(span).min(total);

    Ok(Frame::new(start, end))
}
