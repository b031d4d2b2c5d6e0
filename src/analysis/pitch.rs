//! Fundamental frequency estimation from the autocorrelation function.

use crate::analysis::correlation;

/// Lower edge of the plausible human-voice fundamental range.
const FREQ_MIN_HZ: f64 = 50.0;
/// Upper edge of the plausible human-voice fundamental range.
const FREQ_MAX_HZ: f64 = 400.0;
/// Floor on the winning raw ACF peak; anything below is treated as
/// silence/noise and reported as unpitched.
const MIN_PEAK: f32 = 1e-6;

/// Estimate the fundamental frequency of a sample range, in Hz.
///
/// Searches the ACF for its largest peak at lags corresponding to 50-400 Hz
/// (lag 0 excluded; it is always the global maximum and means nothing as a
/// period). Ties go to the smallest lag. Returns 0.0 when the lag window is
/// empty or no in-window peak clears the silence floor; an unpitched frame
/// is a normal outcome, not an error.
pub fn estimate_f0(samples: &[f32], sample_rate: u32) -> f32 {
    let n = samples.len();
    if n < 2 || sample_rate == 0 {
        return 0.0;
    }

    let lag_min = ((sample_rate as f64 / FREQ_MAX_HZ).round() as usize).max(1);
    let lag_max = ((sample_rate as f64 / FREQ_MIN_HZ).round() as usize).min(n - 1);
    if lag_min > lag_max {
        // range too short to hold even the shortest plausible period
        return 0.0;
    }

    let acf = correlation::autocorrelation(samples);
    let mut best_lag = 0usize;
    let mut best_value = MIN_PEAK;
    for lag in lag_min..=lag_max {
        if acf[lag] > best_value {
            best_value = acf[lag];
            best_lag = lag;
        }
    }

    if best_lag == 0 {
        return 0.0;
    }
    sample_rate as f32 / best_lag as f32
}
