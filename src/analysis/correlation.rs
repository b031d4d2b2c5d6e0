//! Autocorrelation (ACF) and average magnitude difference (AMDF) over a
//! sample range.
//!
//! Both accept any slice, so they serve the whole-signal visualization path
//! and frame-level pitch work alike. The ACF is left as raw lag sums (no
//! 1/(N-k) normalization): pitch estimation compares magnitudes within one
//! ACF, so only relative size matters, and the raw form keeps `acf[0]` equal
//! to the range's total energy.

/// ACF over lags `0..N`: `acf[k] = Σ x[i]·x[i+k]`.
///
/// `acf[0]` is the sum of squared samples and the global maximum.
pub fn autocorrelation(samples: &[f32]) -> Vec<f32> {
    let n = samples.len();
    let mut acf = Vec::with_capacity(n);
    for lag in 0..n {
        let mut sum = 0.0_f64;
        for i in 0..n - lag {
            sum += samples[i] as f64 * samples[i + lag] as f64;
        }
        acf.push(sum as f32);
    }
    acf
}

/// AMDF over lags `0..N`: `amdf[k] = (1/(N-k)) Σ |x[i] - x[i+k]|`.
///
/// `amdf[0]` is exactly zero; the function dips near the pitch period,
/// complementing the ACF's peak.
pub fn amdf(samples: &[f32]) -> Vec<f32> {
    let n = samples.len();
    let mut out = Vec::with_capacity(n);
    for lag in 0..n {
        let count = n - lag;
        let mut sum = 0.0_f64;
        for i in 0..count {
            sum += (samples[i] - samples[i + lag]).abs() as f64;
        }
        out.push((sum / count as f64) as f32);
    }
    out
}
