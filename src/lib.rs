//! Sonalyzer - mono PCM sound analysis engine
//!
//! Computes short-term acoustic features (volume, energy, zero-crossing
//! rate), estimates fundamental frequency with classical time-domain methods
//! (ACF/AMDF), and segments a recording into silence, voiced, and unvoiced
//! intervals. All analysis functions are pure: they read an immutable
//! [`types::Signal`] and return values, holding no state between calls.

pub mod analysis;
pub mod audio;
pub mod types;
