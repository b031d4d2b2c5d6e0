//! Audio file decoding: a collaborator in front of the analysis engine.
//!
//! Decodes any container/codec symphonia supports and hands the engine a
//! normalized mono [`Signal`]. When the file carries several channels, the
//! first one is selected (never averaged) so results are deterministic.

use crate::types::Signal;
use anyhow::{Context, Result};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal as SymphoniaSignal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

/// Decode an audio file to a normalized mono signal.
pub fn decode_audio<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let path = path.as_ref();

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probe_result = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .context("Failed to probe audio format")?;

    let mut format = probe_result.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No audio tracks found in file")?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("Sample rate not specified in audio file")?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create decoder")?;

    let mut samples = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(err) => return Err(err).context("Failed to read packet"),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .context("Failed to decode audio packet")?;
        extend_from_first_channel(&mut samples, &decoded);
    }

    debug!(
        samples = samples.len(),
        sample_rate, "decoded audio file to mono signal"
    );
    Signal::from_mono(samples, sample_rate).map_err(anyhow::Error::from)
}

/// Append the first channel of a decoded buffer, normalized to [-1.0, 1.0].
fn extend_from_first_channel(samples: &mut Vec<f32>, buffer: &AudioBufferRef) {
    match buffer {
        AudioBufferRef::S8(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 128.0));
        }
        AudioBufferRef::S16(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 32_768.0));
        }
        AudioBufferRef::S24(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s.inner() as f32 / 8_388_608.0));
        }
        AudioBufferRef::S32(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 2_147_483_648.0));
        }
        AudioBufferRef::U8(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 128.0 - 1.0));
        }
        AudioBufferRef::U16(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 32_768.0 - 1.0));
        }
        AudioBufferRef::U24(buf) => {
            samples.extend(
                buf.chan(0)
                    .iter()
                    .map(|&s| s.inner() as f32 / 8_388_608.0 - 1.0),
            );
        }
        AudioBufferRef::U32(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 2_147_483_648.0 - 1.0));
        }
        AudioBufferRef::F32(buf) => {
            samples.extend_from_slice(buf.chan(0));
        }
        AudioBufferRef::F64(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32));
        }
    }
}
