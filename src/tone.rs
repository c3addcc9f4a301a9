//! Sine test-tone rendering.
//!
//! Lets a table entry be auditioned: render a short sine at the entry's
//! frequency and write it out as a WAV file.

use std::f64::consts::TAU;
use std::time::Duration;

use hound::{WavSpec, WavWriter};

/// Output level of rendered tones, leaving headroom below full scale.
const TONE_LEVEL: f32 = 0.5;

/// Fade-in/fade-out length applied to both ends of a tone.
const FADE_MS: u64 = 5;

/// Render a sine tone at the given frequency.
///
/// A short linear fade is applied at both ends so the tone starts and stops
/// without clicks.
pub fn render_tone(freq_hz: f64, sample_rate: u32, duration: Duration) -> Vec<f32> {
    let n_samples = duration.as_millis() as usize * (sample_rate as usize / 1000);
    let fade_samples = (FADE_MS as usize * sample_rate as usize / 1000).min(n_samples / 2);

    let mut buf = Vec::with_capacity(n_samples);
    for n in 0..n_samples {
        let t = n as f64 / sample_rate as f64;
        let mut sample = (TAU * freq_hz * t).sin() as f32 * TONE_LEVEL;

        if n < fade_samples {
            sample *= n as f32 / fade_samples as f32;
        } else if n >= n_samples - fade_samples {
            sample *= (n_samples - n) as f32 / fade_samples as f32;
        }

        buf.push(sample);
    }
    buf
}

/// Encode mono float samples as WAV bytes.
pub fn tone_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let wav_spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut ret = vec![];
    let mut cursor = std::io::Cursor::new(&mut ret);

    let mut wav_writer = WavWriter::new(&mut cursor, wav_spec).unwrap();

    for sample in samples {
        wav_writer.write_sample(*sample).unwrap();
    }

    wav_writer.finalize().unwrap();

    ret
}
