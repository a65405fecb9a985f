//! Format stringification.
//!
//! The [`Stringifier`] writes the fields of an [`AudioFormat`] that differ
//! from a baseline, in a fixed order: type, channels, endianness,
//! interleaving, sample rate. The default baseline is little endian, so the
//! common case is not spelled out.
//!
//! ```rust
//! use audio_format::{stringify, AudioFormat, Endianness, SampleType, Stringifier};
//!
//! let format = AudioFormat::new()
//!     .with_sample_type(SampleType::Float32)
//!     .with_channels(2)
//!     .with_endianness(Endianness::Little)
//!     .with_interleaved(false);
//!
//! assert_eq!(stringify(&format), "float32 stereo planar");
//!
//! let baseline = AudioFormat::new()
//!     .with_sample_type(SampleType::Float32)
//!     .with_endianness(Endianness::Little);
//! assert_eq!(Stringifier::omit(baseline).stringify(&format), "stereo planar");
//! ```

use crate::detect::{Detector, Probe};
use crate::{tables, AudioFormat, Endianness, Result, SampleType};
use log::warn;

/// Writes formats as compact token strings, leaving out baseline fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stringifier {
    baseline: AudioFormat,
}

impl Default for Stringifier {
    /// Omits little endianness only.
    fn default() -> Self {
        Stringifier {
            baseline: AudioFormat::new().with_endianness(Endianness::Little),
        }
    }
}

impl Stringifier {
    /// Creates a stringifier with the default baseline (`le`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Omits every field equal to the same field of `baseline`.
    #[must_use]
    pub fn omit(baseline: AudioFormat) -> Self {
        Stringifier { baseline }
    }

    /// Omits nothing: every specified field is written.
    #[must_use]
    pub fn omit_nothing() -> Self {
        Self::omit(AudioFormat::new())
    }

    /// Uses a parsed format string as the baseline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::{parse, Stringifier};
    ///
    /// let format = parse("int16 stereo le interleaved 44100").unwrap();
    /// let stringifier = Stringifier::omit_str("int16 44100").unwrap();
    /// assert_eq!(stringifier.stringify(&format), "stereo le interleaved");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedToken`](crate::Error::UnrecognizedToken) if
    /// the baseline does not parse.
    pub fn omit_str(baseline: &str) -> Result<Self> {
        Ok(Self::omit(crate::parse(baseline)?))
    }

    /// Uses the detected format of an object as the baseline.
    #[must_use]
    pub fn omit_object(baseline: &dyn Probe) -> Self {
        Self::omit(Detector::new().detect(baseline))
    }

    #[must_use]
    pub fn baseline(&self) -> &AudioFormat {
        &self.baseline
    }

    /// Writes the fields of `format` that differ from the baseline.
    ///
    /// Returns an empty string when the format matches the baseline.
    #[must_use]
    pub fn stringify(&self, format: &AudioFormat) -> String {
        let omit = &self.baseline;
        let mut parts: Vec<String> = Vec::with_capacity(5);

        if let Some(sample_type) = format.sample_type {
            if format.sample_type != omit.sample_type {
                parts.push(sample_type.as_str().to_string());
            }
        }

        if let Some(channels) = format.channels {
            if format.channels != omit.channels {
                match tables::channel_name(channels) {
                    Some(name) => parts.push(name.to_string()),
                    None => warn!("channel count {} has no name, leaving it out", channels),
                }
            }
        }

        if let Some(endianness) = format.endianness {
            if format.endianness != omit.endianness {
                parts.push(endianness.as_str().to_string());
            }
        }

        // An audiobuffer is always planar, so its layout goes unsaid.
        if let Some(interleaved) = format.interleaved {
            if format.interleaved != omit.interleaved
                && format.sample_type != Some(SampleType::AudioBuffer)
            {
                let token = if interleaved { "interleaved" } else { "planar" };
                parts.push(token.to_string());
            }
        }

        if let Some(rate) = format.sample_rate {
            if format.sample_rate != omit.sample_rate {
                parts.push(rate.to_string());
            }
        }

        parts.join(" ")
    }

    /// Detects the format of an object, then writes it.
    #[must_use]
    pub fn stringify_object(&self, obj: &dyn Probe) -> String {
        self.stringify(&Detector::new().detect(obj))
    }
}
