//! # audio_format
//!
//! Parse, detect and stringify compact descriptions of PCM audio formats.
//!
//! ## What is an audio format string?
//!
//! A short, order-independent list of tokens describing how samples are laid
//! out in memory, for example `interleaved uint8 le stereo 44100` or
//! `float32 5.1 planar 48000`. See [`notation`] for the full vocabulary.
//!
//! ## Key Features
//!
//! - **Parsing**: format strings become a structured [`AudioFormat`]
//! - **Detection**: infer an [`AudioFormat`] from typed arrays, byte buffers,
//!   multidimensional arrays or audio-buffer objects through the [`Probe`] trait
//! - **Stringification**: write only the fields that differ from a baseline
//! - **Serde Compatible**: [`AudioFormat`] serializes to the familiar object form
//! - **Stateless**: lookup tables are built once and never mutated, so every
//!   operation is safe to call from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_format::{parse, stringify, AudioFormat, SampleType};
//!
//! let format = parse("interleaved int16 stereo 48000").unwrap();
//! assert_eq!(format.sample_type, Some(SampleType::Int16));
//! assert_eq!(format.channels, Some(2));
//!
//! // Little endian is left out by default
//! let format = format.with_endianness(audio_format::Endianness::Little);
//! assert_eq!(stringify(&format), "int16 stereo interleaved 48000");
//! ```
//!
//! ### Detecting formats from objects
//!
//! ```rust
//! use audio_format::{detect, stringify_object, value, TypedArray, Value};
//!
//! let samples = Value::from(TypedArray::Int16(vec![0; 1024]));
//! assert_eq!(stringify_object(&samples), "int16");
//!
//! let buffer = value!({
//!     "length": 10,
//!     "duration": 0.0002,
//!     "numberOfChannels": 1,
//!     "sampleRate": 44100
//! });
//! let format = detect(&buffer);
//! assert_eq!(format.channels, Some(1));
//! assert_eq!(format.sample_rate, Some(44100));
//! if cfg!(target_endian = "little") {
//!     assert_eq!(stringify_object(&buffer), "audiobuffer mono 44100");
//! }
//! ```
//!
//! ## Errors
//!
//! Only parsing fails, with [`Error::UnrecognizedToken`]. Detection and
//! stringification always return a result, leaving out whatever they cannot
//! resolve.

pub mod detect;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod notation;
pub mod options;
pub mod parse;
pub mod stringify;
pub mod tables;
pub mod value;

pub use detect::{type_of, Detector, Probe, Sample};
pub use error::{Error, Result};
pub use format::{AudioFormat, Endianness, SampleType};
pub use map::FieldMap;
pub use options::DetectOptions;
pub use parse::{Parser, Token};
pub use stringify::Stringifier;
pub use tables::{SampleRateTable, StandardRates};
pub use value::{Number, TypedArray, Value};

/// Parse a format string into an [`AudioFormat`].
///
/// Named sample rates resolve through [`StandardRates`]; use [`Parser`] for a
/// different table.
///
/// # Examples
///
/// ```rust
/// use audio_format::{parse, Endianness, SampleType};
///
/// let format = parse("stereo audiobuffer 96000").unwrap();
/// assert_eq!(format.sample_type, Some(SampleType::AudioBuffer));
/// assert_eq!(format.interleaved, Some(false));
/// assert_eq!(format.endianness, Some(Endianness::native()));
/// assert_eq!(format.sample_rate, Some(96000));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnrecognizedToken`] if a token matches no known category.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<AudioFormat> {
    Parser::new().parse(input)
}

/// Infer an [`AudioFormat`] from an object.
///
/// Never fails. Objects with no recognizable fields or shape give an empty
/// format.
///
/// # Examples
///
/// ```rust
/// use audio_format::{detect, value};
///
/// let format = detect(&value!({ "type": "int16" }));
/// assert_eq!(format.to_string(), "int16");
/// assert!(detect(&value!(null)).is_empty());
/// ```
#[must_use]
pub fn detect(obj: &dyn Probe) -> AudioFormat {
    Detector::new().detect(obj)
}

/// Infer an [`AudioFormat`] from an object using custom field aliases.
#[must_use]
pub fn detect_with(obj: &dyn Probe, options: &DetectOptions) -> AudioFormat {
    Detector::with_options(options.clone()).detect(obj)
}

/// Write a format, leaving out little endianness.
///
/// # Examples
///
/// ```rust
/// use audio_format::{stringify, AudioFormat};
///
/// let format = AudioFormat::new().with_channels(2).with_interleaved(false);
/// assert_eq!(stringify(&format), "stereo planar");
/// ```
#[must_use]
pub fn stringify(format: &AudioFormat) -> String {
    Stringifier::new().stringify(format)
}

/// Write a format, leaving out every field equal to the same field of `omit`.
///
/// Pass `&AudioFormat::new()` to write every specified field.
#[must_use]
pub fn stringify_with(format: &AudioFormat, omit: &AudioFormat) -> String {
    Stringifier::omit(*omit).stringify(format)
}

/// Detect the format of an object, then write it, leaving out little endianness.
#[must_use]
pub fn stringify_object(obj: &dyn Probe) -> String {
    Stringifier::new().stringify_object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_parse_default() {
        let format = parse("interleaved uint8 le stereo 44100").unwrap();
        assert_eq!(
            format,
            AudioFormat::new()
                .with_interleaved(true)
                .with_sample_type(SampleType::Uint8)
                .with_endianness(Endianness::Little)
                .with_channels(2)
                .with_sample_rate(44100)
        );
    }

    #[test]
    fn test_parse_layout_defaults_channels() {
        assert_eq!(
            parse("interleaved").unwrap(),
            AudioFormat::new().with_channels(2).with_interleaved(true)
        );
        assert_eq!(
            parse("planar").unwrap(),
            AudioFormat::new().with_channels(2).with_interleaved(false)
        );
    }

    #[test]
    fn test_parse_unrecognized() {
        let err = parse("not-a-real-token").unwrap_err();
        assert_eq!(err, Error::unrecognized_token("not-a-real-token"));
    }

    #[test]
    fn test_stringify_with_baseline() {
        let format = AudioFormat::new()
            .with_sample_type(SampleType::Float32)
            .with_endianness(Endianness::Little)
            .with_interleaved(false)
            .with_channels(2);
        let omit = AudioFormat::new()
            .with_endianness(Endianness::Little)
            .with_sample_type(SampleType::Float32);
        assert_eq!(stringify_with(&format, &omit), "stereo planar");
    }

    #[test]
    fn test_display_and_from_str() {
        let format: AudioFormat = "be 5.1 float64 interleaved 88200".parse().unwrap();
        assert_eq!(format.to_string(), "float64 5.1 be interleaved 88200");
    }

    #[test]
    fn test_detect_with_custom_aliases() {
        let obj = value!({ "nch": 3 });
        let options = DetectOptions::new().with_channel_aliases(["nch"]);
        assert_eq!(detect_with(&obj, &options).channels, Some(3));
        assert_eq!(detect(&obj).channels, None);
    }
}
