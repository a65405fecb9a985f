//! Structured audio format representation.
//!
//! [`AudioFormat`] is the value every operation in this crate produces or
//! consumes. Each field is optional: `None` means "unspecified", never a default.
//!
//! ## Core Types
//!
//! - [`AudioFormat`]: channel count, sample type, byte order, interleaving, sample rate
//! - [`SampleType`]: numeric sample representation or container kind
//! - [`Endianness`]: little or big endian byte order
//!
//! ## Examples
//!
//! ```rust
//! use audio_format::{AudioFormat, Endianness, SampleType};
//!
//! let format = AudioFormat::new()
//!     .with_sample_type(SampleType::Int16)
//!     .with_channels(2)
//!     .with_endianness(Endianness::Big)
//!     .with_interleaved(true)
//!     .with_sample_rate(48000);
//!
//! assert_eq!(format.to_string(), "int16 stereo be interleaved 48000");
//! assert_eq!("int16 stereo be interleaved 48000".parse::<AudioFormat>().unwrap(), format);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte order of multi-byte samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    #[serde(rename = "le")]
    Little,
    #[serde(rename = "be")]
    Big,
}

impl Endianness {
    /// Returns the byte order of the host this code runs on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::Endianness;
    ///
    /// #[cfg(target_endian = "little")]
    /// assert_eq!(Endianness::native(), Endianness::Little);
    /// ```
    #[inline]
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// Returns the canonical token (`le` or `be`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Endianness::Little => "le",
            Endianness::Big => "be",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "le" => Ok(Endianness::Little),
            "be" => Ok(Endianness::Big),
            _ => Err(Error::unrecognized_token(s)),
        }
    }
}

/// The sample data representation of an audio stream.
///
/// This tag names either a numeric sample type (`int16`, `float32`, ...) or the
/// kind of container holding the samples (`audiobuffer`, `ndarray`, ...). Both
/// live in one enum so existing format strings keep working; use
/// [`SampleType::storage_type`] for the numeric view of a container.
///
/// # Examples
///
/// ```rust
/// use audio_format::SampleType;
///
/// let t: SampleType = "float32".parse().unwrap();
/// assert_eq!(t, SampleType::Float32);
/// assert!(t.is_numeric());
/// assert_eq!(SampleType::Buffer.storage_type(), SampleType::Uint8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    #[serde(rename = "uint8")]
    Uint8,
    #[serde(rename = "uint8_clamped")]
    Uint8Clamped,
    #[serde(rename = "uint16")]
    Uint16,
    #[serde(rename = "uint32")]
    Uint32,
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
    /// A generic ordered array of samples.
    #[serde(rename = "array")]
    Array,
    /// A fixed-size raw memory block.
    #[serde(rename = "arraybuffer")]
    ArrayBuffer,
    /// A raw byte buffer.
    #[serde(rename = "buffer")]
    Buffer,
    /// A planar audio-buffer object; always native endian and never interleaved.
    #[serde(rename = "audiobuffer")]
    AudioBuffer,
    /// A multidimensional sample array.
    #[serde(rename = "ndarray")]
    NdArray,
    /// A multidimensional sample array carrying its own format metadata.
    #[serde(rename = "ndsamples")]
    NdSamples,
}

impl SampleType {
    /// Every sample type, in token table order.
    pub const ALL: [SampleType; 15] = [
        SampleType::Uint8,
        SampleType::Uint8Clamped,
        SampleType::Uint16,
        SampleType::Uint32,
        SampleType::Int8,
        SampleType::Int16,
        SampleType::Int32,
        SampleType::Float32,
        SampleType::Float64,
        SampleType::Array,
        SampleType::ArrayBuffer,
        SampleType::Buffer,
        SampleType::AudioBuffer,
        SampleType::NdArray,
        SampleType::NdSamples,
    ];

    /// Returns the canonical token for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SampleType::Uint8 => "uint8",
            SampleType::Uint8Clamped => "uint8_clamped",
            SampleType::Uint16 => "uint16",
            SampleType::Uint32 => "uint32",
            SampleType::Int8 => "int8",
            SampleType::Int16 => "int16",
            SampleType::Int32 => "int32",
            SampleType::Float32 => "float32",
            SampleType::Float64 => "float64",
            SampleType::Array => "array",
            SampleType::ArrayBuffer => "arraybuffer",
            SampleType::Buffer => "buffer",
            SampleType::AudioBuffer => "audiobuffer",
            SampleType::NdArray => "ndarray",
            SampleType::NdSamples => "ndsamples",
        }
    }

    /// Returns `true` for typed-array element kinds (integers and floats).
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            SampleType::Uint8
                | SampleType::Uint8Clamped
                | SampleType::Uint16
                | SampleType::Uint32
                | SampleType::Int8
                | SampleType::Int16
                | SampleType::Int32
                | SampleType::Float32
                | SampleType::Float64
        )
    }

    /// Returns the numeric representation backing this type.
    ///
    /// Byte containers are stored as `uint8`, float containers as `float32`.
    /// Clamped bytes share the `uint8` layout.
    #[must_use]
    pub const fn storage_type(&self) -> SampleType {
        match self {
            SampleType::Uint8Clamped | SampleType::ArrayBuffer | SampleType::Buffer => {
                SampleType::Uint8
            }
            SampleType::Array
            | SampleType::AudioBuffer
            | SampleType::NdArray
            | SampleType::NdSamples => SampleType::Float32,
            other => *other,
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SampleType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unrecognized_token(s))
    }
}

/// A structured description of a PCM audio stream's encoding.
///
/// Produced by [`parse`](crate::parse) and [`detect`](crate::detect), consumed by
/// [`stringify`](crate::stringify). Serializes to an object with the fields
/// `type`, `channels`, `endianness`, `interleaved` and `sampleRate`, omitting
/// unset ones.
///
/// # Examples
///
/// ```rust
/// use audio_format::AudioFormat;
///
/// let format = AudioFormat::new().with_channels(2).with_interleaved(false);
/// assert_eq!(format.channels, Some(2));
/// assert!(format.sample_rate.is_none());
/// assert!(AudioFormat::new().is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFormat {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sample_type: Option<SampleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endianness: Option<Endianness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interleaved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

impl AudioFormat {
    /// Creates a format with every field unspecified.
    #[must_use]
    pub const fn new() -> Self {
        AudioFormat {
            sample_type: None,
            channels: None,
            endianness: None,
            interleaved: None,
            sample_rate: None,
        }
    }

    #[must_use]
    pub fn with_sample_type(mut self, sample_type: SampleType) -> Self {
        self.sample_type = Some(sample_type);
        self
    }

    #[must_use]
    pub fn with_channels(mut self, channels: u16) -> Self {
        self.channels = Some(channels);
        self
    }

    #[must_use]
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = Some(endianness);
        self
    }

    #[must_use]
    pub fn with_interleaved(mut self, interleaved: bool) -> Self {
        self.interleaved = Some(interleaved);
        self
    }

    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Returns `true` if no field is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == AudioFormat::new()
    }

    /// Applies the fixed rules every finished format obeys.
    ///
    /// An `audiobuffer` is always native endian and planar, and an interleaving
    /// flag without a channel count implies stereo.
    pub(crate) fn normalize(&mut self) {
        if self.sample_type == Some(SampleType::AudioBuffer) {
            self.endianness = Some(Endianness::native());
            self.interleaved = Some(false);
        }
        self.default_channels();
    }

    pub(crate) fn default_channels(&mut self) {
        if self.interleaved.is_some() && self.channels.is_none() {
            self.channels = Some(2);
        }
    }
}

impl fmt::Display for AudioFormat {
    /// Writes every specified field, with nothing omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Stringifier::omit_nothing().stringify(self))
    }
}

impl FromStr for AudioFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_type_tokens_roundtrip() {
        for t in SampleType::ALL {
            assert_eq!(t.as_str().parse::<SampleType>().unwrap(), t);
        }
        assert!("float16".parse::<SampleType>().is_err());
    }

    #[test]
    fn test_storage_type() {
        assert_eq!(SampleType::Int16.storage_type(), SampleType::Int16);
        assert_eq!(SampleType::Uint8Clamped.storage_type(), SampleType::Uint8);
        assert_eq!(SampleType::ArrayBuffer.storage_type(), SampleType::Uint8);
        assert_eq!(SampleType::NdSamples.storage_type(), SampleType::Float32);
        assert_eq!(SampleType::AudioBuffer.storage_type(), SampleType::Float32);
    }

    #[test]
    fn test_numeric_types() {
        assert!(SampleType::Uint8Clamped.is_numeric());
        assert!(SampleType::Float64.is_numeric());
        assert!(!SampleType::Buffer.is_numeric());
        assert!(!SampleType::NdArray.is_numeric());
    }

    #[test]
    fn test_endianness_tokens() {
        assert_eq!("le".parse::<Endianness>().unwrap(), Endianness::Little);
        assert_eq!("be".parse::<Endianness>().unwrap(), Endianness::Big);
        assert_eq!(Endianness::Big.to_string(), "be");
        assert!("LE".parse::<Endianness>().is_err());
    }

    #[test]
    fn test_normalize_audiobuffer() {
        let mut format = AudioFormat::new()
            .with_sample_type(SampleType::AudioBuffer)
            .with_interleaved(true)
            .with_endianness(Endianness::Big);
        format.normalize();

        assert_eq!(format.interleaved, Some(false));
        assert_eq!(format.endianness, Some(Endianness::native()));
        assert_eq!(format.channels, Some(2));
    }

    #[test]
    fn test_serde_field_names() {
        let format = AudioFormat::new()
            .with_sample_type(SampleType::Uint8)
            .with_sample_rate(44100);
        let json = serde_json::to_value(format).unwrap();
        assert_eq!(json, serde_json::json!({"type": "uint8", "sampleRate": 44100}));

        let back: AudioFormat = serde_json::from_value(json).unwrap();
        assert_eq!(back, format);
    }
}
