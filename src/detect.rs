//! Format detection from in-memory objects.
//!
//! The detector never looks at concrete types. It asks an object what it can
//! do through the [`Probe`] trait: which fields it exposes, whether it behaves
//! like an audio buffer, a byte buffer, an array, a raw memory block or a typed
//! numeric array. From the answers it builds a partial [`AudioFormat`].
//!
//! ## Detection steps
//!
//! 1. Scalar fields are read through alias lists (see [`DetectOptions`]); the
//!    sample rate falls back to `format.sampleRate`.
//! 2. A truthy `planar` field forces a planar layout.
//! 3. An interleaving flag without a channel count implies stereo.
//! 4. Without an explicit `type` field, the object shape is sniffed in a fixed
//!    order, first match wins: audio buffer, byte buffer, array, raw memory
//!    block, multidimensional array, typed array.
//! 5. An `audiobuffer` is always native endian and planar.
//!
//! ```rust
//! use audio_format::{detect, value, SampleType, TypedArray, Value};
//!
//! let clamped = Value::from(TypedArray::Uint8Clamped(vec![0, 255, 0, 255]));
//! let format = detect(&clamped);
//! assert_eq!(format.sample_type, Some(SampleType::Uint8Clamped));
//! assert_eq!(format.channels, None);
//!
//! let format = detect(&value!({ "interleaved": true }));
//! assert_eq!(format.channels, Some(2));
//! ```

use crate::{AudioFormat, DetectOptions, Endianness, SampleType, TypedArray, Value};
use log::{debug, trace};

/// Capabilities the detector probes on an object.
///
/// Every method defaults to "not supported", so an implementation only needs
/// to describe what its type actually offers.
///
/// # Examples
///
/// ```rust
/// use audio_format::{detect, Probe, SampleType, Value};
///
/// struct PlanarBuffer {
///     channels: Vec<Vec<f32>>,
///     sample_rate: u32,
/// }
///
/// impl Probe for PlanarBuffer {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "numberOfChannels" => Some(Value::from(self.channels.len() as u32)),
///             "sampleRate" => Some(Value::from(self.sample_rate)),
///             _ => None,
///         }
///     }
///
///     fn is_audio_buffer(&self) -> bool {
///         true
///     }
/// }
///
/// let buffer = PlanarBuffer { channels: vec![vec![0.0; 16]; 2], sample_rate: 44100 };
/// let format = detect(&buffer);
/// assert_eq!(format.sample_type, Some(SampleType::AudioBuffer));
/// assert_eq!(format.channels, Some(2));
/// assert_eq!(format.interleaved, Some(false));
/// ```
pub trait Probe {
    /// Returns the value of a named field, if the object exposes it.
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Returns `true` if the object exposes the named field, whatever its value.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// The object behaves like a planar audio buffer.
    fn is_audio_buffer(&self) -> bool {
        false
    }

    /// The object is a raw byte buffer.
    fn is_byte_buffer(&self) -> bool {
        false
    }

    /// The object is a generic ordered sequence.
    fn is_array(&self) -> bool {
        false
    }

    /// The object is a fixed-size raw memory block.
    fn is_array_buffer(&self) -> bool {
        false
    }

    /// The element kind, if the object is a typed numeric array.
    fn element_type(&self) -> Option<SampleType> {
        None
    }
}

/// Audio-buffer attributes an object must expose as numbers.
const AUDIO_BUFFER_FIELDS: [&str; 4] = ["length", "sampleRate", "numberOfChannels", "duration"];

impl Probe for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn has_field(&self, name: &str) -> bool {
        self.as_object().is_some_and(|obj| obj.contains_key(name))
    }

    fn is_audio_buffer(&self) -> bool {
        self.as_object().is_some_and(|obj| {
            AUDIO_BUFFER_FIELDS
                .iter()
                .all(|name| obj.get(name).is_some_and(Value::is_number))
        })
    }

    fn is_byte_buffer(&self) -> bool {
        matches!(self, Value::Buffer(_))
    }

    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    fn is_array_buffer(&self) -> bool {
        matches!(self, Value::ArrayBuffer(_))
    }

    fn element_type(&self) -> Option<SampleType> {
        match self {
            Value::Typed(array) => Some(array.sample_type()),
            _ => None,
        }
    }
}

impl Probe for TypedArray {
    fn element_type(&self) -> Option<SampleType> {
        Some(self.sample_type())
    }
}

impl Probe for AudioFormat {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "type" => self.sample_type.map(|t| Value::from(t.as_str())),
            "channels" => self.channels.map(Value::from),
            "endianness" => self.endianness.map(|e| Value::from(e.as_str())),
            "interleaved" => self.interleaved.map(Value::from),
            "sampleRate" => self.sample_rate.map(Value::from),
            _ => None,
        }
    }
}

impl<T: Probe> Probe for Option<T> {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_ref().and_then(|inner| inner.field(name))
    }

    fn has_field(&self, name: &str) -> bool {
        self.as_ref().is_some_and(|inner| inner.has_field(name))
    }

    fn is_audio_buffer(&self) -> bool {
        self.as_ref().is_some_and(Probe::is_audio_buffer)
    }

    fn is_byte_buffer(&self) -> bool {
        self.as_ref().is_some_and(Probe::is_byte_buffer)
    }

    fn is_array(&self) -> bool {
        self.as_ref().is_some_and(Probe::is_array)
    }

    fn is_array_buffer(&self) -> bool {
        self.as_ref().is_some_and(Probe::is_array_buffer)
    }

    fn element_type(&self) -> Option<SampleType> {
        self.as_ref().and_then(Probe::element_type)
    }
}

impl<T: Probe + ?Sized> Probe for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }

    fn has_field(&self, name: &str) -> bool {
        (**self).has_field(name)
    }

    fn is_audio_buffer(&self) -> bool {
        (**self).is_audio_buffer()
    }

    fn is_byte_buffer(&self) -> bool {
        (**self).is_byte_buffer()
    }

    fn is_array(&self) -> bool {
        (**self).is_array()
    }

    fn is_array_buffer(&self) -> bool {
        (**self).is_array_buffer()
    }

    fn element_type(&self) -> Option<SampleType> {
        (**self).element_type()
    }
}

/// Primitive sample types that a `Vec` of them reports as a typed array.
pub trait Sample: Copy {
    const SAMPLE_TYPE: SampleType;
}

macro_rules! sample_primitive {
    ($($prim:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sample for $prim {
                const SAMPLE_TYPE: SampleType = SampleType::$variant;
            }
        )*
    };
}

sample_primitive! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}

impl<T: Sample> Probe for Vec<T> {
    fn element_type(&self) -> Option<SampleType> {
        Some(T::SAMPLE_TYPE)
    }
}

type Sniffer = fn(&dyn Probe) -> Option<SampleType>;

// Audio and byte buffers also pass the weaker array checks, and every
// `ndsamples` object is also an `ndarray`, so order matters.
const SNIFFERS: [(&str, Sniffer); 6] = [
    ("audio buffer", sniff_audio_buffer as Sniffer),
    ("byte buffer", sniff_byte_buffer as Sniffer),
    ("array", sniff_array as Sniffer),
    ("array buffer", sniff_array_buffer as Sniffer),
    ("ndarray", sniff_ndarray as Sniffer),
    ("typed array", sniff_typed_array as Sniffer),
];

fn sniff_audio_buffer(obj: &dyn Probe) -> Option<SampleType> {
    obj.is_audio_buffer().then_some(SampleType::AudioBuffer)
}

fn sniff_byte_buffer(obj: &dyn Probe) -> Option<SampleType> {
    obj.is_byte_buffer().then_some(SampleType::Buffer)
}

fn sniff_array(obj: &dyn Probe) -> Option<SampleType> {
    obj.is_array().then_some(SampleType::Array)
}

fn sniff_array_buffer(obj: &dyn Probe) -> Option<SampleType> {
    obj.is_array_buffer().then_some(SampleType::ArrayBuffer)
}

fn sniff_ndarray(obj: &dyn Probe) -> Option<SampleType> {
    if !(obj.has_field("shape") && obj.has_field("dtype")) {
        return None;
    }
    if obj.has_field("format") {
        Some(SampleType::NdSamples)
    } else {
        Some(SampleType::NdArray)
    }
}

fn sniff_typed_array(obj: &dyn Probe) -> Option<SampleType> {
    obj.element_type().filter(SampleType::is_numeric)
}

/// Returns the sample type implied by an object's shape alone.
///
/// Explicit `type` fields are ignored; see [`detect`](crate::detect) for the
/// full detection.
///
/// # Examples
///
/// ```rust
/// use audio_format::{type_of, value, SampleType, Value};
///
/// assert_eq!(type_of(&Value::Array(vec![Value::Null; 100])), Some(SampleType::Array));
/// assert_eq!(type_of(&Value::Buffer(vec![0, 1])), Some(SampleType::Buffer));
/// assert_eq!(type_of(&vec![-1.0f32, 1.0]), Some(SampleType::Float32));
/// assert_eq!(type_of(&value!({ "channels": 2 })), None);
/// ```
#[must_use]
pub fn type_of(obj: &dyn Probe) -> Option<SampleType> {
    SNIFFERS.iter().find_map(|(name, sniff)| {
        let sample_type = sniff(obj)?;
        trace!("object matched the {} shape", name);
        Some(sample_type)
    })
}

/// Infers an [`AudioFormat`] from objects through the [`Probe`] capabilities.
#[derive(Clone, Debug, Default)]
pub struct Detector {
    options: DetectOptions,
}

impl Detector {
    /// Creates a detector with the default alias lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with custom alias lists.
    #[must_use]
    pub fn with_options(options: DetectOptions) -> Self {
        Detector { options }
    }

    #[must_use]
    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Detects the format of an object. Never fails: unknown shapes give a
    /// partial or empty format.
    ///
    /// Null fields count as absent, so a later alias can still supply the
    /// value. Audio buffers are always reported planar, and a planar or
    /// interleaved result always carries a channel count: a buffer that
    /// exposes no channel field gets `channels: Some(2)`.
    #[must_use]
    pub fn detect(&self, obj: &dyn Probe) -> AudioFormat {
        let options = &self.options;
        let mut format = AudioFormat {
            channels: first_field(obj, &options.channel_aliases).and_then(|v| positive(&v)),
            sample_rate: first_field(obj, &options.sample_rate_aliases)
                .and_then(|v| positive(&v))
                .or_else(|| {
                    obj.field("format")
                        .and_then(|format| format.get("sampleRate").and_then(positive))
                }),
            interleaved: first_field(obj, &options.interleaved_aliases)
                .and_then(|v| v.as_bool()),
            sample_type: first_field(obj, &options.type_aliases)
                .and_then(|v| v.as_str().and_then(|s| s.parse().ok())),
            endianness: first_field(obj, &options.endianness_aliases)
                .and_then(|v| v.as_str().and_then(|s| s.parse::<Endianness>().ok())),
        };

        if obj.field("planar").is_some_and(|planar| planar.is_truthy()) {
            format.interleaved = Some(false);
        }
        format.default_channels();

        if format.sample_type.is_none() {
            format.sample_type = type_of(obj);
        }

        format.normalize();
        debug!("detected {:?}", format);
        format
    }
}

/// Returns the first alias with a non-null value.
fn first_field(obj: &dyn Probe, aliases: &[String]) -> Option<Value> {
    aliases
        .iter()
        .find_map(|alias| obj.field(alias).filter(|value| !value.is_null()))
}

fn positive<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    value
        .as_i64()
        .filter(|n| *n > 0)
        .and_then(|n| T::try_from(n).ok())
}
