//! Audio Format Notation
//!
//! This module documents the compact format notation accepted by
//! [`parse`](crate::parse) and produced by [`stringify`](crate::stringify).
//!
//! # Overview
//!
//! A format string describes how PCM samples are laid out in memory. It is a
//! list of tokens, each naming one property of the stream:
//!
//! ```text
//! interleaved uint8 le stereo 44100
//! float32 5.1 planar 48000
//! audiobuffer mono cd
//! ```
//!
//! # Separators
//!
//! Tokens are separated by runs of whitespace, or by runs of `,`, `;` and `_`
//! with optional surrounding whitespace. Empty tokens are ignored and matching
//! is case-insensitive:
//!
//! ```text
//! stereo,audiobuffer , 96000
//! stereo;audiobuffer_96000
//! STEREO AudioBuffer 96000
//! ```
//!
//! All three describe the same format.
//!
//! # Tokens
//!
//! | Property | Tokens |
//! |----------|--------|
//! | Layout | `interleaved` (also `interleave`), `planar` |
//! | Channels | `mono`, `stereo`, `3-channel`, `quad`, `5-channel`, `5.1`, `6-channel` .. `31-channel` |
//! | Byte order | `le`, `be` |
//! | Sample type | `uint8`, `uint16`, `uint32`, `int8`, `int16`, `int32`, `float32`, `float64` |
//! | Container | `array`, `arraybuffer`, `buffer`, `audiobuffer`, `ndarray`, `ndsamples` |
//! | Sample rate | a named rate (`cd`, `dvd`, `studio`, `48k`, ...) or digits (`22050`) |
//!
//! A bare number is always a sample rate. Channel counts must be written by
//! name.
//!
//! # Resolution Rules
//!
//! - The first layout token wins; later ones are ignored.
//! - Channel, byte order, type and rate tokens overwrite earlier ones.
//! - A layout token without a channel token implies `stereo`.
//! - `audiobuffer` is always native byte order and planar, whatever other
//!   tokens say.
//!
//! ```rust
//! use audio_format::parse;
//!
//! assert_eq!(parse("planar").unwrap().channels, Some(2));
//! assert_eq!(parse("planar interleaved").unwrap().interleaved, Some(false));
//! assert_eq!(parse("mono quad").unwrap().channels, Some(4));
//! assert_eq!(parse("interleaved audiobuffer").unwrap().interleaved, Some(false));
//! ```
//!
//! # Canonical Output
//!
//! Stringification writes tokens in a fixed order (type, channels, byte order,
//! layout, rate), separated by single spaces. Channel counts use the first name
//! listed above (`5.1` rather than `6-channel`), and rates are written as
//! digits. The layout of an `audiobuffer` is never written.
//!
//! `uint8_clamped` is written as is, but since `_` separates tokens it does
//! not parse back; detect such arrays instead of describing them in text.
