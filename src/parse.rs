//! Format string parsing.
//!
//! A format string is a list of tokens separated by whitespace, commas,
//! semicolons or underscores. Tokens are case-insensitive and may appear in
//! any order:
//!
//! ```rust
//! use audio_format::{parse, Endianness, SampleType};
//!
//! let format = parse("interleaved uint8 le stereo 44100").unwrap();
//! assert_eq!(format.sample_type, Some(SampleType::Uint8));
//! assert_eq!(format.endianness, Some(Endianness::Little));
//! assert_eq!(format.channels, Some(2));
//! assert_eq!(format.interleaved, Some(true));
//! assert_eq!(format.sample_rate, Some(44100));
//!
//! assert_eq!(parse("Stereo, Float32; 48000").unwrap(), parse("48000 float32 stereo").unwrap());
//! ```
//!
//! ## Classification
//!
//! Each token is classified on its own, first match wins:
//!
//! 1. `planar` / `interleaved` (alias `interleave`)
//! 2. channel names (`mono`, `stereo`, `5.1`, `7-channel`, ...)
//! 3. `le` / `be`
//! 4. sample types (`int16`, `float32`, `audiobuffer`, ...)
//! 5. named sample rates (`cd`, `dvd`, `48k`, ...)
//! 6. all-digit sample rates
//!
//! Anything else fails with [`Error::UnrecognizedToken`](crate::Error::UnrecognizedToken).

use crate::tables::{self, SampleRateTable, StandardRates};
use crate::{AudioFormat, Endianness, Error, Result, SampleType};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[,;_]+\s*|\s+").expect("delimiter pattern is valid"));

const INTERLEAVED_ALIASES: [&str; 2] = ["interleaved", "interleave"];

/// A classified format token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// `planar` or `interleaved`; carries `true` for interleaved.
    Interleaving(bool),
    Channels(u16),
    Endianness(Endianness),
    SampleType(SampleType),
    SampleRate(u32),
}

/// Splits a format string into lower-cased tokens, dropping empty ones.
///
/// # Examples
///
/// ```rust
/// use audio_format::parse::tokenize;
///
/// let tokens: Vec<_> = tokenize(" Stereo;audiobuffer_96000 ").collect();
/// assert_eq!(tokens, vec!["stereo", "audiobuffer", "96000"]);
/// ```
pub fn tokenize(input: &str) -> impl Iterator<Item = String> + '_ {
    DELIMITER
        .split(input)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// The format string parser.
///
/// Holds the named sample rate table used for rate tokens. [`crate::parse`]
/// uses [`StandardRates`]; build a `Parser` to resolve other names.
///
/// # Examples
///
/// ```rust
/// use audio_format::Parser;
/// use std::collections::HashMap;
///
/// let mut rates = HashMap::new();
/// rates.insert("film".to_string(), 48000u32);
///
/// let parser = Parser::with_rates(&rates);
/// assert_eq!(parser.parse("mono film").unwrap().sample_rate, Some(48000));
/// assert!(parser.parse("mono cd").is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Parser<'r> {
    rates: &'r dyn SampleRateTable,
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Parser {
            rates: &StandardRates,
        }
    }
}

impl Parser<'static> {
    /// Creates a parser resolving named rates through [`StandardRates`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'r> Parser<'r> {
    /// Creates a parser resolving named rates through `rates`.
    #[must_use]
    pub fn with_rates(rates: &'r dyn SampleRateTable) -> Self {
        Parser { rates }
    }

    /// Classifies a single lower-case token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedToken`] if the token matches no category.
    pub fn classify(&self, token: &str) -> Result<Token> {
        if token == "planar" {
            return Ok(Token::Interleaving(false));
        }
        if INTERLEAVED_ALIASES.contains(&token) {
            return Ok(Token::Interleaving(true));
        }
        if let Some(count) = tables::channel_count(token) {
            return Ok(Token::Channels(count));
        }
        if let Ok(endianness) = token.parse::<Endianness>() {
            return Ok(Token::Endianness(endianness));
        }
        if let Ok(sample_type) = token.parse::<SampleType>() {
            return Ok(Token::SampleType(sample_type));
        }
        if let Some(rate) = self.rates.resolve(token) {
            return Ok(Token::SampleRate(rate));
        }
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return token
                .parse::<u32>()
                .map(Token::SampleRate)
                .map_err(|_| Error::unrecognized_token(token));
        }
        Err(Error::unrecognized_token(token))
    }

    /// Parses a format string.
    ///
    /// The first `planar`/`interleaved` token wins; later channel, type and
    /// rate tokens overwrite earlier ones. An `audiobuffer` type forces native
    /// endianness and planar layout wherever it appears in the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedToken`] for the first token that matches
    /// no category.
    pub fn parse(&self, input: &str) -> Result<AudioFormat> {
        let mut format = AudioFormat::new();

        for token in tokenize(input) {
            let classified = self.classify(&token)?;
            trace!("format token `{}` classified as {:?}", token, classified);
            apply(&mut format, classified);
        }

        format.normalize();
        debug!("parsed `{}` into {:?}", input, format);
        Ok(format)
    }
}

fn apply(format: &mut AudioFormat, token: Token) {
    match token {
        Token::Interleaving(interleaved) => {
            if format.interleaved.is_none() {
                format.interleaved = Some(interleaved);
                format.default_channels();
            }
        }
        Token::Channels(count) => format.channels = Some(count),
        Token::Endianness(endianness) => format.endianness = Some(endianness),
        Token::SampleType(sample_type) => format.sample_type = Some(sample_type),
        Token::SampleRate(rate) => format.sample_rate = Some(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_delimiters() {
        let tokens: Vec<_> = tokenize("stereo,audiobuffer , 96000").collect();
        assert_eq!(tokens, vec!["stereo", "audiobuffer", "96000"]);

        let tokens: Vec<_> = tokenize("a ,; b\t\nC").collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);

        assert_eq!(tokenize("   ").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_classify_precedence() {
        let parser = Parser::new();
        assert_eq!(parser.classify("planar").unwrap(), Token::Interleaving(false));
        assert_eq!(parser.classify("interleave").unwrap(), Token::Interleaving(true));
        assert_eq!(parser.classify("5.1").unwrap(), Token::Channels(6));
        assert_eq!(parser.classify("be").unwrap(), Token::Endianness(Endianness::Big));
        assert_eq!(
            parser.classify("ndsamples").unwrap(),
            Token::SampleType(SampleType::NdSamples)
        );
        assert_eq!(parser.classify("cd").unwrap(), Token::SampleRate(44100));
        assert_eq!(parser.classify("22050").unwrap(), Token::SampleRate(22050));
    }

    #[test]
    fn test_numeric_token_is_always_a_rate() {
        let parser = Parser::new();
        assert_eq!(parser.classify("2").unwrap(), Token::SampleRate(2));
    }

    #[test]
    fn test_overflowing_rate_is_unrecognized() {
        let err = Parser::new().classify("99999999999").unwrap_err();
        assert_eq!(err.token(), "99999999999");
    }

    #[test]
    fn test_first_interleaving_wins() {
        let format = Parser::new().parse("planar interleaved").unwrap();
        assert_eq!(format.interleaved, Some(false));

        let format = Parser::new().parse("interleaved planar").unwrap();
        assert_eq!(format.interleaved, Some(true));
    }

    #[test]
    fn test_last_channel_token_wins() {
        let format = Parser::new().parse("mono quad").unwrap();
        assert_eq!(format.channels, Some(4));

        let format = Parser::new().parse("planar mono").unwrap();
        assert_eq!(format.channels, Some(1));
    }

    #[test]
    fn test_audiobuffer_overrides_later_tokens() {
        let format = Parser::new().parse("audiobuffer interleaved be").unwrap();
        assert_eq!(format.interleaved, Some(false));
        assert_eq!(format.endianness, Some(Endianness::native()));
        assert_eq!(format.channels, Some(2));
    }
}
