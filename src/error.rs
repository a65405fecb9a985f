//! Error types for audio format parsing.
//!
//! Only the token parser can fail. Detection and stringification are total:
//! unknown shapes produce partial formats and unknown fields are simply left out.
//!
//! ## Examples
//!
//! ```rust
//! use audio_format::{parse, Error};
//!
//! let result = parse("stereo not-a-real-token");
//! assert!(matches!(result, Err(Error::UnrecognizedToken { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("not-a-real-token"));
//! }
//! ```

use thiserror::Error;

/// Represents all errors that can occur while parsing a format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token matched none of the known categories (channel name, endianness,
    /// sample type, named rate, numeric rate, planar/interleaved).
    #[error("unrecognized format token `{token}`")]
    UnrecognizedToken { token: String },
}

impl Error {
    /// Creates an unrecognized token error carrying the offending token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::Error;
    ///
    /// let err = Error::unrecognized_token("surround");
    /// assert_eq!(err.to_string(), "unrecognized format token `surround`");
    /// ```
    pub fn unrecognized_token(token: &str) -> Self {
        Error::UnrecognizedToken {
            token: token.to_string(),
        }
    }

    /// Returns the token that caused the error.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Error::UnrecognizedToken { token } => token,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
