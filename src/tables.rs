//! Lookup tables shared by the parser, detector and stringifier.
//!
//! The tables are built once on first use and are read-only afterwards, so
//! they can be consulted from any thread.
//!
//! ## Channel names
//!
//! | Count | Name |
//! |-------|------|
//! | 1 | `mono` |
//! | 2 | `stereo` |
//! | 3 | `3-channel` |
//! | 4 | `quad` |
//! | 5 | `5-channel` |
//! | 6 | `5.1` (also accepts `6-channel`) |
//! | 7..=31 | `N-channel` |
//!
//! ## Named sample rates
//!
//! Named rates are resolved through the [`SampleRateTable`] trait so callers can
//! plug in their own vocabulary. [`StandardRates`] is used by default.
//!
//! ```rust
//! use audio_format::tables::{channel_count, channel_name, SampleRateTable, StandardRates};
//!
//! assert_eq!(channel_count("5.1"), Some(6));
//! assert_eq!(channel_name(6), Some("5.1"));
//! assert_eq!(StandardRates.resolve("cd"), Some(44100));
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Highest channel count with a canonical name.
pub const MAX_NAMED_CHANNELS: u16 = 31;

static CHANNEL_COUNTS: Lazy<IndexMap<String, u16>> = Lazy::new(|| {
    let mut table: IndexMap<String, u16> = [
        ("mono", 1),
        ("stereo", 2),
        ("3-channel", 3),
        ("quad", 4),
        ("5-channel", 5),
        ("5.1", 6),
    ]
    .into_iter()
    .map(|(name, count)| (name.to_string(), count))
    .collect();

    for count in 6..=MAX_NAMED_CHANNELS {
        table.insert(format!("{}-channel", count), count);
    }
    table
});

// First name registered for a count wins, so 6 renders as `5.1`.
static CHANNEL_NAMES: Lazy<IndexMap<u16, &'static str>> = Lazy::new(|| {
    let counts: &'static IndexMap<String, u16> = &CHANNEL_COUNTS;
    let mut names = IndexMap::with_capacity(counts.len());
    for (name, count) in counts {
        names.entry(*count).or_insert(name.as_str());
    }
    names
});

static STANDARD_RATES: Lazy<IndexMap<&'static str, u32>> = Lazy::new(|| {
    [
        ("telephone", 8000),
        ("8k", 8000),
        ("11k", 11025),
        ("wideband", 16000),
        ("16k", 16000),
        ("22k", 22050),
        ("32k", 32000),
        ("cd", 44100),
        ("44.1k", 44100),
        ("44k", 44100),
        ("dvd", 48000),
        ("dat", 48000),
        ("broadcast", 48000),
        ("48k", 48000),
        ("88.2k", 88200),
        ("studio", 96000),
        ("96k", 96000),
        ("176.4k", 176400),
        ("192k", 192000),
        ("dxd", 352800),
    ]
    .into_iter()
    .collect()
});

/// Looks up the channel count for a lower-case channel name.
#[must_use]
pub fn channel_count(name: &str) -> Option<u16> {
    CHANNEL_COUNTS.get(name).copied()
}

/// Returns the canonical name for a channel count, if it has one.
#[must_use]
pub fn channel_name(count: u16) -> Option<&'static str> {
    let names: &'static IndexMap<u16, &'static str> = &CHANNEL_NAMES;
    names.get(&count).copied()
}

/// Resolves well-known sample rate names to a rate in Hz.
///
/// Implement this to give the parser a different rate vocabulary; see
/// [`Parser::with_rates`](crate::Parser::with_rates).
///
/// # Examples
///
/// ```rust
/// use audio_format::tables::SampleRateTable;
/// use std::collections::HashMap;
///
/// let mut rates = HashMap::new();
/// rates.insert("film".to_string(), 48000u32);
/// assert_eq!(rates.resolve("film"), Some(48000));
/// ```
pub trait SampleRateTable {
    /// Returns the rate for a lower-case name, or `None` if it is unknown.
    fn resolve(&self, name: &str) -> Option<u32>;
}

/// The built-in table of named sample rates (`cd`, `dvd`, `studio`, `48k`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRates;

impl StandardRates {
    /// Iterates over every `(name, rate)` pair in the table.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        let rates: &'static IndexMap<&'static str, u32> = &STANDARD_RATES;
        rates.iter().map(|(name, rate)| (*name, *rate))
    }
}

impl SampleRateTable for StandardRates {
    fn resolve(&self, name: &str) -> Option<u32> {
        STANDARD_RATES.get(name).copied()
    }
}

impl<S: BuildHasher> SampleRateTable for HashMap<String, u32, S> {
    fn resolve(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

impl<S: BuildHasher> SampleRateTable for IndexMap<String, u32, S> {
    fn resolve(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

impl<T: SampleRateTable + ?Sized> SampleRateTable for &T {
    fn resolve(&self, name: &str) -> Option<u32> {
        (**self).resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_channel_counts() {
        assert_eq!(channel_count("mono"), Some(1));
        assert_eq!(channel_count("stereo"), Some(2));
        assert_eq!(channel_count("3-channel"), Some(3));
        assert_eq!(channel_count("quad"), Some(4));
        assert_eq!(channel_count("5-channel"), Some(5));
        assert_eq!(channel_count("5.1"), Some(6));
        assert_eq!(channel_count("6-channel"), Some(6));
        assert_eq!(channel_count("31-channel"), Some(31));
        assert_eq!(channel_count("32-channel"), None);
        assert_eq!(channel_count("2-channel"), None);
    }

    #[test]
    fn test_reverse_channel_names() {
        assert_eq!(channel_name(1), Some("mono"));
        assert_eq!(channel_name(4), Some("quad"));
        assert_eq!(channel_name(6), Some("5.1"));
        assert_eq!(channel_name(7), Some("7-channel"));
        assert_eq!(channel_name(0), None);
        assert_eq!(channel_name(32), None);
    }

    #[test]
    fn test_every_named_count_reverses() {
        for count in 1..=MAX_NAMED_CHANNELS {
            let name = channel_name(count).unwrap();
            assert_eq!(channel_count(name), Some(count));
        }
    }

    #[test]
    fn test_standard_rates() {
        assert_eq!(StandardRates.resolve("dvd"), Some(48000));
        assert_eq!(StandardRates.resolve("44.1k"), Some(44100));
        assert_eq!(StandardRates.resolve("stereo"), None);
        assert!(StandardRates.iter().all(|(name, _)| name == name.to_lowercase()));
    }

    #[test]
    fn test_custom_rate_tables() {
        let rates: IndexMap<String, u32> = [("film".to_string(), 48000)].into_iter().collect();
        assert_eq!(rates.resolve("film"), Some(48000));
        assert_eq!((&rates).resolve("cd"), None);
    }
}
