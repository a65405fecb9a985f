//! Configuration options for format detection.
//!
//! Objects from different libraries spell the same field differently
//! (`channels`, `numberOfChannels`, `channelCount`, ...). [`DetectOptions`]
//! holds the alias lists the detector probes, in precedence order: the first
//! alias present on an object wins.
//!
//! ## Examples
//!
//! ```rust
//! use audio_format::{detect_with, value, DetectOptions};
//!
//! let obj = value!({ "channels": 1, "numberOfChannels": 2 });
//!
//! // Default precedence: `channels` is probed before `numberOfChannels`
//! let options = DetectOptions::new();
//! assert_eq!(detect_with(&obj, &options).channels, Some(1));
//!
//! // Prefer the Web Audio spelling
//! let options = DetectOptions::new().with_channel_aliases(["numberOfChannels", "channels"]);
//! assert_eq!(detect_with(&obj, &options).channels, Some(2));
//! ```

/// Field alias lists probed by the detector, each in precedence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectOptions {
    pub channel_aliases: Vec<String>,
    pub sample_rate_aliases: Vec<String>,
    pub interleaved_aliases: Vec<String>,
    pub type_aliases: Vec<String>,
    pub endianness_aliases: Vec<String>,
}

fn aliases<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            channel_aliases: aliases(["channel", "channels", "numberOfChannels", "channelCount"]),
            sample_rate_aliases: aliases(["sampleRate", "rate"]),
            interleaved_aliases: aliases(["interleave", "interleaved"]),
            type_aliases: aliases(["type"]),
            endianness_aliases: aliases(["endianness"]),
        }
    }
}

impl DetectOptions {
    /// Creates the default alias lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::DetectOptions;
    ///
    /// let options = DetectOptions::new();
    /// assert_eq!(options.sample_rate_aliases, vec!["sampleRate", "rate"]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_channel_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_aliases = aliases(names);
        self
    }

    #[must_use]
    pub fn with_sample_rate_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_rate_aliases = aliases(names);
        self
    }

    #[must_use]
    pub fn with_interleaved_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interleaved_aliases = aliases(names);
        self
    }

    #[must_use]
    pub fn with_type_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_aliases = aliases(names);
        self
    }

    #[must_use]
    pub fn with_endianness_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endianness_aliases = aliases(names);
        self
    }
}
