//! A data track backed by a hosted file.

use std::str::FromStr;

use crate::link;

/// An error associated with parsing a track.
#[derive(Debug)]
pub enum ParseError {
    /// The line contained no fields.
    Empty,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no fields in track line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A single data track: a display name and the URL of the backing file.
///
/// Tracks are immutable once created. The stored URL is always in
/// direct-download form (see [`link::direct_download`]); the name is either
/// supplied by the caller or derived from the URL's file name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Track {
    /// The display name.
    name: String,

    /// The direct-download URL of the backing file.
    url: String,
}

impl Track {
    /// Creates a track from a name and a URL.
    ///
    /// The name is used verbatim; the URL is rewritten to its
    /// direct-download form.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::Track;
    ///
    /// let track = Track::new("H3K27ac", "https://www.dropbox.com/s/abc/a.bw?dl=0");
    ///
    /// assert_eq!(track.name(), "H3K27ac");
    /// assert_eq!(track.url(), "https://www.dropbox.com/s/abc/a.bw?dl=1");
    /// ```
    pub fn new(name: impl Into<String>, url: &str) -> Self {
        Self {
            name: name.into(),
            url: link::direct_download(url),
        }
    }

    /// Creates a track from a URL alone, deriving the name from the URL's
    /// trailing path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::Track;
    ///
    /// let track = Track::from_url("https://www.dropbox.com/s/abc/a.bw?dl=0");
    ///
    /// assert_eq!(track.name(), "a.bw");
    /// assert_eq!(track.url(), "https://www.dropbox.com/s/abc/a.bw?dl=1");
    /// ```
    pub fn from_url(url: &str) -> Self {
        let url = link::direct_download(url);
        let name = link::file_name(&url).to_string();

        Self { name, url }
    }

    /// Returns the display name for the track.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the direct-download URL for the track.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FromStr for Track {
    type Err = ParseError;

    /// Parses a track from one line of a track list.
    ///
    /// A single whitespace-separated field is taken as a URL and the name is
    /// derived from it; with two or more fields, the first is the name and
    /// the second is the URL. Fields beyond the second are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let first = fields.next().ok_or(ParseError::Empty)?;

        match fields.next() {
            Some(url) => Ok(Self::new(first, url)),
            None => Ok(Self::from_url(first)),
        }
    }
}

impl std::fmt::Display for Track {
    /// Formats the track as a `name<TAB>url` record, the line format used
    /// by track list files.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.name, self.url)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_single_field_line() -> Result<(), Box<dyn std::error::Error>> {
        let track = "https://www.dropbox.com/s/abc/H3K27ac.bw?dl=0".parse::<Track>()?;

        assert_eq!(track.name(), "H3K27ac.bw");
        assert_eq!(track.url(), "https://www.dropbox.com/s/abc/H3K27ac.bw?dl=1");

        Ok(())
    }

    #[test]
    pub fn test_two_field_line() -> Result<(), Box<dyn std::error::Error>> {
        let track = "input\thttps://example.com/tracks/input.bw".parse::<Track>()?;

        assert_eq!(track.name(), "input");
        assert_eq!(track.url(), "https://example.com/tracks/input.bw");

        Ok(())
    }

    #[test]
    pub fn test_name_field_is_used_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let track = "not-a-filename.txt https://example.com/a.bw".parse::<Track>()?;

        assert_eq!(track.name(), "not-a-filename.txt");

        Ok(())
    }

    #[test]
    pub fn test_fields_beyond_the_second_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let track = "a.bw https://example.com/a.bw trailing comment".parse::<Track>()?;

        assert_eq!(track.name(), "a.bw");
        assert_eq!(track.url(), "https://example.com/a.bw");

        Ok(())
    }

    #[test]
    pub fn test_blank_line() {
        let err = "   ".parse::<Track>().unwrap_err();
        assert_eq!(err.to_string(), "no fields in track line");
    }

    #[test]
    pub fn test_display_is_the_record_format() {
        let track = Track::new("a.bw", "https://example.com/a.bw");
        assert_eq!(track.to_string(), "a.bw\thttps://example.com/a.bw");
    }
}
