//! A line within a track list.

use std::str::FromStr;

use crate::track;
use crate::track::Track;

/// An error associated with parsing a track list.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid track record.
    InvalidTrack(track::ParseError, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidTrack(err, line) => {
                write!(f, "invalid track: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within a track list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// A line that is empty after trimming whitespace.
    Empty,
    /// A track line.
    Track(Track),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Track(track) => write!(f, "{}", track),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(Self::Empty)
        } else {
            s.parse::<Track>()
                .map(Line::Track)
                .map_err(|e| ParseError::InvalidTrack(e, s.into()))
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_url_only_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "https://www.dropbox.com/s/abc/a.bw?dl=0".parse::<Line>()?;
        assert!(matches!(line, Line::Track(_)));

        if let Line::Track(track) = line {
            assert_eq!(track.name(), "a.bw");
        }

        Ok(())
    }

    #[test]
    pub fn test_named_track_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "input\thttps://example.com/input.bw".parse::<Line>()?;
        assert!(matches!(line, Line::Track(_)));

        if let Line::Track(track) = line {
            assert_eq!(track.name(), "input");
            assert_eq!(track.url(), "https://example.com/input.bw");
        }

        Ok(())
    }

    #[test]
    pub fn test_empty_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "".parse::<Line>()?;
        assert_eq!(line, Line::Empty);

        Ok(())
    }

    #[test]
    pub fn test_whitespace_only_line_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let line = " \t ".parse::<Line>()?;
        assert_eq!(line, Line::Empty);

        Ok(())
    }
}
