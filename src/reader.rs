//! A track list reader.

use std::io::BufRead;
use std::io::{self};
use std::iter;

use crate::line;
use crate::track::Track;
use crate::Line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A line error.
    Line(line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Line(err) => write!(f, "line error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A track list reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a track list reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"a.bw\thttps://example.com/a.bw\nhttps://example.com/b.bw";
    /// let reader = sessionfile::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::BufRead;
    ///
    /// let data = b"a.bw\thttps://example.com/a.bw\nhttps://example.com/b.bw";
    /// let reader = sessionfile::Reader::new(&data[..]);
    /// let mut lines = reader.into_inner().lines().map(|line| line.unwrap());
    ///
    /// assert_eq!(
    ///     lines.next(),
    ///     Some(String::from("a.bw\thttps://example.com/a.bw"))
    /// );
    /// assert_eq!(lines.next(), Some(String::from("https://example.com/b.bw")));
    /// assert_eq!(lines.next(), None);
    /// ```
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"a.bw\thttps://example.com/a.bw\nhttps://example.com/b.bw";
    /// let mut reader = sessionfile::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 30);
    /// assert_eq!(buffer, "a.bw\thttps://example.com/a.bw");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 24);
    /// assert_eq!(buffer, "https://example.com/b.bw");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::Line;
    ///
    /// let data = b"https://example.com/a.bw\n\nb.bw\thttps://example.com/b.bw";
    /// let mut reader = sessionfile::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Track(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Empty)));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Track(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, None));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = buffer.parse::<Line>().map_err(Error::Line)?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the [`Line`]s in the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"https://example.com/a.bw\n\nhttps://example.com/b.bw";
    /// let mut reader = sessionfile::Reader::new(&data[..]);
    ///
    /// let lines = reader.lines().collect::<Vec<_>>();
    /// assert_eq!(lines.len(), 3);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn lines(&mut self) -> impl Iterator<Item = io::Result<Line>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || {
            buffer.clear();

            match self.read_line_raw(&mut buffer) {
                Ok(0) => None,
                Ok(_) => Some(
                    buffer
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                ),
                Err(e) => Some(Err(e)),
            }
        })
    }

    /// Returns an iterator over the [`Track`]s in the underlying reader.
    ///
    /// Blank lines are skipped; tracks are yielded in input order, with
    /// duplicates preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"https://www.dropbox.com/s/abc/a.bw?dl=0\n\nb.bw\thttps://example.com/b.bw";
    /// let mut reader = sessionfile::Reader::new(&data[..]);
    ///
    /// let tracks = reader
    ///     .tracks()
    ///     .collect::<Result<Vec<_>, _>>()?;
    ///
    /// assert_eq!(tracks.len(), 2);
    /// assert_eq!(tracks[0].name(), "a.bw");
    /// assert_eq!(tracks[1].url(), "https://example.com/b.bw");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn tracks(&mut self) -> impl Iterator<Item = Result<Track, Error>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || loop {
            buffer.clear();

            match self.read_line_raw(&mut buffer) {
                Ok(0) => return None,
                Ok(_) => match buffer.parse::<Line>() {
                    Ok(Line::Empty) => continue,
                    Ok(Line::Track(track)) => return Some(Ok(track)),
                    Err(e) => return Some(Err(Error::Line(e))),
                },
                Err(e) => return Some(Err(Error::Io(e))),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader, trimming the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
