//! A builder for a [`Session`].

use crate::genome::Assembly;
use crate::session::Session;
use crate::track::Track;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No genome was provided to the [`Builder`].
    Genome,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Genome => write!(f, "genome"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times
/// to the [`Builder`].
#[derive(Debug)]
pub enum MultipleError {
    /// The genome field was provided multiple times to the [`Builder`].
    Genome,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Genome => write!(f, "genome"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the
    /// [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`]
    /// more than once.
    Multiple(MultipleError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Session`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The genome identifier, exactly as provided.
    genome: Option<String>,

    /// The data tracks, in input order.
    tracks: Vec<Track>,
}

impl Builder {
    /// Sets the genome identifier for the [`Builder`].
    ///
    /// The identifier is kept verbatim for the session itself; the
    /// gene-track profile is resolved from it at build time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::session::Builder;
    ///
    /// let builder = Builder::default().genome("hg38")?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn genome(mut self, identifier: impl Into<String>) -> Result<Self> {
        if self.genome.is_some() {
            return Err(Error::Multiple(MultipleError::Genome));
        }

        self.genome = Some(identifier.into());
        Ok(self)
    }

    /// Pushes a data [`Track`] into the [`Builder`].
    ///
    /// Tracks end up in the session in the order they are pushed;
    /// duplicates are legal and preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::session::Builder;
    /// use sessionfile::Track;
    ///
    /// let builder = Builder::default()
    ///     .push_track(Track::from_url("https://example.com/a.bw"))
    ///     .push_track(Track::from_url("https://example.com/b.bw"));
    /// ```
    pub fn push_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Consumes `self` to attempt to build a [`Session`].
    ///
    /// A session with no data tracks is legal: the fixed skeleton and the
    /// feature panel are emitted regardless.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::session::Builder;
    ///
    /// let session = Builder::default()
    ///     .genome("hg38")?
    ///     .push_track("a.bw\thttps://example.com/a.bw".parse()?)
    ///     .try_build()?;
    ///
    /// assert_eq!(session.genome(), "hg38");
    /// assert_eq!(session.tracks().len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Session> {
        let genome = self.genome.ok_or(Error::Missing(MissingError::Genome))?;
        let profile = Assembly::new(&genome).profile();

        Ok(Session {
            genome,
            profile,
            tracks: self.tracks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_to_produce_a_session_when_no_genome_is_provided() {
        let err = Builder::default().try_build().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: genome");
    }

    #[test]
    fn it_fails_when_the_genome_field_is_provided_more_than_once()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .genome("hg38")?
            .genome("mm10")
            .unwrap_err();

        assert_eq!(err.to_string(), "singular field set multiple times: genome");

        Ok(())
    }

    #[test]
    fn it_builds_a_session_with_no_tracks() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let session = Builder::default().genome("hg38")?.try_build()?;
        assert!(session.tracks().is_empty());

        Ok(())
    }
}
