//! `sessionfile` is a crate for describing the tracks shown in an IGV
//! workspace and writing that description out as a session file.
//!
//! The crate provides two main points of entry:
//!
//! - Reading track lists and building session documents.
//! - A contract for batch-generating public download links for tracks kept
//!   in a remote file-hosting account.
//!
//! ## Reading track lists and building sessions
//!
//! A track list is line oriented: each non-blank line names one data track,
//! either as a bare URL (the track name is derived from the file name) or as
//! a `name url` pair. Use the [`Reader`] facility to parse a track list from
//! any buffered source via [`Reader::tracks()`](crate::Reader::tracks). Each
//! [`Track`] holds the display name and the direct-download URL of the
//! backing file; Dropbox share links are rewritten from their preview form
//! on the way in (see [`link::direct_download`]).
//!
//! A [`Session`] cannot be instantiated directly. Instead, you should use
//! [`session::Builder`] to supply the genome identifier and the parsed
//! tracks, and then [`session::Builder::try_build()`] to construct the
//! session. [`Session::write_to()`](crate::Session::write_to) assembles the
//! document tree, pretty-prints it, and serializes it as UTF-8 XML in the
//! layout IGV's own exporter uses.
//!
//! Below is a representative example tying the pieces together.
//!
//! ```
//! use sessionfile::session::Builder;
//!
//! let data = b"H3K27ac https://www.dropbox.com/s/abc/H3K27ac.bw?dl=0
//!
//! https://example.com/input.bw";
//! let mut reader = sessionfile::Reader::new(&data[..]);
//!
//! let mut builder = Builder::default().genome("hg38")?;
//! for result in reader.tracks() {
//!     builder = builder.push_track(result?);
//! }
//!
//! let session = builder.try_build()?;
//! assert_eq!(session.tracks().len(), 2);
//!
//! let mut output = Vec::new();
//! session.write_to(&mut output)?;
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Generating download links
//!
//! The [`remote`] module defines the collaborator contract for the hosting
//! service ([`remote::Storage`]) along with batch helpers that keep the
//! best-effort semantics explicit: [`remote::list_all()`] drains a paginated
//! folder listing and reports how far it got, and [`remote::batch_links()`]
//! requests one link per file and carries a result per entry so callers can
//! report failures without aborting the batch. The `dropbox-links` binary
//! implements the contract against the Dropbox HTTP API.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod genome;
pub mod line;
pub mod link;
pub mod reader;
pub mod remote;
pub mod session;
pub mod track;

pub use line::Line;
pub use session::Session;
pub use track::Track;

pub use self::reader::Reader;
