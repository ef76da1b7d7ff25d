//! The remote file-hosting collaborator contract.
//!
//! The hosting service is treated as an opaque collaborator with two
//! capabilities: list the entries under a folder (paginated) and create or
//! fetch a public link for a file. Both are expressed by the [`Storage`]
//! trait so the batch helpers here can be exercised against a test double.
//!
//! The helpers keep the best-effort semantics explicit rather than
//! swallowing failures: [`list_all`] drains pagination and reports how far
//! it got via [`Listing`], and [`batch_links`] carries one result per
//! entry via [`LinkOutcome`] so a failed file never aborts the rest of the
//! batch.

use crate::track::Track;

/// A single entry beneath a listed folder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// The canonical path used for subsequent API calls.
    path: String,

    /// The display base name.
    name: String,

    /// Whether the entry is a file (as opposed to a folder).
    file: bool,
}

impl Entry {
    /// Creates a new entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionfile::remote::Entry;
    ///
    /// let entry = Entry::new("/project/a.bw", "a.bw", true);
    ///
    /// assert_eq!(entry.path(), "/project/a.bw");
    /// assert_eq!(entry.name(), "a.bw");
    /// assert!(entry.is_file());
    /// ```
    pub fn new(path: impl Into<String>, name: impl Into<String>, file: bool) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            file,
        }
    }

    /// Returns the canonical path for the entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the display base name for the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the entry is a file.
    pub fn is_file(&self) -> bool {
        self.file
    }
}

/// One page of a folder listing.
#[derive(Clone, Debug)]
pub struct Page {
    /// The entries in this page.
    entries: Vec<Entry>,

    /// The continuation cursor for the next page.
    cursor: String,

    /// Whether more pages remain.
    has_more: bool,
}

impl Page {
    /// Creates a new page.
    pub fn new(entries: Vec<Entry>, cursor: impl Into<String>, has_more: bool) -> Self {
        Self {
            entries,
            cursor: cursor.into(),
            has_more,
        }
    }

    /// Returns the entries in this page.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns whether more pages remain.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Consumes `self`, returning the entries, the continuation cursor,
    /// and whether more pages remain.
    pub fn into_parts(self) -> (Vec<Entry>, String, bool) {
        (self.entries, self.cursor, self.has_more)
    }
}

/// A remote file-hosting service.
///
/// Either call may fail per invocation; the batch helpers decide which
/// failures abort and which are carried per item.
pub trait Storage {
    /// The provider's error type.
    type Error: std::error::Error;

    /// Lists the first page of entries under `folder`.
    fn list_folder(&self, folder: &str) -> Result<Page, Self::Error>;

    /// Lists the next page of a listing, given its continuation `cursor`.
    fn list_folder_continue(&self, cursor: &str) -> Result<Page, Self::Error>;

    /// Creates a public shared link for the file at `path`, or returns the
    /// existing link if one has already been created.
    fn shared_link(&self, path: &str) -> Result<String, Self::Error>;
}

/// The result of draining a paginated folder listing.
///
/// `entries` holds everything listed before the first failure (all pages,
/// when `error` is `None`).
#[derive(Debug)]
pub struct Listing<E> {
    /// The entries listed before the first failure.
    entries: Vec<Entry>,

    /// The error that cut the listing short, if any.
    error: Option<E>,
}

impl<E> Listing<E> {
    /// Returns the entries listed before the first failure.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the error that cut the listing short, if any.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Consumes `self`, returning the entries and the terminating error.
    pub fn into_parts(self) -> (Vec<Entry>, Option<E>) {
        (self.entries, self.error)
    }
}

/// Drains every page of `folder` from `storage`, best effort.
///
/// A failure on the initial call or on any continuation ends the drain;
/// the entries gathered up to that point are returned alongside the error.
pub fn list_all<S>(storage: &S, folder: &str) -> Listing<S::Error>
where
    S: Storage,
{
    let mut entries = Vec::new();

    let mut page = match storage.list_folder(folder) {
        Ok(page) => page,
        Err(e) => {
            return Listing {
                entries,
                error: Some(e),
            }
        }
    };

    loop {
        let (page_entries, cursor, has_more) = page.into_parts();
        entries.extend(page_entries);

        if !has_more {
            return Listing {
                entries,
                error: None,
            };
        }

        page = match storage.list_folder_continue(&cursor) {
            Ok(next) => next,
            Err(e) => {
                return Listing {
                    entries,
                    error: Some(e),
                }
            }
        };
    }
}

/// The outcome of one shared-link request.
#[derive(Debug)]
pub struct LinkOutcome<E> {
    /// The entry the link was requested for.
    entry: Entry,

    /// The direct-download track on success, the provider's error
    /// otherwise.
    result: Result<Track, E>,
}

impl<E> LinkOutcome<E> {
    /// Returns the entry the link was requested for.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Returns the outcome for the entry.
    pub fn result(&self) -> Result<&Track, &E> {
        self.result.as_ref()
    }

    /// Consumes `self`, returning the entry and its outcome.
    pub fn into_parts(self) -> (Entry, Result<Track, E>) {
        (self.entry, self.result)
    }
}

/// Requests a shared link for every file entry, one at a time.
///
/// Folder entries are skipped. A successful request yields a [`Track`]
/// named after the entry, with the returned link rewritten to its
/// direct-download form. A failed request is recorded in that entry's
/// outcome and the batch continues.
pub fn batch_links<S>(
    storage: &S,
    entries: impl IntoIterator<Item = Entry>,
) -> Vec<LinkOutcome<S::Error>>
where
    S: Storage,
{
    entries
        .into_iter()
        .filter(Entry::is_file)
        .map(|entry| {
            let result = storage
                .shared_link(entry.path())
                .map(|url| Track::new(entry.name(), &url));

            LinkOutcome { entry, result }
        })
        .collect()
}
