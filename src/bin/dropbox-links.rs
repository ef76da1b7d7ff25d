//! A binary to batch-generate Dropbox direct-download links for every file
//! in a folder.
//!
//! ```shell
//! cargo run --bin=dropbox-links --features=binaries -- \
//!     --key YOUR_ACCESS_TOKEN \
//!     --folder /CUTnTag/hs \
//!     --output hs_links.txt
//! ```
//!
//! Each successfully linked file produces one `name<TAB>url` record, ready
//! to be fed to `igv-session`. Files the service refuses to link are
//! reported and skipped; the run always completes and saves whatever links
//! were obtained.

use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::InfoLevel;
use clap_verbosity_flag::Verbosity;
use serde::Deserialize;
use serde::Serialize;
use sessionfile::remote;
use sessionfile::remote::Entry;
use sessionfile::remote::Page;
use sessionfile::remote::Storage;
use tracing::error;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The endpoint for listing a folder.
const LIST_FOLDER_URL: &str = "https://api.dropboxapi.com/2/files/list_folder";

/// The endpoint for continuing a folder listing.
const LIST_FOLDER_CONTINUE_URL: &str = "https://api.dropboxapi.com/2/files/list_folder/continue";

/// The endpoint for creating a shared link.
const CREATE_SHARED_LINK_URL: &str =
    "https://api.dropboxapi.com/2/sharing/create_shared_link_with_settings";

/// The endpoint for listing existing shared links.
const LIST_SHARED_LINKS_URL: &str = "https://api.dropboxapi.com/2/sharing/list_shared_links";

/// The error summary marker returned when a shared link already exists.
const ALREADY_EXISTS_MARKER: &str = "shared_link_already_exists";

/// The metadata tag marking a file entry.
const FILE_TAG: &str = "file";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error returned by the Dropbox client.
#[derive(Debug)]
enum Error {
    /// A transport-level error.
    Http(reqwest::Error),

    /// A failure reported by the API, carrying its error summary.
    Api(String),

    /// The service reported an existing shared link but returned none.
    NoLink,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Http(err) => write!(f, "http error: {err}"),
            Error::Api(summary) => write!(f, "api error: {summary}"),
            Error::NoLink => write!(f, "no shared link returned for an already-shared path"),
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////////////////////////////////////////////////
// Wire types
////////////////////////////////////////////////////////////////////////////////////////

/// The request body for a folder listing.
#[derive(Serialize)]
struct ListFolderRequest<'a> {
    /// The folder path.
    path: &'a str,
    /// Whether to descend into subfolders.
    recursive: bool,
}

/// The request body for continuing a folder listing.
#[derive(Serialize)]
struct ListFolderContinueRequest<'a> {
    /// The continuation cursor from the previous page.
    cursor: &'a str,
}

/// A request body addressing a single path.
#[derive(Serialize)]
struct PathRequest<'a> {
    /// The file path.
    path: &'a str,
}

/// One entry of a folder listing.
#[derive(Deserialize)]
struct Metadata {
    /// The entry kind (`file`, `folder`, ...).
    #[serde(rename = ".tag")]
    tag: String,
    /// The base name.
    name: String,
    /// The lowercased canonical path.
    path_lower: String,
}

/// The response body of a folder listing.
#[derive(Deserialize)]
struct ListFolderResponse {
    /// The entries in this page.
    entries: Vec<Metadata>,
    /// The continuation cursor for the next page.
    cursor: String,
    /// Whether more pages remain.
    has_more: bool,
}

/// A shared link.
#[derive(Deserialize)]
struct SharedLink {
    /// The public URL.
    url: String,
}

/// The response body of a shared-links listing.
#[derive(Deserialize)]
struct ListSharedLinksResponse {
    /// The links already created for the path.
    links: Vec<SharedLink>,
}

/// The error body returned on a failed call.
#[derive(Deserialize)]
struct ApiErrorResponse {
    /// A human-readable summary, e.g.
    /// `shared_link_already_exists/metadata/`.
    error_summary: String,
}

////////////////////////////////////////////////////////////////////////////////////////
// Client
////////////////////////////////////////////////////////////////////////////////////////

/// A minimal client for the subset of the Dropbox API the batch needs.
struct Client {
    /// The OAuth bearer token.
    token: String,

    /// The underlying HTTP client.
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client from an access token.
    fn new(token: String) -> Self {
        Self {
            token,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// POSTs `request` to `url` and deserializes a successful response.
    ///
    /// Failed calls surface the service's error summary as [`Error::Api`].
    fn call<T, R>(&self, url: &str, request: &T) -> Result<R, Error>
    where
        T: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .map_err(Error::Http)?;

        if response.status().is_success() {
            response.json::<R>().map_err(Error::Http)
        } else {
            let summary = response
                .json::<ApiErrorResponse>()
                .map(|body| body.error_summary)
                .unwrap_or_else(|err| err.to_string());
            Err(Error::Api(summary))
        }
    }
}

/// Converts a listing response into a contract [`Page`].
fn page_from(response: ListFolderResponse) -> Page {
    let entries = response
        .entries
        .into_iter()
        .map(|metadata| Entry::new(metadata.path_lower, metadata.name, metadata.tag == FILE_TAG))
        .collect();

    Page::new(entries, response.cursor, response.has_more)
}

impl Storage for Client {
    type Error = Error;

    fn list_folder(&self, folder: &str) -> Result<Page, Error> {
        let response: ListFolderResponse = self.call(
            LIST_FOLDER_URL,
            &ListFolderRequest {
                path: folder,
                recursive: false,
            },
        )?;

        Ok(page_from(response))
    }

    fn list_folder_continue(&self, cursor: &str) -> Result<Page, Error> {
        let response: ListFolderResponse =
            self.call(LIST_FOLDER_CONTINUE_URL, &ListFolderContinueRequest { cursor })?;

        Ok(page_from(response))
    }

    fn shared_link(&self, path: &str) -> Result<String, Error> {
        match self.call::<_, SharedLink>(CREATE_SHARED_LINK_URL, &PathRequest { path }) {
            Ok(link) => Ok(link.url),
            Err(Error::Api(summary)) if summary.contains(ALREADY_EXISTS_MARKER) => {
                let existing: ListSharedLinksResponse =
                    self.call(LIST_SHARED_LINKS_URL, &PathRequest { path })?;

                existing
                    .links
                    .into_iter()
                    .next()
                    .map(|link| link.url)
                    .ok_or(Error::NoLink)
            }
            Err(err) => Err(err),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Batch-generates Dropbox direct-download links for every file in a
/// folder.
#[derive(Parser)]
struct Args {
    /// Dropbox API access token.
    #[arg(short, long)]
    key: String,

    /// Dropbox folder path (e.g. `/Project/data`).
    #[arg(short, long)]
    folder: String,

    /// Output file for the `name<TAB>url` records.
    #[arg(short, long, default_value = "dropbox_links.txt")]
    output: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn run(args: &Args) -> Result<()> {
    let client = Client::new(args.key.clone());

    let (entries, listing_error) = remote::list_all(&client, &args.folder).into_parts();
    if let Some(err) = listing_error {
        // Keep whatever was listed before the failure.
        error!("listing folder `{}`: {err}", args.folder);
    }

    let files = entries
        .into_iter()
        .filter(Entry::is_file)
        .collect::<Vec<_>>();
    println!("Found {} files in '{}'", files.len(), args.folder);

    let mut links = Vec::new();
    for outcome in remote::batch_links(&client, files) {
        let (entry, result) = outcome.into_parts();
        match result {
            Ok(track) => {
                info!("{} -> {}", entry.path(), track.url());
                links.push(track);
            }
            Err(err) => warn!("cannot create or retrieve link for {}: {err}", entry.path()),
        }
    }

    let mut output = File::create(&args.output)
        .with_context(|| format!("creating output file `{}`", args.output.display()))?;
    for track in &links {
        writeln!(output, "{track}").context("writing link record")?;
    }

    println!("Saved {} links to '{}'", links.len(), args.output.display());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    run(&args)
}
