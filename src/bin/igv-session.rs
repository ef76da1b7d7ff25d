//! A binary to generate an IGV session XML file from a track list.
//!
//! ```shell
//! cargo run --bin=igv-session --features=binaries -- --input hs_links.txt --genome hg38
//! ```
//!
//! The input is line oriented: each non-blank line is either a bare URL
//! (the track name is derived from the file name) or a `name url` pair,
//! such as the records written by `dropbox-links`. Dropbox share links are
//! rewritten to their direct-download form on the way in.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::InfoLevel;
use clap_verbosity_flag::Verbosity;
use sessionfile::session;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Generates an IGV session XML file from a track list.
#[derive(Parser)]
struct Args {
    /// Input file: one URL per line, or `name url` pairs.
    #[arg(short, long)]
    input: PathBuf,

    /// Output session XML file.
    #[arg(short, long, default_value = "igv_session.xml")]
    output: PathBuf,

    /// Reference genome (e.g., `hg38`, `mm10`).
    #[arg(short, long, default_value = "hg38")]
    genome: String,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn generate(args: &Args) -> Result<()> {
    // A missing or unreadable input file is fatal, and must fail before
    // the output file is created.
    let input = File::open(&args.input)
        .with_context(|| format!("opening input file `{}`", args.input.display()))?;
    let mut reader = sessionfile::Reader::new(BufReader::new(input));

    let mut builder = session::Builder::default()
        .genome(args.genome.as_str())
        .context("setting the session genome")?;

    for result in reader.tracks() {
        let track = result.context("reading the track list")?;
        info!("track `{}` -> {}", track.name(), track.url());
        builder = builder.push_track(track);
    }

    let session = builder.try_build().context("building the session")?;
    let count = session.tracks().len();

    let output = File::create(&args.output)
        .with_context(|| format!("creating output file `{}`", args.output.display()))?;
    session
        .write_to(output)
        .context("writing the session document")?;

    println!(
        "IGV session saved to {} ({} data tracks)",
        args.output.display(),
        count
    );

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

    generate(&args)
}
