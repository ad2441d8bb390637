//! Normalize command: replace ligatures and combining diacritics.

use std::borrow::Cow;

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readindex_core::diacritics;

use super::read_input_file;

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// File to normalize.
    pub file: Utf8PathBuf,
}

#[derive(Debug, Serialize)]
struct NormalizeReport<'a> {
    file: &'a Utf8PathBuf,
    changed: bool,
    text: &'a str,
}

/// Print the file with ligatures split and combining marks composed.
#[instrument(name = "cmd_normalize", skip_all, fields(file = %args.file))]
pub fn cmd_normalize(
    args: NormalizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input_bytes)?;
    let normalized = diacritics::normalize(&content);
    let changed = matches!(normalized, Cow::Owned(_));
    debug!(changed, "normalized input");

    if global_json {
        let report = NormalizeReport {
            file: &args.file,
            changed,
            text: &normalized,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{normalized}");
    }
    Ok(())
}
