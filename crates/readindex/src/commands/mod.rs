//! Command implementations.

use std::sync::Arc;

use anyhow::Context;
use camino::Utf8Path;
use readindex_core::config::{Config, ConfigSources};
use readindex_core::Lexicon;

pub mod index;
pub mod info;
pub mod normalize;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load the lexicon named by the config's resource paths.
///
/// Relative paths resolve against the directory of the config file that was
/// loaded, or `cwd` when none was.
pub fn load_lexicon(
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<Arc<Lexicon>> {
    if config.resources.is_empty() {
        return Ok(Arc::new(Lexicon::default()));
    }
    let base = sources.base_dir().unwrap_or(cwd);
    let paths = config.resources.resolve(base);
    let lexicon = Lexicon::load(&paths).context("failed to load lexicon resources")?;
    Ok(Arc::new(lexicon))
}
