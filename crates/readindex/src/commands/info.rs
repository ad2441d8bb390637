//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use readindex_core::config::{Config, ConfigSources, ResourcePaths};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    language: String,
    numerals: String,
    stemmer: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    resources: Vec<String>,
}

/// Names and paths of the configured resource files.
fn resource_entries(resources: &ResourcePaths) -> Vec<String> {
    [
        ("known-words", &resources.known_words),
        ("custom-words", &resources.custom_words),
        ("proper-nouns", &resources.proper_nouns),
        ("personal-names", &resources.personal_names),
        ("stop-words", &resources.stop_words),
        ("wordy-phrases", &resources.wordy_phrases),
        ("copyright-phrases", &resources.copyright_phrases),
        ("citation-phrases", &resources.citation_phrases),
        ("excluded-phrases", &resources.excluded_phrases),
    ]
    .into_iter()
    .filter_map(|(name, path)| path.as_ref().map(|p| format!("{name}: {p}")))
    .collect()
}

/// Render a kebab-case serde enum the way config files spell it.
fn config_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(
                config
                    .max_input_bytes
                    .unwrap_or(readindex_core::DEFAULT_MAX_INPUT_BYTES),
            )
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes,
            language: config.language.to_string(),
            numerals: config_name(&config.numerals),
            stemmer: config_name(&config.stemmer),
            resources: resource_entries(&config.resources),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    let config = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), config.log_level);
    if let Some(ref dir) = config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match config.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Indexing".bold().underline());
    println!("{}: {}", "Language".dimmed(), config.language);
    println!("{}: {}", "Numerals".dimmed(), config.numerals);
    println!("{}: {}", "Stemmer".dimmed(), config.stemmer);
    if config.resources.is_empty() {
        println!("{}: {}", "Resources".dimmed(), "built-in only".dimmed());
    } else {
        for entry in &config.resources {
            println!("{}: {}", "Resource".dimmed(), entry);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &Config::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &Config::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn test_config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.language, "english");
        assert_eq!(info.numerals, "whole-numeral-is-one-syllable");
        assert_eq!(info.stemmer, "none");
        assert_eq!(info.max_input_bytes, Some(readindex_core::DEFAULT_MAX_INPUT_BYTES));
        assert!(info.resources.is_empty());
    }

    #[test]
    fn test_config_info_lists_resources() {
        let mut config = Config::default();
        config.disable_input_limit = true;
        config.resources.stop_words = Some(Utf8PathBuf::from("stop.txt"));
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.max_input_bytes, None);
        assert_eq!(info.resources, ["stop-words: stop.txt"]);
    }
}
