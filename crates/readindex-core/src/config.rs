//! Configuration loading and discovery.
//!
//! Configuration is layered with figment:
//! 1. Built-in defaults
//! 2. User config from the platform config directory
//! 3. Project config found by walking up from the current directory
//! 4. Explicit files (`--config`)
//! 5. `READINDEX_` environment variables
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `readindex.<ext>` in current directory or any parent
//! - `.readindex.<ext>` in current directory or any parent
//! - `~/.config/readindex/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! Nested keys are reachable from the environment with a double underscore:
//! `READINDEX_INDEXING__AGGRESSIVE_EXCLUSION=true`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use readindex_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::document::IndexingOptions;
use crate::error::{ConfigError, ConfigResult};
use crate::stemming::StemmerKind;
use crate::syllables::{Language, NumeralSyllabication};

/// Word list and phrase files that make up a [`Lexicon`](crate::Lexicon).
///
/// Relative paths are resolved against the directory of the config file
/// that named them (see [`ResourcePaths::resolve`]).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResourcePaths {
    /// Dictionary of correctly spelled words.
    pub known_words: Option<Utf8PathBuf>,
    /// User additions to the dictionary.
    pub custom_words: Option<Utf8PathBuf>,
    /// Words that are always proper nouns.
    pub proper_nouns: Option<Utf8PathBuf>,
    /// First and last names.
    pub personal_names: Option<Utf8PathBuf>,
    /// Stop words (replaces the built-in list).
    pub stop_words: Option<Utf8PathBuf>,
    /// Wordy or misused phrases with replacements.
    pub wordy_phrases: Option<Utf8PathBuf>,
    /// Copyright notice phrases (extend the built-in list).
    pub copyright_phrases: Option<Utf8PathBuf>,
    /// Citation section headers (extend the built-in list).
    pub citation_phrases: Option<Utf8PathBuf>,
    /// Phrases whose words are excluded from the counts.
    pub excluded_phrases: Option<Utf8PathBuf>,
}

impl ResourcePaths {
    /// Resolve relative paths against `base`.
    pub fn resolve(&self, base: &Utf8Path) -> Self {
        let join = |path: &Option<Utf8PathBuf>| {
            path.as_ref().map(|p| {
                if p.is_relative() {
                    base.join(p)
                } else {
                    p.clone()
                }
            })
        };
        Self {
            known_words: join(&self.known_words),
            custom_words: join(&self.custom_words),
            proper_nouns: join(&self.proper_nouns),
            personal_names: join(&self.personal_names),
            stop_words: join(&self.stop_words),
            wordy_phrases: join(&self.wordy_phrases),
            copyright_phrases: join(&self.copyright_phrases),
            citation_phrases: join(&self.citation_phrases),
            excluded_phrases: join(&self.excluded_phrases),
        }
    }

    /// Whether no resource file is configured.
    pub const fn is_empty(&self) -> bool {
        self.known_words.is_none()
            && self.custom_words.is_none()
            && self.proper_nouns.is_none()
            && self.personal_names.is_none()
            && self.stop_words.is_none()
            && self.wordy_phrases.is_none()
            && self.copyright_phrases.is_none()
            && self.citation_phrases.is_none()
            && self.excluded_phrases.is_none()
    }
}

/// The configuration for readindex.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
    /// Document language (selects the syllabizer and article rules).
    pub language: Language,
    /// How numerals are syllabized.
    pub numerals: NumeralSyllabication,
    /// Stemmer used for n-gram and overused-word keys.
    pub stemmer: StemmerKind,
    /// Paragraph, exclusion and grammar-pass options.
    pub indexing: IndexingOptions,
    /// Word list and phrase files.
    pub resources: ResourcePaths,
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the platform config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    /// Directory that relative resource paths resolve against: the primary
    /// config file's parent directory.
    pub fn base_dir(&self) -> Option<&Utf8Path> {
        self.primary_file().and_then(Utf8Path::parent)
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for platform directory lookup and config file names.
const APP_NAME: &str = "readindex";

/// Environment variable prefix.
const ENV_PREFIX: &str = "READINDEX_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the platform config directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/readindex/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `READINDEX_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/readindex/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // READINDEX_LANGUAGE=german, READINDEX_INDEXING__EXCLUDE_NUMERALS=true
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            language = config.language.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching files from the closest directory that has any,
    /// ordered low-to-high precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| format!("{stem}.{ext}"))
                })
                .map(|name| dir.join(name))
                .filter(|path| path.is_file())
                .collect();

            if !found.is_empty() {
                return found;
            }

            // A config next to the marker still counts; stop above it.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in the platform config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/readindex/` on Linux, `~/Library/Application Support/readindex/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the default directory for log files (machine-specific, not synced).
///
/// Returns `~/.local/share/readindex/logs/` on Linux and the equivalent
/// local data directory elsewhere.
pub fn user_log_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().join("logs")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ParagraphParse;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn load_file(name: &str, contents: &str) -> Config {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.stemmer, StemmerKind::None);
        assert!(config.resources.is_empty());
        assert!(!config.disable_input_limit);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
        assert!(sources.base_dir().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let config = load_file(
            "config.toml",
            "log_level = \"debug\"\nlog_dir = \"/tmp/readindex\"\n",
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/readindex")
        );
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, "language = \"german\"\nlog_level = \"warn\"\n").unwrap();
        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.language, Language::German);
        assert_eq!(sources.primary_file(), Some(override_config.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".readindex.toml"), r#"log_level = "debug""#).unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".readindex.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".readindex.toml"), r#"log_level = "warn""#).unwrap();
        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!sources.project_files.is_empty());
        assert_eq!(sources.explicit_files.len(), 1);
    }

    #[test]
    fn dotfile_before_regular_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".readindex.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("readindex.yaml"), "log_level: error\n").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("readindex"));
        }
        if let Some(path) = user_log_dir() {
            assert!(path.as_str().ends_with("logs"));
        }
    }

    #[test]
    fn indexing_options_from_toml() {
        let config = load_file(
            "config.toml",
            "[indexing]\naggressive_exclusion = true\nexclusion_block_tags = [\"^^\"]\nparagraph_parse = \"each-new-line\"\n\n[indexing.spelling]\nignore_proper_nouns = false\n",
        );
        assert!(config.indexing.aggressive_exclusion);
        assert_eq!(config.indexing.tag_pairs(), [('^', '^')]);
        assert_eq!(config.indexing.paragraph_parse, ParagraphParse::EachNewLine);
        assert!(!config.indexing.spelling.ignore_proper_nouns);
        assert!(config.indexing.spelling.ignore_uppercased);
        assert_eq!(config.indexing.allowable_incomplete_sentence_size, 15);
    }

    #[test]
    fn language_and_numerals_from_json() {
        let config = load_file(
            "config.json",
            r#"{"language": "german", "numerals": "sound-out-each-digit", "stemmer": "plural"}"#,
        );
        assert_eq!(config.language, Language::German);
        assert_eq!(config.numerals, NumeralSyllabication::SoundOutEachDigit);
        assert_eq!(config.stemmer, StemmerKind::Plural);
    }

    #[test]
    fn resources_from_yaml() {
        let yaml = "resources:\n  known_words: words.txt\n  wordy_phrases: /abs/phrases.txt\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let resolved = config.resources.resolve(Utf8Path::new("/etc/readindex"));
        assert_eq!(
            resolved.known_words.as_deref(),
            Some(Utf8Path::new("/etc/readindex/words.txt"))
        );
        assert_eq!(
            resolved.wordy_phrases.as_deref(),
            Some(Utf8Path::new("/abs/phrases.txt"))
        );
        assert!(resolved.stop_words.is_none());
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let config = load_file(
            "config.toml",
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
        );
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "language = \"klingon\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "language = \"english\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("READINDEX_LANGUAGE", "german");
            std::env::set_var("READINDEX_INDEXING__EXCLUDE_NUMERALS", "true");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("READINDEX_LANGUAGE");
            std::env::remove_var("READINDEX_INDEXING__EXCLUDE_NUMERALS");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.language, Language::German);
        assert!(config.indexing.exclude_numerals);
    }
}
