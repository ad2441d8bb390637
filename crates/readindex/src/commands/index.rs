//! Index command: statistics and findings for one or more documents.

use std::sync::Arc;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readindex_core::config::{Config, ConfigSources};
use readindex_core::{
    Document, DocumentStatistics, Language, Lexicon, NumeralSyllabication, ParagraphParse,
    StemmerKind, WordSpan,
};

use super::{load_lexicon, read_input_file};

/// Arguments for the `index` subcommand.
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// Files to index.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Document language (overrides config).
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// How numerals are syllabized (overrides config).
    #[arg(long, value_enum)]
    pub numerals: Option<NumeralSyllabication>,

    /// Stemmer for n-gram and overused-word keys (overrides config).
    #[arg(long, value_enum)]
    pub stemmer: Option<StemmerKind>,

    /// How lines group into paragraphs (overrides config).
    #[arg(long, value_enum)]
    pub paragraph_parse: Option<ParagraphParse>,

    /// Extend copyright exclusion to the end of the document.
    #[arg(long)]
    pub aggressive_exclusion: bool,

    /// Two-character tag pairs whose content is excluded (e.g. `^^,[]`).
    #[arg(long, value_delimiter = ',')]
    pub exclude_tags: Vec<String>,

    /// List every finding, not just the counts.
    #[arg(long)]
    pub details: bool,
}

impl IndexArgs {
    fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(numerals) = self.numerals {
            config.numerals = numerals;
        }
        if let Some(stemmer) = self.stemmer {
            config.stemmer = stemmer;
        }
        if let Some(parse) = self.paragraph_parse {
            config.indexing.paragraph_parse = parse;
        }
        if self.aggressive_exclusion {
            config.indexing.aggressive_exclusion = true;
        }
        if !self.exclude_tags.is_empty() {
            config
                .indexing
                .exclusion_block_tags
                .extend(self.exclude_tags.iter().cloned());
        }
        config
    }
}

#[derive(Debug, Serialize)]
struct KnownPhrase {
    text: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    replacement: String,
}

#[derive(Debug, Default, Serialize)]
struct Findings {
    duplicate_words: Vec<String>,
    misspelled_words: Vec<String>,
    incorrect_articles: Vec<String>,
    passive_voice: Vec<String>,
    proper_phrases: Vec<String>,
    negated_phrases: Vec<String>,
    n_grams: Vec<String>,
    overused_words: Vec<String>,
    known_phrases: Vec<KnownPhrase>,
    lowercase_sentence_starts: Vec<String>,
    conjunction_sentence_starts: Vec<String>,
}

impl Findings {
    fn collect(document: &Document) -> Self {
        let words = |indices: &[usize]| -> Vec<String> {
            indices
                .iter()
                .map(|&i| document.words()[i].text.clone())
                .collect()
        };
        let spans = |spans: &[WordSpan]| -> Vec<String> {
            spans.iter().map(|&s| document.span_text(s)).collect()
        };

        let mut n_grams = spans(document.n_grams());
        n_grams.sort();
        n_grams.dedup();

        let mut overused: Vec<String> = document
            .overused_words_by_sentence()
            .iter()
            .flat_map(|o| o.words.iter().map(|&i| document.words()[i].folded.clone()))
            .collect();
        overused.sort();
        overused.dedup();

        let wordy = document.lexicon().wordy_phrases();
        let known_phrases = document
            .known_phrases()
            .iter()
            .map(|found| KnownPhrase {
                text: document.span_text(found.span),
                replacement: wordy
                    .get(found.phrase)
                    .map(|p| p.replacement().to_owned())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            duplicate_words: words(document.duplicate_words()),
            misspelled_words: words(document.misspelled_words()),
            incorrect_articles: document
                .incorrect_articles()
                .iter()
                .map(|&i| document.span_text(WordSpan::new(i, 2)))
                .collect(),
            passive_voice: spans(document.passive_voice()),
            proper_phrases: spans(document.proper_phrases()),
            negated_phrases: spans(document.negated_phrases()),
            n_grams,
            overused_words: overused,
            known_phrases,
            lowercase_sentence_starts: words(document.lowercase_sentence_starts()),
            conjunction_sentence_starts: words(document.conjunction_sentence_starts()),
        }
    }

    fn sections(&self) -> [(&'static str, Vec<&str>); 11] {
        [
            ("Duplicate words", text(&self.duplicate_words)),
            ("Misspellings", text(&self.misspelled_words)),
            ("Incorrect articles", text(&self.incorrect_articles)),
            ("Passive voice", text(&self.passive_voice)),
            ("Proper phrases", text(&self.proper_phrases)),
            ("Negated phrases", text(&self.negated_phrases)),
            ("Repeated n-grams", text(&self.n_grams)),
            ("Overused words", text(&self.overused_words)),
            (
                "Wordy phrases",
                self.known_phrases.iter().map(|p| p.text.as_str()).collect(),
            ),
            ("Lowercase starts", text(&self.lowercase_sentence_starts)),
            ("Conjunction starts", text(&self.conjunction_sentence_starts)),
        ]
    }
}

fn text(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: Utf8PathBuf,
    statistics: DocumentStatistics,
    findings: Findings,
}

fn index_file(
    document: &mut Document,
    path: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<FileReport> {
    let content = read_input_file(path, max_input_bytes)?;
    document.load_document(&content);
    Ok(FileReport {
        file: path.to_owned(),
        statistics: document.statistics(),
        findings: Findings::collect(document),
    })
}

fn progress_bar(total: usize) -> anyhow::Result<ProgressBar> {
    if total < 2 {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .context("invalid progress template")?
            .progress_chars("##-"),
    );
    Ok(bar)
}

/// Index each file and print its statistics.
#[instrument(name = "cmd_index", skip_all, fields(files = args.files.len()))]
pub fn cmd_index(
    args: IndexArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, details = args.details, "executing index command");

    let config = args.apply(config);
    let lexicon: Arc<Lexicon> = load_lexicon(&config, sources, cwd)?;
    let mut document = Document::from_config(lexicon, &config);

    let progress = progress_bar(args.files.len())?;
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let report = index_file(&mut document, path, max_input_bytes)
            .with_context(|| format!("failed to index {path}"))?;
        progress.set_message(path.to_string());
        progress.inc(1);
        if !global_json {
            progress.suspend(|| print_report(&report, args.details));
        }
        reports.push(report);
    }
    progress.finish_and_clear();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_report(report: &FileReport, details: bool) {
    let s = &report.statistics;
    println!("{}", report.file.bold());
    println!(
        "  {} {} ({} valid)",
        "Words:".cyan(),
        s.word_count,
        s.valid_word_count
    );
    println!(
        "  {} {} ({} valid, {} complete)",
        "Sentences:".cyan(),
        s.sentence_count,
        s.valid_sentence_count,
        s.complete_sentence_count
    );
    println!(
        "  {} {} ({} valid)",
        "Paragraphs:".cyan(),
        s.paragraph_count,
        s.valid_paragraph_count
    );
    println!(
        "  {} {} ({} in valid words, {} words of 3+)",
        "Syllables:".cyan(),
        s.syllable_count,
        s.valid_syllable_count,
        s.polysyllabic_word_count
    );

    for (label, items) in report.findings.sections() {
        if items.is_empty() {
            continue;
        }
        if details {
            println!("  {} {}", format!("{label}:").yellow(), items.join(", "));
        } else {
            println!("  {} {}", format!("{label}:").yellow(), items.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(text: &str) -> Document {
        let mut document = Document::default();
        document.load_document(text);
        document
    }

    #[test]
    fn findings_use_surface_text() {
        let findings = Findings::collect(&document(
            "The the ball was thrown by the boy. She ate a apple.",
        ));
        assert_eq!(findings.duplicate_words, ["the"]);
        assert_eq!(findings.passive_voice, ["was thrown"]);
        assert_eq!(findings.incorrect_articles, ["a apple"]);
    }

    #[test]
    fn repeated_n_grams_are_listed_once() {
        let findings = Findings::collect(&document("The red car stopped. The red car left."));
        assert_eq!(findings.n_grams, ["red car", "the red", "the red car"]);
    }

    #[test]
    fn overrides_replace_config_values() {
        let args = IndexArgs {
            language: Some(Language::German),
            aggressive_exclusion: true,
            exclude_tags: vec!["^^".to_owned()],
            ..IndexArgs::default()
        };
        let config = args.apply(&Config::default());
        assert_eq!(config.language, Language::German);
        assert!(config.indexing.aggressive_exclusion);
        assert_eq!(config.indexing.exclusion_block_tags, ["^^"]);
    }

    #[test]
    fn single_file_has_no_progress_bar() {
        assert!(progress_bar(1).unwrap().is_hidden());
    }
}
