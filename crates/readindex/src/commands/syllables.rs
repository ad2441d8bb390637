//! Syllables command: count syllables in words given on the command line.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readindex_core::config::Config;
use readindex_core::{CountSyllables, Language, NumeralSyllabication, Syllabizer};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug, Default)]
pub struct SyllablesArgs {
    /// Words to syllabize.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Language rules to apply (overrides config).
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// How numerals are syllabized (overrides config).
    #[arg(long, value_enum)]
    pub numerals: Option<NumeralSyllabication>,
}

#[derive(Debug, Serialize)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

#[derive(Debug, Serialize)]
struct SyllableReport {
    language: Language,
    words: Vec<WordSyllables>,
    total: usize,
}

fn count(args: &SyllablesArgs, config: &Config) -> SyllableReport {
    let language = args.language.unwrap_or(config.language);
    let syllabizer = Syllabizer::new(language, args.numerals.unwrap_or(config.numerals));
    let words: Vec<WordSyllables> = args
        .words
        .iter()
        .map(|word| WordSyllables {
            word: word.clone(),
            syllables: syllabizer.count_syllables(word),
        })
        .collect();
    let total = words.iter().map(|w| w.syllables).sum();
    SyllableReport {
        language,
        words,
        total,
    }
}

/// Print the syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(language = ?args.language, "executing syllables command");
    let report = count(&args, config);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.words {
            println!("{}\t{}", entry.word, entry.syllables);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> SyllablesArgs {
        SyllablesArgs {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
            ..SyllablesArgs::default()
        }
    }

    #[test]
    fn counts_with_config_language() {
        let report = count(&args(&["hello", "world"]), &Config::default());
        assert_eq!(report.language, Language::English);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn language_flag_wins() {
        let mut args = args(&["Fisole", "Freund"]);
        args.language = Some(Language::German);
        let report = count(&args, &Config::default());
        let counts: Vec<usize> = report.words.iter().map(|w| w.syllables).collect();
        assert_eq!(counts, [3, 1]);
    }
}
