//! Readers for the on-disk data set.
//!
//! The data set is a directory with two subdirectories:
//!
//! ```text
//! resources/
//! ├── titles/
//! │   ├── one_topic_titles.txt
//! │   ├── two_topic_titles.txt
//! │   └── three_topic_titles.txt
//! └── words/
//!     ├── noun.csv
//!     ├── noun_usually_uncountable.csv
//!     ├── noun_countable_and_uncountable.csv
//!     ├── noun_pluralia_tantum.csv
//!     ├── noun_uncountable.csv
//!     └── noun_non_attested.csv
//! ```
//!
//! Title files hold one template per line. Blank lines and lines starting
//! with `//` are skipped, and a literal `\n` becomes a newline.
//!
//! Word files are header-less CSV. A line with two or more fields is a
//! singular/plural pair, a line with one field is a fixed form.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use brainstorm_foundation::{Error, ErrorContext, Result};
use tracing::debug;

use crate::lexicon::{Lexicon, LexiconBuilder};
use crate::record::{NounClass, NounRecord};

/// A template line read from a title file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleLine {
    /// 1-indexed line number in the source file.
    pub line: usize,
    /// Template text with `\n` escapes expanded.
    pub text: String,
}

/// Locations of the title and word lists under a data root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Creates paths rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the data root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the title file for templates taking `arity` subjects.
    ///
    /// Returns `None` for arities other than 1, 2 and 3.
    #[must_use]
    pub fn titles(&self, arity: usize) -> Option<PathBuf> {
        let name = match arity {
            1 => "one_topic_titles.txt",
            2 => "two_topic_titles.txt",
            3 => "three_topic_titles.txt",
            _ => return None,
        };
        Some(self.root.join("titles").join(name))
    }

    /// Returns the word list for `class`.
    #[must_use]
    pub fn words(&self, class: NounClass) -> PathBuf {
        self.root.join("words").join(class.file_name())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new("resources")
    }
}

/// Reads template lines from any buffered reader.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not UTF-8.
pub fn parse_title_lines(reader: impl BufRead, source: &str) -> Result<Vec<TitleLine>> {
    let mut titles = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            Error::data_source(source, e.to_string())
                .with_context(ErrorContext::new().with_source(source).with_line(i + 1))
        })?;
        let text = line.trim().replace("\\n", "\n");
        if text.is_empty() || text.starts_with("//") {
            continue;
        }
        titles.push(TitleLine { line: i + 1, text });
    }
    Ok(titles)
}

/// Reads template lines from a title file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_title_file(path: &Path) -> Result<Vec<TitleLine>> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::data_source(&source, e.to_string()))?;
    let titles = parse_title_lines(BufReader::new(file), &source)?;
    debug!(path = %source, count = titles.len(), "read title file");
    Ok(titles)
}

/// Reads noun records from header-less CSV.
///
/// Fields are trimmed. Lines whose first field is empty are skipped.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or not UTF-8, or if a pair has
/// an empty plural.
pub fn parse_word_records(reader: impl Read, source: &str) -> Result<Vec<NounRecord>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv.records() {
        let row = result.map_err(|e| {
            let mut context = ErrorContext::new().with_source(source);
            if let Some(position) = e.position() {
                context = context.with_line(usize::try_from(position.line()).unwrap_or(usize::MAX));
            }
            Error::data_source(source, e.to_string()).with_context(context)
        })?;

        match (row.get(0), row.get(1)) {
            (Some(singular), Some("")) if !singular.is_empty() => {
                let mut context = ErrorContext::new().with_source(source);
                if let Some(position) = row.position() {
                    context =
                        context.with_line(usize::try_from(position.line()).unwrap_or(usize::MAX));
                }
                return Err(Error::data_source(
                    source,
                    format!("{singular:?} has an empty plural"),
                )
                .with_context(context));
            }
            (Some(singular), Some(plural)) if !singular.is_empty() => {
                records.push(NounRecord::pair(singular, plural));
            }
            (Some(form), None) if !form.is_empty() => records.push(NounRecord::fixed(form)),
            _ => {}
        }
    }
    Ok(records)
}

/// Reads noun records from a word file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_word_file(path: &Path) -> Result<Vec<NounRecord>> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::data_source(&source, e.to_string()))?;
    let records = parse_word_records(file, &source)?;
    debug!(path = %source, count = records.len(), "read word file");
    Ok(records)
}

impl Lexicon {
    /// Loads all six word lists under `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if any word list is missing or malformed.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        for class in NounClass::ALL {
            let records = read_word_file(&paths.words(class)).map_err(|e| {
                let context = e
                    .context
                    .clone()
                    .unwrap_or_default()
                    .with_frame(format!("loading {class} nouns"));
                e.with_context(context)
            })?;
            builder.extend(class, records);
        }
        let lexicon = builder.build();
        debug!(records = lexicon.len(), root = %paths.root().display(), "lexicon loaded");
        Ok(lexicon)
    }
}
