//! Corpus loading.
//!
//! Reads a line-oriented word list into a [`SuffixIndex`], accounting for
//! every line that did not become a stored word.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::input::InputConfig;
use crate::data_structures::{SuffixIndex, SuffixIndexError};
use crate::error::AppResult;

/// What happened to each line of a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines read
    pub lines: usize,
    /// Words stored
    pub inserted: usize,
    /// Words already stored by an earlier line
    pub duplicates: usize,
    /// Lines empty after trimming
    pub empty: usize,
    /// Comment lines
    pub comments: usize,
    /// Words over the configured length cap
    pub too_long: usize,
}

/// Loads one candidate word per line from `reader`.
///
/// Rejected words are skipped and counted, matching construction from a
/// sequence of words.
///
/// # Errors
///
/// Returns `AppError::Io` if reading fails.
pub fn load_words<R: BufRead>(
    reader: R,
    config: &InputConfig,
) -> AppResult<(SuffixIndex, LoadReport)> {
    let mut index = SuffixIndex::new();
    let mut report = LoadReport::default();

    for line in reader.lines() {
        let line = line?;
        report.lines += 1;

        let word = if config.trim { line.trim() } else { line.as_str() };

        if config
            .comment_prefix
            .as_deref()
            .is_some_and(|prefix| word.starts_with(prefix))
        {
            report.comments += 1;
            continue;
        }

        if config
            .max_word_chars
            .is_some_and(|max| word.chars().count() > max)
        {
            debug!(line = report.lines, "skipping word over length cap");
            report.too_long += 1;
            continue;
        }

        match index.try_insert(word) {
            Ok(()) => report.inserted += 1,
            Err(SuffixIndexError::EmptyWord) => report.empty += 1,
            Err(SuffixIndexError::DuplicateWord(_)) => report.duplicates += 1,
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        lines = report.lines,
        inserted = report.inserted,
        size = index.size(),
        "corpus loaded"
    );

    Ok((index, report))
}

/// Loads a corpus file; see [`load_words`].
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be opened or read.
pub fn load_words_from_path<P: AsRef<Path>>(
    path: P,
    config: &InputConfig,
) -> AppResult<(SuffixIndex, LoadReport)> {
    let file = File::open(path.as_ref())?;
    load_words(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_load_words_accounts_for_every_line() {
        let input = "abde\n# comment\nabc\n\n  b  \nabd\nb\nwaytoolong\n";
        let config = InputConfig {
            max_word_chars: Some(6),
            ..InputConfig::default()
        };

        let (index, report) = load_words(Cursor::new(input), &config).unwrap();

        assert_eq!(
            report,
            LoadReport {
                lines: 8,
                inserted: 4,
                duplicates: 1,
                empty: 1,
                comments: 1,
                too_long: 1,
            }
        );
        assert_eq!(index, SuffixIndex::from(["abde", "abc", "b", "abd"]));
    }

    #[test]
    fn test_load_words_without_trim_or_comments() {
        let config = InputConfig {
            trim: false,
            comment_prefix: None,
            max_word_chars: None,
        };

        let (index, report) = load_words(Cursor::new("#x\n b\n"), &config).unwrap();

        assert_eq!(report.inserted, 2);
        assert!(index.search("#x"));
        assert!(index.search(" b"));
        assert!(!index.search("b"));
        assert!(index.ends_with("b"));
    }

    #[test]
    fn test_load_words_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cab").unwrap();
        writeln!(file, "ab").unwrap();

        let (index, report) =
            load_words_from_path(file.path(), &InputConfig::default()).unwrap();

        assert_eq!(report.inserted, 2);
        assert!(index.ends_with("b"));
        assert!(index.ends_with("ab"));
    }

    #[test]
    fn test_load_words_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_words_from_path(dir.path().join("missing.txt"), &InputConfig::default());

        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }
}
