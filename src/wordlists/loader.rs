//! Word list loading utilities
//!
//! Reads one word per line. Files may be UTF-8 or single-byte Latin-1.

use super::{Corpus, CorpusError};
use std::fs;
use std::path::Path;

/// Read the trimmed lines of a word list file
///
/// Blank lines are kept as empty strings; [`Corpus::from_lines`] decides
/// what to do with them.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decode(bytes).lines().map(|line| line.trim().to_string()).collect())
}

/// Load a corpus of `word_length`-letter words from a file
///
/// # Errors
///
/// Returns a `CorpusError` if the file cannot be read, holds an invalid or
/// wrong-length word, or holds no words at all.
///
/// # Examples
/// ```no_run
/// use nwordle_helper::wordlists::loader::load_from_file;
///
/// let answers = load_from_file("NYT_wordle_possibles.txt", 5).unwrap();
/// println!("Loaded {} words", answers.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let corpus = Corpus::from_lines(&lines, word_length).map_err(|err| err.in_file(path))?;
    log::debug!("loaded {} words from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Decode as UTF-8 when valid, otherwise byte-for-byte as Latin-1
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        err.into_bytes()
            .into_iter()
            .map(char::from)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nwordle_helper_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_lines_trims_and_keeps_blanks() {
        let path = temp_file("lines.txt", b"crane \r\n\n  slate\r\n");
        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["crane", "", "slate"]);
    }

    #[test]
    fn read_lines_falls_back_to_latin1() {
        // 0xE9 is 'é' in Latin-1 and not valid UTF-8 on its own
        let path = temp_file("latin1.txt", b"\xE9cole\nslate\n");
        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["école", "slate"]);
    }

    #[test]
    fn load_from_file_builds_corpus() {
        let path = temp_file("corpus.txt", b"crane\nslate\n\nirate\n");
        let corpus = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.words()[2].text(), "irate");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/definitely/not/here/words.txt", 5);
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }

    #[test]
    fn load_from_file_reports_path_on_bad_word() {
        let path = temp_file("bad.txt", b"crane\ntoolong\n");
        let result = load_from_file(&path, 5);
        fs::remove_file(&path).unwrap();

        match result {
            Err(CorpusError::InFile { path: reported, source }) => {
                assert_eq!(reported, path);
                assert!(matches!(*source, CorpusError::WordLength { line: 2, .. }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
