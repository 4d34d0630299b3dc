//! The static word list candidates are checked against.
//!
//! A [`Dictionary`] is built once and never mutated, so it can be shared by
//! reference across threads. [`Dictionary::embedded`] gives the process-wide
//! default list compiled into the binary; [`Dictionary::parse_from_str`] works
//! everywhere (including WASM), while [`Dictionary::load_from_path`] is native-only.

use std::sync::LazyLock;

use hashbrown::HashSet;

use crate::errors::DictionaryError;

const EMBEDDED_WORDS: &str = include_str!("../data/words.txt");

static EMBEDDED: LazyLock<Dictionary> = LazyLock::new(|| {
    let dictionary = Dictionary::parse_from_str(EMBEDDED_WORDS);
    log::debug!("Embedded dictionary loaded with {} words", dictionary.len());
    dictionary
});

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// The default word list, built on first access and shared afterwards.
    pub fn embedded() -> &'static Dictionary {
        &EMBEDDED
    }

    /// Build from already-normalized words. Entries that are not all a-z are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_entry(w.as_ref()))
            .collect();
        Dictionary { words }
    }

    /// Parse one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Entries are trimmed and
    /// lower-cased; anything still holding a non a-z character can never be generated
    /// and is dropped.
    pub fn parse_from_str(contents: &str) -> Self {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    normalize_entry(line)
                }
            })
            .collect();
        Dictionary { words }
    }

    /// Read and parse a word list file. A file with no usable words is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Dictionary::parse_from_str(&contents);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        log::info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Keep the candidates that are dictionary words, in ascending order.
    pub fn filter_sorted<I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut matches: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| self.contains(candidate))
            .collect();
        matches.sort_unstable();
        matches
    }
}

fn normalize_entry(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_blanks_and_junk() {
        let dict = Dictionary::parse_from_str("# header\n\n Cat \ndog\ncan't\nice cream\nDOG\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(!dict.contains("Cat"));
        assert!(!dict.contains("can't"));
    }

    #[test]
    fn filter_sorted_keeps_members_in_order() {
        let dict = Dictionary::from_words(["cat", "act", "at", "a"]);
        let candidates = vec!["tac", "cat", "at", "", "act", "ta"]
            .into_iter()
            .map(String::from);
        assert_eq!(dict.filter_sorted(candidates), vec!["act", "at", "cat"]);
    }

    #[test]
    fn empty_string_never_matches() {
        let dict = Dictionary::from_words(["", "a"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.filter_sorted(vec![String::new()]).is_empty());
    }

    #[test]
    fn embedded_list_has_reference_words() {
        let dict = Dictionary::embedded();
        for word in ["a", "act", "at", "cat"] {
            assert!(dict.contains(word), "missing {word}");
        }
        assert!(!dict.contains("aa"));
        assert!(dict.iter().all(|w| w.bytes().all(|b| b.is_ascii_lowercase())));
        assert!(std::ptr::eq(dict, Dictionary::embedded()));
    }

    #[test]
    fn load_missing_file_reports_io() {
        let err = Dictionary::load_from_path("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert_eq!(err.code(), "D001");
    }

    #[test]
    fn load_file_round_trip() {
        let path = std::env::temp_dir().join(format!("word_finder_dict_{}.txt", std::process::id()));
        std::fs::write(&path, "tea\neat\n# comment\n").unwrap();
        let dict = Dictionary::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("eat"));
    }

    #[test]
    fn load_file_without_words_is_empty_error() {
        let path = std::env::temp_dir().join(format!("word_finder_empty_{}.txt", std::process::id()));
        std::fs::write(&path, "# nothing\n\n").unwrap();
        let err = Dictionary::load_from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DictionaryError::Empty));
    }
}
