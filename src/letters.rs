/// Number of letters in the supported alphabet (a-z).
pub const ALPHABET_LEN: usize = 26;

const fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_lowercase() {
        Some(ch as usize - 'a' as usize)
    } else {
        None
    }
}

/// Per-letter multiplicities of a lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u8; ALPHABET_LEN],
}

impl LetterCounts {
    /// Count the letters of `word`. Returns `None` if it holds anything but a-z.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = [0u8; ALPHABET_LEN];
        for ch in word.chars() {
            let idx = letter_index(ch)?;
            counts[idx] = counts[idx].saturating_add(1);
        }
        Some(LetterCounts { counts })
    }

    pub fn count(&self, letter: char) -> u8 {
        letter_index(letter).map_or(0, |idx| self.counts[idx])
    }

    /// Total number of letters, duplicates included.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Multiplicities of the letters that occur at least once, in alphabetical order.
    pub fn multiplicities(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(idx, c)| ((b'a' + idx as u8) as char, *c))
    }

    /// Number of distinct sub-multisets: the product of (count + 1) over every letter.
    pub fn distinct_subset_count(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64 + 1).product()
    }

    /// True when every letter of `self` is available in `pool` with at least the same multiplicity.
    pub fn fits_within(&self, pool: &LetterCounts) -> bool {
        self.counts
            .iter()
            .zip(pool.counts.iter())
            .all(|(need, have)| need <= have)
    }
}

/// Letters of `word` in canonical (non-decreasing) order, so equal letters sit next to each other.
pub fn canonical_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters
}
