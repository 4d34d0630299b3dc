use smallvec::SmallVec;

use crate::config::MAX_INPUT_LENGTH;
use crate::letters::canonical_letters;

pub type LetterBuf = SmallVec<[char; MAX_INPUT_LENGTH]>;

/// One partial state of the include/exclude search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetFrame {
    /// Next position in the canonical letters to decide on.
    pub position: usize,
    /// Letters included so far.
    pub chosen: LetterBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Every position has been decided; the subset is final.
    Complete(String),
    Branch {
        include: SubsetFrame,
        exclude: SubsetFrame,
    },
}

impl SubsetFrame {
    pub fn root() -> Self {
        SubsetFrame {
            position: 0,
            chosen: LetterBuf::new(),
        }
    }

    /// Advance this state by one decision. `letters` must be in canonical order.
    pub fn expand(&self, letters: &[char]) -> Expansion {
        if self.position >= letters.len() {
            return Expansion::Complete(self.chosen.iter().collect());
        }

        let current = letters[self.position];

        let mut with_letter = self.chosen.clone();
        with_letter.push(current);
        let include = SubsetFrame {
            position: self.position + 1,
            chosen: with_letter,
        };

        // Skipping one copy of a repeated letter is the same as skipping any other,
        // so the exclude branch drops the whole run at once.
        let mut next = self.position;
        while next + 1 < letters.len() && letters[next + 1] == current {
            next += 1;
        }
        let exclude = SubsetFrame {
            position: next + 1,
            chosen: self.chosen.clone(),
        };

        Expansion::Branch { include, exclude }
    }
}

/// Every distinct sub-multiset of `letters`, the empty one and the full one included.
///
/// Order is depth-first with inclusion explored before exclusion, so the first
/// subset is the whole input in canonical order and the last is `""`.
pub fn enumerate_subsets(letters: &str) -> Vec<String> {
    let letters = canonical_letters(letters);
    let mut subsets = Vec::new();
    let mut stack = vec![SubsetFrame::root()];

    while let Some(frame) = stack.pop() {
        match frame.expand(&letters) {
            Expansion::Complete(subset) => subsets.push(subset),
            Expansion::Branch { include, exclude } => {
                // LIFO: push exclude first so include is explored first.
                stack.push(exclude);
                stack.push(include);
            }
        }
    }

    log::debug!("Enumerated {} subsets of {} letters", subsets.len(), letters.len());
    subsets
}
