use hashbrown::HashSet;

use crate::subsets::LetterBuf;

/// A partially built ordering and the letters still to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationFrame {
    pub built: LetterBuf,
    pub pool: LetterBuf,
}

impl PermutationFrame {
    pub fn new(subset: &str) -> Self {
        PermutationFrame {
            built: LetterBuf::new(),
            pool: subset.chars().collect(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
    }

    /// One child per pool position: that letter placed next, removed from the pool.
    /// Equal letters at different positions give textually equal children.
    pub fn children(&self) -> impl Iterator<Item = PermutationFrame> + '_ {
        (0..self.pool.len()).map(move |idx| {
            let mut built = self.built.clone();
            built.push(self.pool[idx]);
            let mut pool = self.pool.clone();
            pool.remove(idx);
            PermutationFrame { built, pool }
        })
    }
}

/// Emit every raw ordering of `subset` into `out`.
fn expand_into(subset: &str, out: &mut HashSet<String>) {
    let mut stack = vec![PermutationFrame::new(subset)];
    while let Some(frame) = stack.pop() {
        if frame.is_complete() {
            out.insert(frame.built.iter().collect());
            continue;
        }
        stack.extend(frame.children());
    }
}

/// Distinct orderings of a single subset. The empty subset yields `{""}`.
pub fn permutations_of(subset: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    expand_into(subset, &mut out);
    out
}

/// Distinct orderings of every subset, deduplicated across all of them.
pub fn expand_permutations<S: AsRef<str>>(subsets: &[S]) -> HashSet<String> {
    let mut out = HashSet::new();
    for subset in subsets {
        expand_into(subset.as_ref(), &mut out);
    }
    log::debug!(
        "Expanded {} subsets into {} distinct permutations",
        subsets.len(),
        out.len()
    );
    out
}
