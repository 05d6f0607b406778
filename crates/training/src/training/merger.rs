//! In-place merge execution.
//!
//! Replaces every occurrence of a pair across the corpus and reports each
//! broken or newly formed neighbour pair to the index as it goes, so the
//! index never has to be rebuilt from scratch.

use symbpe_core::{Line, Pair, PairIndex, Token};

/// Merge `pair` into `token` in every line, mutating lines in place.
///
/// After a replacement the cursor stays put, so a following occurrence at the
/// same boundary is caught in the same pass. Returns the number of
/// replacements made; each one shortens its line by exactly one token.
pub fn merge_pair(corpus: &mut [Line], pair: &Pair, token: &Token, index: &mut PairIndex) -> u64 {
    let (left, right) = pair;
    let mut replaced = 0u64;

    for line in corpus.iter_mut() {
        let mut i = 0;

        while i + 1 < line.len() {
            if line[i] != *left || line[i + 1] != *right {
                i += 1;
                continue;
            }

            // Pairs broken by the merge
            index.update(pair.clone(), -1);
            if i > 0 {
                index.update((line[i - 1].clone(), left.clone()), -1);
            }
            if i + 2 < line.len() {
                index.update((right.clone(), line[i + 2].clone()), -1);
            }

            line[i] = token.clone();
            line.remove(i + 1);
            replaced += 1;

            // Pairs formed around the new token
            if i > 0 {
                index.update((line[i - 1].clone(), token.clone()), 1);
            }
            if i + 1 < line.len() {
                index.update((token.clone(), line[i + 1].clone()), 1);
            }
        }
    }

    replaced
}
