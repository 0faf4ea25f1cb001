//! Order-preserving alignment of two child sequences.
//!
//! A suffix dynamic program over `actual × expected` picks the pairing that
//! maximises, in order: identical pairs, compatible pairs (same kind, same
//! tag), then any other pairs. The forward walk breaks ties leftmost-greedy,
//! preferring a pair, then a deletion, then an insertion.

use std::ops::Add;

use crate::equality::{compatible, EqualityTable};
use crate::model::Node;

/// One step of an alignment, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `actual[i]` lines up with `expected[j]`
    Pair { i: usize, j: usize, identical: bool },
    /// `actual[i]` has no counterpart
    Delete(usize),
    /// `expected[j]` has no counterpart
    Insert(usize),
}

/// Lexicographic alignment score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    identical: usize,
    compatible: usize,
    other: usize,
}

impl Score {
    const IDENTICAL: Score = Score { identical: 1, compatible: 0, other: 0 };
    const COMPATIBLE: Score = Score { identical: 0, compatible: 1, other: 0 };
    const OTHER: Score = Score { identical: 0, compatible: 0, other: 1 };
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score {
            identical: self.identical + rhs.identical,
            compatible: self.compatible + rhs.compatible,
            other: self.other + rhs.other,
        }
    }
}

/// Align two child sequences.
///
/// Every index of `actual` appears exactly once (as a pair or a deletion), as
/// does every index of `expected`; both run in increasing order.
pub fn align(actual: &[Node], expected: &[Node]) -> Vec<Step> {
    align_with(actual, expected, &mut EqualityTable::new())
}

/// [`align`] sharing subtree equality results with the rest of a diff.
pub(crate) fn align_with<'a>(
    actual: &'a [Node],
    expected: &'a [Node],
    table: &mut EqualityTable<'a>,
) -> Vec<Step> {
    let (n, m) = (actual.len(), expected.len());
    let width = m + 1;

    // pair[i * m + j]
    let mut pair = Vec::with_capacity(n * m);
    for a in actual {
        for b in expected {
            pair.push(pair_score(a, b, table));
        }
    }

    // best[i * width + j] = best score for actual[i..] against expected[j..]
    let mut best = vec![Score::default(); (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            let take = best[(i + 1) * width + j + 1] + pair[i * m + j];
            let delete = best[(i + 1) * width + j];
            let insert = best[i * width + j + 1];
            best[i * width + j] = take.max(delete).max(insert);
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        let here = best[i * width + j];
        let score = pair[i * m + j];
        if best[(i + 1) * width + j + 1] + score == here {
            steps.push(Step::Pair {
                i,
                j,
                identical: score == Score::IDENTICAL,
            });
            i += 1;
            j += 1;
        } else if best[(i + 1) * width + j] == here {
            steps.push(Step::Delete(i));
            i += 1;
        } else {
            steps.push(Step::Insert(j));
            j += 1;
        }
    }
    steps.extend((i..n).map(Step::Delete));
    steps.extend((j..m).map(Step::Insert));

    tracing::trace!(
        actual_len = n,
        expected_len = m,
        steps = steps.len(),
        "aligned child sequences"
    );
    steps
}

fn pair_score<'a>(a: &'a Node, b: &'a Node, table: &mut EqualityTable<'a>) -> Score {
    if table.equal(a, b) {
        Score::IDENTICAL
    } else if compatible(a, b) {
        Score::COMPATIBLE
    } else {
        Score::OTHER
    }
}
