//! Contiguous-block sequence matcher.
//!
//! Finds the longest run of identical lines that contains no junk, then
//! repeats the search on the pieces left and right of it. This does not
//! produce a minimal edit script; it produces blocks that read naturally,
//! which is what a reviewer comparing two snapshots wants to see.
//!
//! Cost is quadratic in the worst case and close to linear when most lines
//! match. Lines that occur very often on the new side are dropped from the
//! anchor index for long inputs ("auto-junk") so runs of blank lines or
//! repeated braces do not dominate the search.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::diff::model::{MatchBlock, Opcode};
use crate::diff::opcodes::opcodes_from_blocks;
use crate::policy::{JunkPolicy, NoJunkPolicy};

/// New-side length at which auto-junk starts purging popular lines.
pub const AUTO_JUNK_MIN_LEN: usize = 200;

/// Time limit for a matching pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Unbounded,
    Until(Instant),
}

impl Budget {
    fn exhausted(&self) -> bool {
        match self {
            Budget::Unbounded => false,
            Budget::Until(deadline) => Instant::now() >= *deadline,
        }
    }
}

/// Matches an old line sequence against a new one.
#[derive(Debug, Clone)]
pub struct SequenceMatcher<'a> {
    a: Vec<&'a str>,
    b: Vec<&'a str>,
    /// New-side positions per line value, junk and popular lines excluded
    b2j: HashMap<&'a str, Vec<usize>>,
    junk: HashSet<&'a str>,
    popular: HashSet<&'a str>,
}

impl<'a> SequenceMatcher<'a> {
    /// Matcher with no junk predicate and auto-junk enabled
    pub fn new(a: &[&'a str], b: &[&'a str]) -> Self {
        Self::with_policy(a, b, &NoJunkPolicy, true)
    }

    /// Matcher with an explicit junk policy and auto-junk switch
    pub fn with_policy(
        a: &[&'a str],
        b: &[&'a str],
        policy: &dyn JunkPolicy,
        auto_junk: bool,
    ) -> Self {
        let mut b2j: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (j, line) in b.iter().enumerate() {
            b2j.entry(*line).or_default().push(j);
        }

        let junk: HashSet<&'a str> = b2j
            .keys()
            .copied()
            .filter(|line| policy.is_junk(line))
            .collect();
        b2j.retain(|line, _| !junk.contains(line));

        let mut popular = HashSet::new();
        if auto_junk && b.len() >= AUTO_JUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            popular.extend(
                b2j.iter()
                    .filter(|(_, positions)| positions.len() > threshold)
                    .map(|(line, _)| *line),
            );
            b2j.retain(|line, _| !popular.contains(line));
            if !popular.is_empty() {
                tracing::debug!(
                    popular = popular.len(),
                    threshold,
                    new_lines = b.len(),
                    "auto-junk purged popular lines"
                );
            }
        }

        Self {
            a: a.to_vec(),
            b: b.to_vec(),
            b2j,
            junk,
            popular,
        }
    }

    /// Whether a new-side line value was classified as junk by the policy
    pub fn is_junk(&self, line: &str) -> bool {
        self.junk.contains(line)
    }

    /// Whether a new-side line value was purged by auto-junk
    pub fn is_popular(&self, line: &str) -> bool {
        self.popular.contains(line)
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long junk-free runs the one starting earliest in `a`,
    /// then earliest in `b`, wins. The winner is then widened over equal
    /// non-junk lines, and after that over equal junk lines, on both ends.
    /// Returns a zero-length block at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        self.longest_match_within(alo, ahi, blo, bhi, &Budget::Unbounded)
            .unwrap_or(MatchBlock::new(alo, blo, 0))
    }

    fn longest_match_within(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
        budget: &Budget,
    ) -> Option<MatchBlock> {
        let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0usize);

        // run length of the match ending at each b position, for the previous a row
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            if budget.exhausted() {
                return None;
            }
            if let Some(positions) = self.b2j.get(self.a[i]) {
                let start = positions.partition_point(|&j| j < blo);
                for &j in positions[start..].iter().take_while(|&&j| j < bhi) {
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next_j2len);
            next_j2len.clear();
        }

        let (a, b) = (&self.a, &self.b);
        for absorb_junk in [false, true] {
            while best_i > alo
                && best_j > blo
                && self.is_junk(b[best_j - 1]) == absorb_junk
                && a[best_i - 1] == b[best_j - 1]
            {
                best_i -= 1;
                best_j -= 1;
                best_len += 1;
            }
            while best_i + best_len < ahi
                && best_j + best_len < bhi
                && self.is_junk(b[best_j + best_len]) == absorb_junk
                && a[best_i + best_len] == b[best_j + best_len]
            {
                best_len += 1;
            }
        }

        Some(MatchBlock::new(best_i, best_j, best_len))
    }

    /// Ordered, non-overlapping matching blocks, ending with the sentinel
    /// `(a.len(), b.len(), 0)`.
    ///
    /// Blocks adjacent in both sequences are merged.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        // an unbounded budget never runs out
        self.matching_blocks_within(&Budget::Unbounded)
            .unwrap_or_default()
    }

    /// Like [`matching_blocks`](Self::matching_blocks), but gives up with
    /// `None` once `budget` is exhausted.
    pub fn matching_blocks_within(&self, budget: &Budget) -> Option<Vec<MatchBlock>> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            if budget.exhausted() {
                return None;
            }
            let m = self.longest_match_within(alo, ahi, blo, bhi, budget)?;
            if m.len == 0 {
                continue;
            }
            if alo < m.old_index && blo < m.new_index {
                pending.push((alo, m.old_index, blo, m.new_index));
            }
            if m.old_end() < ahi && m.new_end() < bhi {
                pending.push((m.old_end(), ahi, m.new_end(), bhi));
            }
            found.push(m);
        }
        found.sort_unstable_by_key(|m| m.old_index);

        let mut blocks: Vec<MatchBlock> = Vec::with_capacity(found.len() + 1);
        for m in found {
            match blocks.last_mut() {
                Some(prev) if prev.old_end() == m.old_index && prev.new_end() == m.new_index => {
                    prev.len += m.len;
                }
                _ => blocks.push(m),
            }
        }
        blocks.push(MatchBlock::new(self.a.len(), self.b.len(), 0));
        Some(blocks)
    }

    /// Opcodes turning the old sequence into the new one.
    pub fn opcodes(&self) -> Vec<Opcode> {
        opcodes_from_blocks(&self.matching_blocks())
    }
}
