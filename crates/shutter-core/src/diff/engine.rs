//! Line diff computation engine.
//!
//! The core entry point is [`histogram`], which compares an accepted snapshot
//! with a freshly captured one and returns one [`DiffLine`] per line of
//! either side.

use std::time::{Duration, Instant};

use crate::diff::lines::split_lines;
use crate::diff::matcher::{Budget, SequenceMatcher};
use crate::diff::model::{DiffLine, OpTag, Opcode};
use crate::diff::opcodes::opcodes_from_blocks;
use crate::errors::{ExError, Result, ShutterError};
use crate::policy::{DiffOptions, JunkPolicy};
use crate::{log_op_end, log_op_error, log_op_start};

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Compute the line diff between `old` and `new` with default options.
///
/// Total for every input. Deleted lines of a replaced range always come
/// before the added lines that replace them.
///
/// ```
/// use shutter_core::diff::{histogram, DiffKind};
///
/// let lines = histogram("line1\nline2\nline3", "line1\nmodified\nline3");
/// let kinds: Vec<DiffKind> = lines.iter().map(|l| l.kind).collect();
/// assert_eq!(
///     kinds,
///     [DiffKind::Shared, DiffKind::Deleted, DiffKind::Added, DiffKind::Shared]
/// );
/// ```
pub fn histogram(old: &str, new: &str) -> Vec<DiffLine> {
    histogram_with(old, new, &DiffOptions::default())
}

/// Compute the line diff using the junk mode and auto-junk switch in `options`.
pub fn histogram_with(old: &str, new: &str, options: &DiffOptions) -> Vec<DiffLine> {
    histogram_with_policy(old, new, options.junk_policy(), options.auto_junk)
}

/// Compute the line diff with a caller-supplied junk policy.
pub fn histogram_with_policy(
    old: &str,
    new: &str,
    policy: &dyn JunkPolicy,
    auto_junk: bool,
) -> Vec<DiffLine> {
    let started = Instant::now();
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    log_op_start!(
        "histogram",
        old_lines = old_lines.len(),
        new_lines = new_lines.len()
    );

    let matcher = SequenceMatcher::with_policy(&old_lines, &new_lines, policy, auto_junk);
    let lines = build_diff_lines(&old_lines, &new_lines, &matcher.opcodes());

    log_op_end!(
        "histogram",
        duration_ms = elapsed_ms(started),
        diff_lines = lines.len()
    );
    lines
}

/// Compute the line diff, giving up once `budget` has elapsed.
///
/// On success the result is identical to [`histogram_with`] for the same
/// options. Two empty inputs always succeed.
///
/// # Errors
///
/// - `Timeout`: matching did not finish within `budget`
pub fn histogram_within(
    old: &str,
    new: &str,
    options: &DiffOptions,
    budget: Duration,
) -> Result<Vec<DiffLine>> {
    let started = Instant::now();
    let deadline = match started.checked_add(budget) {
        Some(at) => Budget::Until(at),
        None => Budget::Unbounded,
    };
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    log_op_start!(
        "histogram_within",
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        budget_ms = u64::try_from(budget.as_millis()).unwrap_or(u64::MAX)
    );

    if old_lines.is_empty() && new_lines.is_empty() {
        log_op_end!("histogram_within", duration_ms = elapsed_ms(started), diff_lines = 0u64);
        return Ok(Vec::new());
    }

    let matcher = SequenceMatcher::with_policy(
        &old_lines,
        &new_lines,
        options.junk_policy(),
        options.auto_junk,
    );
    let Some(blocks) = matcher.matching_blocks_within(&deadline) else {
        let err = ShutterError::DeadlineExceeded {
            budget_ms: budget.as_millis(),
        };
        log_op_error!("histogram_within", err.clone(), duration_ms = elapsed_ms(started));
        return Err(ExError::from(err).with_op("histogram_within"));
    };

    let ops = opcodes_from_blocks(&blocks);
    let lines = build_diff_lines(&old_lines, &new_lines, &ops);
    log_op_end!(
        "histogram_within",
        duration_ms = elapsed_ms(started),
        diff_lines = lines.len()
    );
    Ok(lines)
}

/// Expand opcodes into diff lines.
///
/// `Replace` emits every deleted old line before any added new line.
pub fn build_diff_lines(old_lines: &[&str], new_lines: &[&str], ops: &[Opcode]) -> Vec<DiffLine> {
    let mut out = Vec::with_capacity(old_lines.len() + new_lines.len());

    for op in ops {
        match op.tag {
            OpTag::Equal => {
                let shift = op.new_start;
                out.extend(
                    op.old_range()
                        .enumerate()
                        .map(|(offset, i)| DiffLine::shared(i, shift + offset, old_lines[i])),
                );
            }
            OpTag::Delete => {
                out.extend(op.old_range().map(|i| DiffLine::deleted(i, old_lines[i])));
            }
            OpTag::Insert => {
                out.extend(op.new_range().map(|j| DiffLine::added(j, new_lines[j])));
            }
            OpTag::Replace => {
                out.extend(op.old_range().map(|i| DiffLine::deleted(i, old_lines[i])));
                out.extend(op.new_range().map(|j| DiffLine::added(j, new_lines[j])));
            }
        }
    }

    out
}
