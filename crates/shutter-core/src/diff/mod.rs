//! Snapshot line diff engine.
//!
//! Compares an accepted snapshot with a freshly captured one and produces a
//! classified, line-numbered listing used both to decide pass/fail and to
//! render the review view.
//!
//! ## Entry point
//!
//! ```
//! use shutter_core::diff::{histogram, summary::DiffStats};
//!
//! let lines = histogram("a\nb", "a\nb\nc");
//! assert!(!DiffStats::from_lines(&lines).is_unchanged());
//! ```
//!
//! ## Pipeline
//!
//! 1. [`lines::split_lines`] turns each side into a line sequence.
//! 2. [`matcher::SequenceMatcher`] finds the matching blocks.
//! 3. [`opcodes::opcodes_from_blocks`] fills the gaps between blocks.
//! 4. [`engine::build_diff_lines`] expands opcodes into [`DiffLine`]s.
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output, in the same order.
//! - **Coverage**: every old line appears exactly once as shared or deleted,
//!   every new line exactly once as shared or added.
//! - **Contiguity over minimality**: the matcher prefers long intact blocks to
//!   the smallest possible number of edits; `histogram(a, b)` is not required
//!   to mirror `histogram(b, a)`.

pub mod engine;
pub mod lines;
pub mod matcher;
pub mod model;
pub mod opcodes;
pub mod summary;

pub use engine::{histogram, histogram_with, histogram_with_policy, histogram_within};
pub use matcher::SequenceMatcher;
pub use model::{DiffKind, DiffLine, MatchBlock, OpTag, Opcode};
pub use summary::DiffStats;
