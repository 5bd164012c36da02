//! Line diff output and intermediate types.
//!
//! Every value here is built fresh for one diff call and never mutated once
//! handed out. Line numbers are 1-based; indices and ranges are 0-based and
//! half-open.

use serde::{Deserialize, Serialize};

/// A maximal run of identical lines present in both sequences.
///
/// The sequence matcher's output always ends with a zero-length sentinel at
/// `(old.len(), new.len())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchBlock {
    /// Start index in the old sequence
    pub old_index: usize,
    /// Start index in the new sequence
    pub new_index: usize,
    /// Number of matching lines
    pub len: usize,
}

impl MatchBlock {
    pub fn new(old_index: usize, new_index: usize, len: usize) -> Self {
        Self {
            old_index,
            new_index,
            len,
        }
    }

    /// One past the last old index covered by this block
    pub fn old_end(&self) -> usize {
        self.old_index + self.len
    }

    /// One past the last new index covered by this block
    pub fn new_end(&self) -> usize {
        self.new_index + self.len
    }
}

/// How one old range relates to one new range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpTag {
    /// Both ranges hold the same lines
    Equal,
    /// Old range is empty; new range was added
    Insert,
    /// New range is empty; old range was removed
    Delete,
    /// Old range was replaced by the new range
    Replace,
}

/// Instruction relating `old[old_start..old_end]` to `new[new_start..new_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub old_start: usize,
    pub old_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Opcode {
    pub fn new(tag: OpTag, old_start: usize, old_end: usize, new_start: usize, new_end: usize) -> Self {
        Self {
            tag,
            old_start,
            old_end,
            new_start,
            new_end,
        }
    }

    pub fn old_range(&self) -> std::ops::Range<usize> {
        self.old_start..self.old_end
    }

    pub fn new_range(&self) -> std::ops::Range<usize> {
        self.new_start..self.new_end
    }
}

/// Classification of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Present on both sides
    Shared,
    /// Present only in the old text
    Deleted,
    /// Present only in the new text
    Added,
}

/// One line of a rendered diff.
///
/// `Shared` lines carry both numbers, `Deleted` only `old_number`, `Added`
/// only `new_number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffLine {
    /// 1-based line number in the old text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub old_number: Option<usize>,
    /// 1-based line number in the new text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub new_number: Option<usize>,
    /// Line content without its terminator
    pub content: String,
    pub kind: DiffKind,
}

impl DiffLine {
    /// Line present on both sides at the given 0-based indices
    pub fn shared(old_index: usize, new_index: usize, content: &str) -> Self {
        Self {
            old_number: Some(old_index + 1),
            new_number: Some(new_index + 1),
            content: content.to_string(),
            kind: DiffKind::Shared,
        }
    }

    /// Line removed from the old side at the given 0-based index
    pub fn deleted(old_index: usize, content: &str) -> Self {
        Self {
            old_number: Some(old_index + 1),
            new_number: None,
            content: content.to_string(),
            kind: DiffKind::Deleted,
        }
    }

    /// Line added on the new side at the given 0-based index
    pub fn added(new_index: usize, content: &str) -> Self {
        Self {
            old_number: None,
            new_number: Some(new_index + 1),
            content: content.to_string(),
            kind: DiffKind::Added,
        }
    }

    /// True for lines that belong to the old text
    pub fn in_old(&self) -> bool {
        matches!(self.kind, DiffKind::Shared | DiffKind::Deleted)
    }

    /// True for lines that belong to the new text
    pub fn in_new(&self) -> bool {
        matches!(self.kind, DiffKind::Shared | DiffKind::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_number_from_one() {
        let s = DiffLine::shared(0, 2, "x");
        assert_eq!((s.old_number, s.new_number), (Some(1), Some(3)));

        let d = DiffLine::deleted(4, "y");
        assert_eq!((d.old_number, d.new_number), (Some(5), None));
        assert!(d.in_old() && !d.in_new());

        let a = DiffLine::added(0, "z");
        assert_eq!((a.old_number, a.new_number), (None, Some(1)));
        assert!(a.in_new() && !a.in_old());
    }

    #[test]
    fn test_json_omits_absent_side() {
        let json = serde_json::to_string(&DiffLine::added(1, "c")).unwrap();
        assert_eq!(json, r#"{"new_number":2,"content":"c","kind":"added"}"#);
    }
}
