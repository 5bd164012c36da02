//! Opcode generation from matching blocks.

use crate::diff::model::{MatchBlock, OpTag, Opcode};

/// Convert ordered matching blocks into opcodes covering both sequences.
///
/// `blocks` must be ordered, non-overlapping and end with the
/// `(old_len, new_len, 0)` sentinel, as produced by
/// [`SequenceMatcher::matching_blocks`](crate::diff::matcher::SequenceMatcher::matching_blocks).
/// The gap before each block becomes a `Delete`, `Insert` or `Replace`; the
/// block itself becomes an `Equal`.
pub fn opcodes_from_blocks(blocks: &[MatchBlock]) -> Vec<Opcode> {
    let mut ops = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        let tag = match (i < block.old_index, j < block.new_index) {
            (true, true) => Some(OpTag::Replace),
            (true, false) => Some(OpTag::Delete),
            (false, true) => Some(OpTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            ops.push(Opcode::new(tag, i, block.old_index, j, block.new_index));
        }
        if block.len > 0 {
            ops.push(Opcode::new(
                OpTag::Equal,
                block.old_index,
                block.old_end(),
                block.new_index,
                block.new_end(),
            ));
        }
        i = block.old_end();
        j = block.new_end();
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(tag: OpTag, i1: usize, i2: usize, j1: usize, j2: usize) -> Opcode {
        Opcode::new(tag, i1, i2, j1, j2)
    }

    #[test]
    fn test_sentinel_only_for_empty_inputs() {
        assert!(opcodes_from_blocks(&[MatchBlock::new(0, 0, 0)]).is_empty());
    }

    #[test]
    fn test_one_sided_inputs() {
        assert_eq!(
            opcodes_from_blocks(&[MatchBlock::new(3, 0, 0)]),
            vec![op(OpTag::Delete, 0, 3, 0, 0)]
        );
        assert_eq!(
            opcodes_from_blocks(&[MatchBlock::new(0, 2, 0)]),
            vec![op(OpTag::Insert, 0, 0, 0, 2)]
        );
    }

    #[test]
    fn test_gaps_between_blocks() {
        let blocks = [
            MatchBlock::new(1, 0, 2),
            MatchBlock::new(4, 3, 2),
            MatchBlock::new(7, 5, 0),
        ];
        assert_eq!(
            opcodes_from_blocks(&blocks),
            vec![
                op(OpTag::Delete, 0, 1, 0, 0),
                op(OpTag::Equal, 1, 3, 0, 2),
                op(OpTag::Replace, 3, 4, 2, 3),
                op(OpTag::Equal, 4, 6, 3, 5),
                op(OpTag::Delete, 6, 7, 5, 5),
            ]
        );
    }

    #[test]
    fn test_trailing_insert() {
        let blocks = [MatchBlock::new(0, 0, 2), MatchBlock::new(2, 4, 0)];
        assert_eq!(
            opcodes_from_blocks(&blocks),
            vec![op(OpTag::Equal, 0, 2, 0, 2), op(OpTag::Insert, 2, 2, 2, 4)]
        );
    }
}
