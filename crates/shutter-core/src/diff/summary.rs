//! Plain-text summaries of a line diff.
//!
//! Colour, box drawing and width handling belong to the terminal renderer;
//! everything here is plain text suitable for logs and golden files.

use serde::{Deserialize, Serialize};

use crate::diff::model::{DiffKind, DiffLine};

/// Line counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub shared: usize,
    pub deleted: usize,
    pub added: usize,
}

impl DiffStats {
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind {
                DiffKind::Shared => stats.shared += 1,
                DiffKind::Deleted => stats.deleted += 1,
                DiffKind::Added => stats.added += 1,
            }
            stats
        })
    }

    /// True when the new text matches the accepted one line for line.
    pub fn is_unchanged(&self) -> bool {
        self.deleted == 0 && self.added == 0
    }

    /// Lines in the old text
    pub fn old_len(&self) -> usize {
        self.shared + self.deleted
    }

    /// Lines in the new text
    pub fn new_len(&self) -> usize {
        self.shared + self.added
    }
}

/// Format a half-open range in unified-diff ("ed") notation.
///
/// ```
/// use shutter_core::diff::summary::format_range_unified;
///
/// assert_eq!(format_range_unified(3, 4), "4");
/// assert_eq!(format_range_unified(3, 6), "4,3");
/// assert_eq!(format_range_unified(3, 3), "3,0");
/// ```
pub fn format_range_unified(start: usize, stop: usize) -> String {
    let beginning = start + 1;
    let length = stop.saturating_sub(start);
    match length {
        1 => beginning.to_string(),
        0 => format!("{},0", beginning - 1),
        _ => format!("{},{}", beginning, length),
    }
}

/// One-line count summary, e.g. `"2 shared, 1 deleted, 1 added"`.
pub fn render_summary(stats: &DiffStats) -> String {
    format!(
        "{} shared, {} deleted, {} added",
        stats.shared, stats.deleted, stats.added
    )
}

/// Render diff lines as numbered rows.
///
/// Each row is `<old> <new> <marker> <content>` with both number columns
/// right-aligned to the widest number and left blank when absent. Markers are
/// `-` for deleted, `+` for added and a space for shared lines.
pub fn render_plain(lines: &[DiffLine]) -> String {
    let widest = lines
        .iter()
        .flat_map(|l| [l.old_number, l.new_number])
        .flatten()
        .max()
        .unwrap_or(0);
    let width = widest.to_string().len();

    let mut out = String::new();
    for line in lines {
        let marker = match line.kind {
            DiffKind::Shared => ' ',
            DiffKind::Deleted => '-',
            DiffKind::Added => '+',
        };
        let old = line.old_number.map(|n| n.to_string()).unwrap_or_default();
        let new = line.new_number.map(|n| n.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{old:>width$} {new:>width$} {marker} {}\n",
            line.content
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiffLine> {
        vec![
            DiffLine::shared(0, 0, "line1"),
            DiffLine::deleted(1, "line2"),
            DiffLine::added(1, "modified"),
            DiffLine::shared(2, 2, "line3"),
        ]
    }

    #[test]
    fn test_stats_count_each_kind() {
        let stats = DiffStats::from_lines(&sample());
        assert_eq!(
            stats,
            DiffStats {
                shared: 2,
                deleted: 1,
                added: 1
            }
        );
        assert!(!stats.is_unchanged());
        assert_eq!(stats.old_len(), 3);
        assert_eq!(stats.new_len(), 3);
    }

    #[test]
    fn test_empty_diff_is_unchanged() {
        assert!(DiffStats::from_lines(&[]).is_unchanged());
    }

    #[test]
    fn test_format_range_unified_at_file_start() {
        assert_eq!(format_range_unified(0, 0), "0,0");
        assert_eq!(format_range_unified(0, 1), "1");
        assert_eq!(format_range_unified(0, 5), "1,5");
    }

    #[test]
    fn test_render_summary() {
        assert_eq!(
            render_summary(&DiffStats::from_lines(&sample())),
            "2 shared, 1 deleted, 1 added"
        );
    }

    #[test]
    fn test_render_plain_aligns_columns() {
        let rendered = render_plain(&sample());
        assert_eq!(
            rendered,
            "1 1   line1\n2   - line2\n  2 + modified\n3 3   line3\n"
        );
    }

    #[test]
    fn test_render_plain_empty() {
        assert_eq!(render_plain(&[]), "");
    }
}
