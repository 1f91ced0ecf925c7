//! Line-count filtering over comment-stripped method bodies.
//!
//! Comments stay in the stored records for the dataset; stripping happens
//! on a throwaway copy used only to decide whether a method carries enough
//! executable code.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::extractors::MethodRecord;

// Line comments run to end of line; block comments are matched non-greedily
// and may span lines.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)//.*?$|/\*.*?\*/").unwrap());

/// Thresholds for the non-comment line-count policy.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    /// Minimum non-blank lines after comment stripping, inclusive.
    pub min_lines: usize,
    /// Maximum non-blank lines after comment stripping, inclusive.
    pub max_lines: usize,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            min_lines: 3,
            max_lines: 100,
        }
    }
}

/// Remove `//` line comments and `/* */` block comments.
///
/// Idempotent pure text transform; callers keep the original text intact.
pub fn strip_comments(source: &str) -> String {
    COMMENT_RE.replace_all(source, "").into_owned()
}

/// Count the non-blank lines that survive comment stripping.
pub fn effective_line_count(source: &str) -> usize {
    strip_comments(source)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Drop methods with no executable code or with an out-of-range body.
///
/// A record is removed when its effective line count is zero (comment-only
/// or empty body) or falls outside `[min_lines, max_lines]`. Order is
/// preserved and nothing is deduplicated here.
pub fn filter_methods(records: Vec<MethodRecord>, policy: &FilterPolicy) -> Vec<MethodRecord> {
    records
        .into_iter()
        .filter(|record| {
            let count = effective_line_count(&record.original_code);
            if count == 0 {
                debug!(
                    "Dropping comment-only method: {} (lines {}-{})",
                    record.method_name, record.start_line, record.end_line
                );
                return false;
            }
            count >= policy.min_lines && count <= policy.max_lines
        })
        .collect()
}
