//! Method body boundary location by brace-depth matching.
//!
//! The declaration pass only knows where a method *starts*; the end is
//! recovered textually so the stored code slice stays byte-for-byte
//! identical to the file, comments and whitespace included.

/// Find the ending line of a method by matching braces.
///
/// `lines` is the full source split into physical lines and `start_line` is
/// the 1-based line the declaration starts on. A declaration may run for
/// several lines (generics, multi-line parameter lists) before its body
/// opens, so the scan first advances to the earliest line at or after
/// `start_line` containing `{`. From that line every line adds its `{`
/// count and subtracts its `}` count; the first line where the running
/// depth lands on zero is the inclusive 1-based end line.
///
/// Braces are counted wherever they appear, including inside string
/// literals and comments. Returns `None` for a zero or past-the-end
/// `start_line`, when no opening brace exists at or after it, or when the
/// depth never returns to zero before the file ends.
pub fn locate_method_end(lines: &[&str], start_line: usize) -> Option<usize> {
    if start_line == 0 || start_line > lines.len() {
        return None;
    }

    // Find the first '{' after the method declaration line(s)
    let mut open = start_line - 1;
    while open < lines.len() && !lines[open].contains('{') {
        open += 1;
    }
    if open == lines.len() {
        return None;
    }

    let mut depth: i64 = 0;
    for (i, line) in lines.iter().enumerate().skip(open) {
        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;
        if depth == 0 {
            return Some(i + 1); // 1-based end line, inclusive
        }
    }
    None
}
