//! Fixed lexical grammar for method source text.
//!
//! Records carry their code both verbatim and as a flat token stream; the
//! stream is what sequence models consume, so tokens are plain strings with
//! no position metadata.

use regex::Regex;
use std::sync::LazyLock;

// Alternatives are tried left to right at each position: identifiers and
// keywords, integer literals, double- then single-quoted strings
// (non-greedy, may span newlines), the two-character operators, then any
// single non-whitespace character. Whitespace is skipped by non-match.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)[A-Za-z_][A-Za-z0-9_]*|\d+|".*?"|'.*?'|==|!=|<=|>=|&&|\|\||\S"#).unwrap()
});

/// Tokenize method source text into an ordered token stream.
///
/// Quoted literals are matched non-greedily with no escape handling, so an
/// escaped quote inside a literal terminates it early. Every non-whitespace
/// character lands in some token; the function never fails.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
