// Shared extractor state and the data structures flowing through the
// extraction pipeline.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A parsed method declaration, before its body has been recovered.
///
/// Carries exactly what the pipeline needs: identity, the pieces of the
/// display signature, and the 1-based line the declaration starts on. Body
/// positions are deliberately absent; the end line is recovered textually
/// by brace matching so the stored slice mirrors the file byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    /// Method name as it appears in code.
    pub name: String,
    /// Declared keyword modifiers in source order (public, static, ...).
    pub modifiers: Vec<String>,
    /// Declared return type text; `void` for void methods.
    pub return_type: String,
    /// Declared parameter types in source order, names excluded.
    pub parameter_types: Vec<String>,
    /// 1-based line the declaration starts on.
    pub start_line: usize,
}

impl MethodDeclaration {
    /// Render the one-line display signature, e.g.
    /// `public static int clamp(int, int, int)`.
    pub fn signature(&self) -> String {
        let modifier_str = if self.modifiers.is_empty() {
            String::new()
        } else {
            format!("{} ", self.modifiers.join(" "))
        };
        format!(
            "{}{} {}({})",
            modifier_str,
            self.return_type,
            self.name,
            self.parameter_types.join(", ")
        )
    }
}

/// One extracted method, ready for provenance attachment downstream.
///
/// `original_code` is the exact newline-joined source slice
/// `lines[start_line-1 ..= end_line-1]`, comments and whitespace included;
/// `code_tokens` is its lexical token stream. The persistence stage owns
/// repository/file/commit provenance and the serialization format, hence
/// the serde derives and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Method name as it appears in code.
    pub method_name: String,
    /// 1-based line the declaration starts on.
    pub start_line: usize,
    /// 1-based line the body closes on, inclusive.
    pub end_line: usize,
    /// One-line display signature.
    pub signature: String,
    /// Exact source slice of the method, comments included.
    pub original_code: String,
    /// Lexical token stream of `original_code`.
    pub code_tokens: Vec<String>,
}

/// Base state for language extractors.
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node.
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Byte slice with the UTF-8 boundary handled leniently
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// 1-based line a node starts on.
    pub fn node_start_line(&self, node: &Node) -> usize {
        node.start_position().row + 1
    }
}
