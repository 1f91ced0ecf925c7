//! Language Support - Shared tree-sitter language configuration
//!
//! Centralized so parser setup and extension detection stay in one place.
//! The dataset builder currently harvests Java only; adding a language means
//! adding its grammar crate here and an extractor under `extractors`.

use anyhow::Result;

/// Get the tree-sitter language parser for a given language name.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: java",
            language
        )),
    }
}

/// Detect language from file extension.
///
/// Returns the language name that can be passed to
/// `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_from_extension() {
        assert_eq!(detect_language_from_extension("java"), Some("java"));
        assert_eq!(detect_language_from_extension("py"), None);
        assert_eq!(detect_language_from_extension(""), None);
    }

    #[test]
    fn test_unsupported_language_errors() {
        assert!(get_tree_sitter_language("java").is_ok());
        assert!(get_tree_sitter_language("cobol").is_err());
    }
}
