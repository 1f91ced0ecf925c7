//! ExtractorManager - Public API for method declaration extraction
//!
//! Handles file parsing and delegates to the language-specific extractor.
//! Callers hand in `(file_path, content)` pairs; the path is used for
//! language detection and log context only, never opened.

use std::path::Path;
use tree_sitter::Parser;

use crate::extractors::base::MethodDeclaration;
use crate::extractors::java::JavaExtractor;

/// Stateless manager that owns parser setup and extractor dispatch.
pub struct ExtractorManager {}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Get supported languages.
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["java"]
    }

    /// Extract method declarations from file content.
    ///
    /// Unsupported extensions and unparseable files error; the caller skips
    /// the file. A parseable file with no methods yields an empty vec.
    pub fn extract_declarations(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<Vec<MethodDeclaration>, anyhow::Error> {
        let language = self.get_language_from_extension(file_path)?;

        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(&language)?;
        parser.set_language(&tree_sitter_language).map_err(|e| {
            anyhow::anyhow!("Failed to set parser language for {}: {}", language, e)
        })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse file: {}", file_path))?;

        let extractor = JavaExtractor::new(language.clone(), file_path.to_string(), content.to_string());
        let declarations = extractor.extract_declarations(&tree);

        tracing::debug!(
            "Extracted {} method declarations from {} file: {}",
            declarations.len(),
            language,
            file_path
        );
        Ok(declarations)
    }

    /// Determine language from file extension.
    fn get_language_from_extension(&self, file_path: &str) -> Result<String, anyhow::Error> {
        let path = Path::new(file_path);
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let language = crate::language::detect_language_from_extension(extension)
            .ok_or_else(|| anyhow::anyhow!("Unsupported file extension: {}", extension))?;

        Ok(language.to_string())
    }
}
