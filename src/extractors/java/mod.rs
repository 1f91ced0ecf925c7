/// Java extractor producing method declarations for the extraction pipeline.
///
/// This module is organized into focused sub-modules:
/// - helpers: Shared utilities (modifiers, type nodes, parameter types)
/// - methods: Method declaration extraction
mod helpers;
mod methods;

use tree_sitter::{Node, Tree};

use crate::extractors::base::{BaseExtractor, MethodDeclaration};

/// Java extractor walking a parse tree for method declarations.
pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    /// Extract every method declaration in the file, in traversal order.
    ///
    /// The walk descends into method bodies too, so methods of nested and
    /// anonymous classes are found. Constructors, initializer blocks, and
    /// field declarations yield nothing.
    pub fn extract_declarations(&self, tree: &Tree) -> Vec<MethodDeclaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), &mut declarations);
        declarations
    }

    fn walk_tree(&self, node: Node, declarations: &mut Vec<MethodDeclaration>) {
        if node.kind() == "method_declaration" {
            if let Some(declaration) = methods::extract_method(self, node) {
                declarations.push(declaration);
            }
        }

        for child in node.children(&mut node.walk()) {
            self.walk_tree(child, declarations);
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
