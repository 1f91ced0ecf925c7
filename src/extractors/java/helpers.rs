/// Helper functions for Java declaration extraction
/// Handles modifiers, type nodes, and parameter type parsing
use tree_sitter::Node;

use crate::extractors::base::BaseExtractor;

/// Extract keyword modifiers from a Java node (public, static, final, etc.).
///
/// Annotations share the `modifiers` node with the keywords but are not
/// part of the display signature, so they are skipped.
pub(super) fn extract_modifiers(base: &BaseExtractor, node: Node) -> Vec<String> {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
        .map(|modifiers_node| {
            modifiers_node
                .children(&mut modifiers_node.walk())
                .filter(|c| !matches!(c.kind(), "marker_annotation" | "annotation"))
                .map(|c| base.get_node_text(&c))
                .collect()
        })
        .unwrap_or_default()
}

/// Node kinds that carry a declared type.
pub(super) fn is_type_node(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier"
            | "generic_type"
            | "void_type"
            | "array_type"
            | "primitive_type"
            | "integral_type"
            | "floating_point_type"
            | "boolean_type"
            | "scoped_type_identifier"
    )
}

/// Extract declared parameter types from a `formal_parameters` node.
pub(super) fn extract_parameter_types(base: &BaseExtractor, params: Node) -> Vec<String> {
    params
        .children(&mut params.walk())
        .filter(|c| matches!(c.kind(), "formal_parameter" | "spread_parameter"))
        .filter_map(|param| declared_type_text(base, param))
        .collect()
}

/// The type portion of a single parameter node.
fn declared_type_text(base: &BaseExtractor, param: Node) -> Option<String> {
    if let Some(type_node) = param.child_by_field_name("type") {
        return Some(base.get_node_text(&type_node));
    }

    // Spread parameters carry no `type` field; take the first type-shaped child
    param
        .children(&mut param.walk())
        .find(|c| is_type_node(c.kind()))
        .map(|c| base.get_node_text(&c))
}
