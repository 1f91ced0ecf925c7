/// Method declaration extraction
use tree_sitter::Node;

use crate::extractors::base::MethodDeclaration;
use crate::extractors::java::JavaExtractor;

use super::helpers;

/// Build a `MethodDeclaration` from a `method_declaration` node.
pub(super) fn extract_method(extractor: &JavaExtractor, node: Node) -> Option<MethodDeclaration> {
    let name_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "identifier")?;
    let name = extractor.base().get_node_text(&name_node);

    let modifiers = helpers::extract_modifiers(extractor.base(), node);

    // The return type comes before the method name in the AST
    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    let name_index = children.iter().position(|c| c.id() == name_node.id())?;
    let return_type = children[0..name_index]
        .iter()
        .find(|c| helpers::is_type_node(c.kind()))
        .map(|n| extractor.base().get_node_text(n))
        .unwrap_or_else(|| "void".to_string());

    let parameter_types = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "formal_parameters")
        .map(|params| helpers::extract_parameter_types(extractor.base(), params))
        .unwrap_or_default();

    Some(MethodDeclaration {
        name,
        modifiers,
        return_type,
        parameter_types,
        start_line: extractor.base().node_start_line(&node),
    })
}
