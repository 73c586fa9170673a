use crate::diagram::{Node, NodeKind};
use itertools::Itertools;

/// Fallback state name for input nodes without a usable name.
pub const DEFAULT_INPUT_NAME: &str = "input";
/// Fallback handler name for process nodes without a `functionName`.
pub const DEFAULT_PROCESS_NAME: &str = "processData";
/// Fallback display name for output nodes without a `componentName`.
pub const DEFAULT_OUTPUT_DISPLAY_NAME: &str = "ResultComponent";

/// A read-only view of the diagram's nodes, partitioned by kind.
///
/// Each partition keeps the relative order the nodes had in the input slice.
#[derive(Debug, Default)]
pub struct NormalizedGraph<'a> {
    pub inputs: Vec<&'a Node>,
    pub processes: Vec<&'a Node>,
    pub outputs: Vec<&'a Node>,
    pub datastores: Vec<&'a Node>,
}

/// Partitions the node list by kind. This is a stable partition, not a sort.
pub fn normalize(nodes: &[Node]) -> NormalizedGraph<'_> {
    let mut groups = nodes.iter().into_group_map_by(|node| node.kind);
    let mut take = |kind: NodeKind| groups.remove(&kind).unwrap_or_default();

    NormalizedGraph {
        inputs: take(NodeKind::Input),
        processes: take(NodeKind::Process),
        outputs: take(NodeKind::Output),
        datastores: take(NodeKind::Datastore),
    }
}

impl<'a> NormalizedGraph<'a> {
    /// The derived name of the first input node, or the input fallback.
    pub fn first_input_name(&self) -> String {
        self.inputs
            .first()
            .map(|node| name_of(node))
            .unwrap_or_else(|| DEFAULT_INPUT_NAME.to_string())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Lowercases a label, then strips every whitespace run from it.
///
/// Lowercasing runs over the whole string so context-sensitive mappings such
/// as the final sigma apply.
fn squash_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| !is_script_whitespace(*c))
        .collect()
}

/// The whitespace set of a JavaScript `\s` class: Unicode whitespace minus
/// U+0085, plus the byte order mark.
fn is_script_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        other => other.is_whitespace(),
    }
}

/// Derives the symbolic name used for a node's state variable or handler.
///
/// Names are never deduplicated against each other.
pub fn name_of(node: &Node) -> String {
    if let Some(name) = non_empty(&node.attributes.function_name) {
        return name.to_string();
    }

    match node.kind {
        // The label is not consulted for handlers
        NodeKind::Process => DEFAULT_PROCESS_NAME.to_string(),
        kind => non_empty(&node.attributes.label)
            .map(squash_label)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| match kind {
                NodeKind::Input => DEFAULT_INPUT_NAME.to_string(),
                other => other.as_str().to_string(),
            }),
    }
}

/// Derives the display name shown for an output node.
pub fn display_name_of(node: &Node) -> String {
    non_empty(&node.attributes.component_name)
        .unwrap_or(DEFAULT_OUTPUT_DISPLAY_NAME)
        .to_string()
}

/// `email` -> `setEmail`
pub fn setter_name(base: &str) -> String {
    let mut chars = base.chars();
    match chars.next() {
        None => "set".to_string(),
        Some(first) => format!("set{}", first.to_uppercase().chain(chars).collect::<String>()),
    }
}
