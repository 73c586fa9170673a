use super::normalize::{NormalizedGraph, name_of};
use crate::diagram::{Edge, Node};
use ahash::AHashMap;

/// Decides which input state each process handler receives inside the trigger.
pub(super) struct Wiring {
    fallback: String,
    // Key: process node id, Value: derived name of the wired input
    wired: AHashMap<String, String>,
}

impl Wiring {
    /// Every handler receives the first input's state. Edges are not read.
    pub(super) fn flat(graph: &NormalizedGraph<'_>) -> Self {
        Self {
            fallback: graph.first_input_name(),
            wired: AHashMap::new(),
        }
    }

    /// Each handler receives the first input node (in edge order) wired into it.
    /// Edges that point at missing nodes, or that do not run input -> process, are skipped.
    pub(super) fn connected(graph: &NormalizedGraph<'_>, edges: &[Edge]) -> Self {
        let inputs: AHashMap<&str, &Node> = graph
            .inputs
            .iter()
            .map(|node| (node.id.as_str(), *node))
            .collect();
        let processes: AHashMap<&str, &Node> = graph
            .processes
            .iter()
            .map(|node| (node.id.as_str(), *node))
            .collect();

        let mut wired = AHashMap::new();
        for edge in edges {
            let (Some(source), Some(_)) = (
                inputs.get(edge.source_node_id.as_str()),
                processes.get(edge.target_node_id.as_str()),
            ) else {
                continue;
            };
            wired
                .entry(edge.target_node_id.clone())
                .or_insert_with(|| name_of(source));
        }

        Self {
            fallback: graph.first_input_name(),
            wired,
        }
    }

    pub(super) fn argument_for(&self, process: &Node) -> &str {
        self.wired
            .get(&process.id)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }
}
