use crate::diagram::{
    DataType, Diagram, Edge, GenerationSettings, IntoDiagram, Node, NodeAttributes, NodeKind,
    Position,
};
use crate::error::DiagramConversionError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// UI node data as written by the editor's properties panel
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UiNodeData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "dataType")]
    pub data_type: Option<String>,
    #[serde(default, alias = "functionName")]
    pub function_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "componentName")]
    pub component_name: Option<String>,
}

/// Canvas position of a UI node
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// UI node with ID, type tag and data
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    // Older exports carry the label next to the data instead of inside it
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub position: UiPosition,
    #[serde(default)]
    pub data: UiNodeData,
}

/// UI edge connecting two nodes
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete UI diagram export, optionally carrying its generation settings
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UiDiagram {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default, alias = "connections")]
    pub edges: Vec<UiEdge>,
    #[serde(default)]
    pub settings: Option<GenerationSettings>,
}

impl UiDiagram {
    pub fn from_json(json: &str) -> Result<Self, DiagramConversionError> {
        serde_json::from_str(json)
            .map_err(|e| DiagramConversionError::JsonParseError(e.to_string()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl IntoDiagram for UiDiagram {
    fn into_diagram(self) -> Result<Diagram, DiagramConversionError> {
        let mut seen = AHashSet::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for raw in self.nodes {
            if !seen.insert(raw.id.clone()) {
                return Err(DiagramConversionError::DuplicateNodeId(raw.id));
            }
            let kind = NodeKind::parse(&raw.node_type).ok_or_else(|| {
                DiagramConversionError::UnknownNodeKind {
                    node_id: raw.id.clone(),
                    type_name: raw.node_type.clone(),
                }
            })?;
            // Unrecognised tags fall back to the default `string` handling
            let data_type = non_empty(raw.data.data_type).and_then(|tag| {
                let parsed = DataType::parse(&tag);
                if parsed.is_none() {
                    warn!(
                        node = %raw.id,
                        data_type = %tag,
                        "unknown data type, treating as string"
                    );
                }
                parsed
            });

            nodes.push(Node {
                id: raw.id,
                kind,
                position: Position {
                    x: raw.position.x,
                    y: raw.position.y,
                },
                attributes: NodeAttributes {
                    label: raw.data.label.or(raw.label),
                    data_type,
                    function_name: raw.data.function_name,
                    description: raw.data.description,
                    component_name: raw.data.component_name,
                },
            });
        }

        let edges = self
            .edges
            .into_iter()
            .map(|raw| Edge {
                id: raw
                    .id
                    .unwrap_or_else(|| format!("e{}-{}", raw.source, raw.target)),
                source_node_id: raw.source,
                target_node_id: raw.target,
                source_handle: raw.source_handle,
                target_handle: raw.target_handle,
            })
            .collect();

        Ok(Diagram { nodes, edges })
    }
}
