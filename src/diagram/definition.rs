use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete, canonical definition of a diagram, ready for code generation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// The closed set of node kinds a diagram may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Process,
    Output,
    Datastore,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Input,
        NodeKind::Process,
        NodeKind::Output,
        NodeKind::Datastore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Input => "input",
            NodeKind::Process => "process",
            NodeKind::Output => "output",
            NodeKind::Datastore => "datastore",
        }
    }

    /// Parses the editor's node type tag. Returns `None` for anything outside the closed set.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared data type of a node's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
    Email,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Object => "object",
            DataType::Array => "array",
            DataType::Email => "email",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        [
            DataType::String,
            DataType::Number,
            DataType::Boolean,
            DataType::Object,
            DataType::Array,
            DataType::Email,
        ]
        .into_iter()
        .find(|t| t.as_str() == tag)
    }
}

/// Canvas coordinates. Only the editor cares about these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Optional, user-editable attributes attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

impl NodeAttributes {
    /// The declared data type, `string` when unset.
    pub fn data_type(&self) -> DataType {
        self.data_type.unwrap_or_default()
    }
}

/// Defines a single vertex of the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub attributes: NodeAttributes,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            attributes: NodeAttributes::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.attributes.label = Some(label.into());
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.attributes.data_type = Some(data_type);
        self
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.function_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.attributes.description = Some(description.into());
        self
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.component_name = Some(name.into());
        self
    }
}

/// Defines a directed connection between two nodes of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source_node_id: impl Into<String>,
        target_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_node_id: source_node_id.into(),
            target_node_id: target_node_id.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}
