//! Common test utilities for building diagrams and settings.
use sekkei::prelude::*;

/// An editor export with an email field, a validator and a result display.
#[allow(dead_code)]
pub const SIGNUP_DIAGRAM_JSON: &str = r#"
{
  "nodes": [
    {
      "id": "1",
      "type": "input",
      "position": { "x": 100, "y": 100 },
      "data": { "label": "Email", "dataType": "email" }
    },
    {
      "id": "2",
      "type": "process",
      "position": { "x": 300, "y": 100 },
      "data": {
        "label": "Validate",
        "functionName": "validate",
        "dataType": "email",
        "description": "Checks the address format"
      }
    },
    {
      "id": "3",
      "type": "output",
      "position": { "x": 500, "y": 100 },
      "data": { "label": "Result", "componentName": "EmailResult" }
    }
  ],
  "connections": [
    { "id": "e1-2", "source": "1", "target": "2", "sourceHandle": "out", "targetHandle": "in" },
    { "id": "e2-3", "source": "2", "target": "3" }
  ],
  "settings": { "componentName": "SignupForm", "useTypeScript": true, "useHooks": true }
}
"#;

#[allow(dead_code)]
pub fn settings(name: &str) -> GenerationSettings {
    GenerationSettings::new(name)
}

/// One email input wired into one email validator.
#[allow(dead_code)]
pub fn email_nodes() -> Vec<Node> {
    vec![
        Node::new("1", NodeKind::Input)
            .with_label("Email")
            .with_data_type(DataType::Email),
        Node::new("2", NodeKind::Process)
            .with_function_name("validate")
            .with_data_type(DataType::Email),
    ]
}

/// Two inputs and two processes, each process fed by the *second* input.
#[allow(dead_code)]
pub fn cross_wired_diagram() -> Diagram {
    Diagram {
        nodes: vec![
            Node::new("a", NodeKind::Input).with_label("First Name"),
            Node::new("b", NodeKind::Input).with_label("Last Name"),
            Node::new("p1", NodeKind::Process).with_function_name("capitalize"),
            Node::new("p2", NodeKind::Process).with_function_name("trimAll"),
            Node::new("o", NodeKind::Output),
        ],
        edges: vec![
            Edge::new("e1", "b", "p1"),
            Edge::new("e2", "b", "p2"),
            Edge::new("e3", "a", "p2"),
            Edge::new("e4", "p1", "o"),
        ],
    }
}

/// Byte counts of this size base64-encode to just over `encoded` characters.
#[allow(dead_code)]
pub fn image_for_encoded_len(encoded: usize) -> Vec<u8> {
    vec![0xAB; encoded / 4 * 3 + 3]
}
