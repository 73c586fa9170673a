//! Unit tests for core Sekkei functionality.
mod common;
use common::*;
use sekkei::error::{AnalysisError, CompileError};
use sekkei::generator::normalize::{DEFAULT_PROCESS_NAME, NormalizedGraph};
use sekkei::generator::{display_name_of, name_of, normalize, setter_name};
use sekkei::mockup::{ImageProfile, Layout};
use sekkei::prelude::*;

#[test]
fn test_name_of_prefers_function_name() {
    let node = Node::new("1", NodeKind::Input)
        .with_label("Email Address")
        .with_function_name("contact");
    assert_eq!(name_of(&node), "contact");
}

#[test]
fn test_name_of_squashes_input_labels() {
    let node = Node::new("1", NodeKind::Input).with_label("  First \t Name ");
    assert_eq!(name_of(&node), "firstname");

    let blank = Node::new("2", NodeKind::Input).with_label("   ");
    assert_eq!(name_of(&blank), "input");

    let unlabelled = Node::new("3", NodeKind::Input);
    assert_eq!(name_of(&unlabelled), "input");
}

#[test]
fn test_name_of_process_ignores_label() {
    let node = Node::new("1", NodeKind::Process).with_label("Validate");
    assert_eq!(name_of(&node), DEFAULT_PROCESS_NAME);
}

#[test]
fn test_name_of_other_kinds_fall_back_to_kind() {
    assert_eq!(name_of(&Node::new("1", NodeKind::Output)), "output");
    assert_eq!(name_of(&Node::new("2", NodeKind::Datastore)), "datastore");
    assert_eq!(
        name_of(&Node::new("3", NodeKind::Output).with_label("Total Sum")),
        "totalsum"
    );
}

#[test]
fn test_display_name_of() {
    assert_eq!(
        display_name_of(&Node::new("1", NodeKind::Output)),
        "ResultComponent"
    );
    assert_eq!(
        display_name_of(&Node::new("1", NodeKind::Output).with_component_name("Summary")),
        "Summary"
    );
}

#[test]
fn test_setter_name() {
    assert_eq!(setter_name("email"), "setEmail");
    assert_eq!(setter_name("firstname"), "setFirstname");
    assert_eq!(setter_name("Already"), "setAlready");
    assert_eq!(setter_name(""), "set");
}

#[test]
fn test_normalize_partitions_by_kind() {
    let diagram = cross_wired_diagram();
    let graph: NormalizedGraph<'_> = normalize(&diagram.nodes);

    let ids = |nodes: &[&Node]| nodes.iter().map(|n| n.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&graph.inputs), vec!["a", "b"]);
    assert_eq!(ids(&graph.processes), vec!["p1", "p2"]);
    assert_eq!(ids(&graph.outputs), vec!["o"]);
    assert!(graph.datastores.is_empty());
    assert_eq!(graph.first_input_name(), "firstname");

    assert_eq!(normalize(&[]).first_input_name(), "input");
}

#[test]
fn test_node_kind_and_data_type_tags() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(NodeKind::parse("decision"), None);
    assert_eq!(DataType::parse("email"), Some(DataType::Email));
    assert_eq!(DataType::parse("color"), None);
    assert_eq!(NodeAttributes::default().data_type(), DataType::String);
}

#[test]
fn test_settings_defaults_from_json() {
    let settings: GenerationSettings =
        serde_json::from_str(r#"{ "componentName": "Form" }"#).unwrap();
    assert_eq!(settings, GenerationSettings::new("Form"));
    assert_eq!(settings.mode, GenerationMode::Flat);

    let connected: GenerationSettings = serde_json::from_str(
        r#"{ "componentName": "Form", "useTypeScript": false, "useHooks": false, "mode": "connected" }"#,
    )
    .unwrap();
    assert!(!connected.use_type_script);
    assert!(!connected.use_hooks);
    assert_eq!(connected.mode, GenerationMode::Connected);
}

#[test]
fn test_ui_diagram_conversion() {
    let raw = UiDiagram::from_json(SIGNUP_DIAGRAM_JSON).unwrap();
    let settings = raw.settings.clone().unwrap();
    assert_eq!(settings.component_name, "SignupForm");

    let diagram = raw.into_diagram().unwrap();
    assert_eq!(diagram.nodes.len(), 3);
    assert_eq!(diagram.edges.len(), 2);

    let process = &diagram.nodes[1];
    assert_eq!(process.kind, NodeKind::Process);
    assert_eq!(process.attributes.function_name.as_deref(), Some("validate"));
    assert_eq!(process.attributes.data_type(), DataType::Email);
    assert_eq!(process.position, Position { x: 300.0, y: 100.0 });

    let first = &diagram.edges[0];
    assert_eq!(first.source_node_id, "1");
    assert_eq!(first.target_node_id, "2");
    assert_eq!(first.source_handle.as_deref(), Some("out"));
}

#[test]
fn test_ui_conversion_fills_edge_ids_and_legacy_labels() {
    let json = r#"{
        "nodes": [
            { "id": "n1", "type": "input", "label": "Legacy Label" },
            { "id": "n2", "type": "process", "data": { "dataType": "" } }
        ],
        "edges": [ { "source": "n1", "target": "n2" } ]
    }"#;
    let diagram = UiDiagram::from_json(json).unwrap().into_diagram().unwrap();

    assert_eq!(diagram.nodes[0].attributes.label.as_deref(), Some("Legacy Label"));
    assert_eq!(diagram.nodes[1].attributes.data_type, None);
    assert_eq!(diagram.edges[0].id, "en1-n2");
}

#[test]
fn test_ui_conversion_errors() {
    let unknown_kind = r#"{ "nodes": [ { "id": "1", "type": "decision" } ] }"#;
    let err = UiDiagram::from_json(unknown_kind)
        .unwrap()
        .into_diagram()
        .unwrap_err();
    assert!(matches!(err, DiagramConversionError::UnknownNodeKind { .. }));
    assert!(err.to_string().contains("decision"));

    let duplicate = r#"{ "nodes": [
        { "id": "1", "type": "input" },
        { "id": "1", "type": "output" }
    ] }"#;
    let err = UiDiagram::from_json(duplicate)
        .unwrap()
        .into_diagram()
        .unwrap_err();
    assert_eq!(err, DiagramConversionError::DuplicateNodeId("1".to_string()));

    let err = UiDiagram::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DiagramConversionError::JsonParseError(_)));
}

#[test]
fn test_ui_conversion_accepts_unknown_data_types() {
    let json = r#"{ "nodes": [
        { "id": "1", "type": "input", "data": { "label": "When", "dataType": "date" } },
        { "id": "2", "type": "process", "data": { "dataType": "color" } }
    ] }"#;
    let diagram = UiDiagram::from_json(json).unwrap().into_diagram().unwrap();
    assert_eq!(diagram.nodes[0].attributes.data_type, None);
    assert_eq!(diagram.nodes[0].attributes.data_type(), DataType::String);

    let code = generate(&diagram.nodes, &diagram.edges, &settings("Schedule")).unwrap();
    assert!(code.contains("          type=\"text\"\n"));
    assert!(code.contains("    return input.trim();\n"));
    assert!(!code.contains("emailRegex"));
}

#[test]
fn test_name_of_lowercases_before_stripping_whitespace() {
    let sigma = Node::new("1", NodeKind::Input).with_label("ΟΔΟΣ ΑΒ");
    assert_eq!(name_of(&sigma), "οδοςαβ");

    let bom = Node::new("2", NodeKind::Input).with_label("A\u{FEFF}B");
    assert_eq!(name_of(&bom), "ab");

    // U+0085 is not whitespace for a script identifier split
    let nel = Node::new("3", NodeKind::Input).with_label("A\u{0085}B");
    assert_eq!(name_of(&nel), "a\u{0085}b");
}

#[test]
fn test_error_display() {
    let err = CompileError::Syntax { line: 4, column: 12 };
    assert_eq!(err.to_string(), "Syntax error at line 4, column 12");
    assert_eq!(AnalysisError::EmptyImage.to_string(), "Image payload is empty");
}

#[test]
fn test_image_profile_thresholds() {
    let small = ImageProfile::from_encoded_len(1_000);
    assert_eq!(small.layout, Layout::Vertical);
    assert_eq!(small.sections, 3);
    assert!(small.has_buttons);
    assert!(!small.has_images);

    assert_eq!(ImageProfile::from_encoded_len(50_000).layout, Layout::Vertical);
    assert_eq!(ImageProfile::from_encoded_len(50_001).layout, Layout::Grid);
    assert_eq!(ImageProfile::from_encoded_len(100_000).layout, Layout::Grid);

    let large = ImageProfile::from_encoded_len(100_001);
    assert_eq!(large.layout, Layout::Complex);
    assert_eq!(large.sections, 4);
    assert!(large.has_images);
}

#[test]
fn test_analyzer_profiles_encoded_size() {
    let analyzer = MockupAnalyzer::new();
    assert_eq!(
        analyzer.profile(&image_for_encoded_len(100_000)).unwrap().layout,
        Layout::Complex
    );
    assert_eq!(
        analyzer.profile(&image_for_encoded_len(50_000)).unwrap().layout,
        Layout::Grid
    );
    assert_eq!(analyzer.profile(&[1, 2, 3]).unwrap().layout, Layout::Vertical);
    assert!(matches!(analyzer.profile(&[]), Err(AnalysisError::EmptyImage)));
}
