//! Tests for component generation: ordering, inclusion rules and naming.
mod common;
use common::*;
use sekkei::error::GenerateError;
use sekkei::prelude::*;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_empty_diagram_renders_skeleton() {
    let code = generate(&[], &[], &settings("Foo")).unwrap();

    let expected = concat!(
        "import React, { useState, useCallback } from 'react';\n\n",
        "interface FooProps {\n  onSubmit?: (data: any) => void;\n}\n\n",
        "const Foo: React.FC<FooProps> = ({ onSubmit }) => {\n",
        "\n  return (\n",
        "    <div className=\"p-6 max-w-md mx-auto bg-white rounded-lg shadow-lg\">\n",
        "    </div>\n",
        "  );\n",
        "};\n\n",
        "export default Foo;",
    );
    assert_eq!(code, expected);
    assert!(!code.contains("useState<"));
    assert!(!code.contains("useCallback(("));
}

#[test]
fn test_email_input_and_validator() {
    let code = generate(&email_nodes(), &[], &settings("SignupForm")).unwrap();

    assert!(code.contains("  const [email, setEmail] = useState<string>(\"\");\n"));
    assert!(code.contains("  const validate = useCallback((input: string) => {\n"));
    assert!(code.contains("    // Process the input data\n"));
    assert!(code.contains("const emailRegex = /^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$/;"));
    assert!(code.contains("throw new Error('Invalid email format');"));
    assert!(code.contains("return input.toLowerCase().trim();"));
    assert!(code.contains("            let result = validate(email);\n"));
    assert!(code.contains("            onSubmit?.(result);\n"));
    assert!(code.contains("          type=\"email\"\n"));
    assert!(code.contains("          value={email}\n"));
    assert!(code.contains("          onChange={(e) => setEmail(e.target.value)}\n"));
    assert!(code.contains("          placeholder=\"Enter email\"\n"));
    assert!(code.ends_with("export default SignupForm;"));
}

#[test]
fn test_duplicate_labels_are_not_deduplicated() {
    let nodes = vec![
        Node::new("1", NodeKind::Input).with_label("Name"),
        Node::new("2", NodeKind::Input).with_label("Name"),
    ];
    let code = generate(&nodes, &[], &settings("Dupes")).unwrap();

    assert_eq!(
        count(&code, "const [name, setName] = useState<string>(\"\");"),
        2
    );
    assert_eq!(count(&code, "value={name}"), 2);
}

#[test]
fn test_output_without_component_name_uses_fallbacks() {
    let nodes = vec![Node::new("1", NodeKind::Output)];
    let code = generate(&nodes, &[], &settings("Report")).unwrap();

    assert!(code.contains("      \n      {/* Output section would go here */}\n"));
    assert!(code.contains("      {/* ResultComponent */}\n"));
    assert!(code.contains("<h3 className=\"text-sm font-medium text-gray-800\">Output:</h3>"));
    assert!(code.contains("Results will be displayed here"));
    // No trigger without a process node, so nothing binds to a result
    assert!(!code.contains("<button"));
    assert!(!code.contains("onSubmit?.("));
}

#[test]
fn test_blank_component_name_is_rejected() {
    for name in ["", "   "] {
        let err = generate(&email_nodes(), &[], &settings(name)).unwrap_err();
        assert_eq!(err, GenerateError::MissingComponentName);

        let fragments = Generator::new(settings(name)).fragments(&email_nodes(), &[]);
        assert!(fragments.is_err());
    }
}

#[test]
fn test_generation_is_deterministic() {
    let diagram = cross_wired_diagram();
    let generator = Generator::new(settings("Repeat").with_mode(GenerationMode::Connected));

    let first = generator.generate_diagram(&diagram).unwrap();
    let second = generator.generate_diagram(&diagram).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_flat_mode_ignores_edges() {
    let diagram = cross_wired_diagram();
    let settings = settings("Flat");

    let with_edges = generate(&diagram.nodes, &diagram.edges, &settings).unwrap();
    let without_edges = generate(&diagram.nodes, &[], &settings).unwrap();
    assert_eq!(with_edges, without_edges);

    // Every handler receives the first input
    assert!(with_edges.contains("let result = capitalize(firstname);"));
    assert!(with_edges.contains("result = trimAll(firstname);"));
}

#[test]
fn test_connected_mode_follows_edges() {
    let diagram = cross_wired_diagram();
    let settings = settings("Wired").with_mode(GenerationMode::Connected);
    let code = generate(&diagram.nodes, &diagram.edges, &settings).unwrap();

    // The first matching edge in edge order wins
    assert!(code.contains("let result = capitalize(lastname);"));
    assert!(code.contains("            result = trimAll(lastname);\n"));
}

#[test]
fn test_connected_mode_skips_dangling_edges() {
    let nodes = vec![
        Node::new("in", NodeKind::Input).with_label("Email"),
        Node::new("p", NodeKind::Process).with_function_name("check"),
    ];
    let edges = vec![
        Edge::new("x1", "ghost", "p"),
        Edge::new("x2", "in", "nowhere"),
    ];
    let settings = settings("Dangling").with_mode(GenerationMode::Connected);
    let code = generate(&nodes, &edges, &settings).unwrap();

    // Unwired handlers fall back to the first input
    assert!(code.contains("let result = check(email);"));
}

#[test]
fn test_partition_keeps_relative_order() {
    let nodes = vec![
        Node::new("1", NodeKind::Process).with_function_name("second"),
        Node::new("2", NodeKind::Input).with_label("Beta"),
        Node::new("3", NodeKind::Datastore),
        Node::new("4", NodeKind::Input).with_label("Alpha"),
        Node::new("5", NodeKind::Process).with_function_name("first"),
    ];
    let code = generate(&nodes, &[], &settings("Ordered")).unwrap();

    let beta = code.find("const [beta, setBeta]").unwrap();
    let alpha = code.find("const [alpha, setAlpha]").unwrap();
    assert!(beta < alpha);

    let second = code.find("const second = useCallback").unwrap();
    let first = code.find("const first = useCallback").unwrap();
    assert!(second < first);

    // All states come before any handler
    assert!(alpha < second);
}

#[test]
fn test_fragment_order() {
    let generator = Generator::new(settings("Ordered"));
    let mut nodes = email_nodes();
    nodes.push(Node::new("3", NodeKind::Output));
    let fragments = generator.fragments(&nodes, &[]).unwrap();

    let kinds: Vec<FragmentKind> = fragments.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FragmentKind::Import,
            FragmentKind::PropsType,
            FragmentKind::Header,
            FragmentKind::State,
            FragmentKind::Handler,
            FragmentKind::Markup,
            FragmentKind::BodyEnd,
            FragmentKind::Export,
        ]
    );
}

#[test]
fn test_hooks_disabled_suppresses_state_and_handlers() {
    let settings = settings("Static").with_hooks(false);
    let code = generate(&email_nodes(), &[], &settings).unwrap();

    assert!(code.starts_with("import React from 'react';\n\n"));
    assert!(!code.contains("useState"));
    assert!(!code.contains("useCallback"));
    assert!(!code.contains("value={"));
    assert!(!code.contains("onChange="));
    // The field itself is still rendered
    assert!(code.contains("          type=\"email\"\n"));

    let kinds: Vec<FragmentKind> = Generator::new(settings)
        .fragments(&email_nodes(), &[])
        .unwrap()
        .iter()
        .map(|f| f.kind)
        .collect();
    assert!(!kinds.contains(&FragmentKind::State));
    assert!(!kinds.contains(&FragmentKind::Handler));
}

#[test]
fn test_typescript_disabled_suppresses_types() {
    let settings = settings("Plain").with_type_script(false);
    let code = generate(&email_nodes(), &[], &settings).unwrap();

    assert!(!code.contains("interface PlainProps"));
    assert!(code.contains("const Plain = (props) => {\n"));
    assert!(code.contains("  const [email, setEmail] = useState(\"\");\n"));
    assert!(code.contains("useCallback((input) => {"));
    assert!(!code.contains("onSubmit"));
    assert!(!code.contains(": string"));
}

#[test]
fn test_non_email_handler_only_trims() {
    let nodes = vec![
        Node::new("1", NodeKind::Process)
            .with_data_type(DataType::Number)
            .with_description("Parses the\nnumber"),
    ];
    let code = generate(&nodes, &[], &settings("Numbers")).unwrap();

    assert!(code.contains("  const processData = useCallback((input: string) => {\n"));
    assert!(code.contains("    // Parses the number\n"));
    assert!(code.contains("    return input.trim();\n"));
    assert!(!code.contains("emailRegex"));
    // No input nodes, so the trigger passes the fallback state name
    assert!(code.contains("let result = processData(input);"));
}

#[test]
fn test_datastore_nodes_emit_nothing() {
    let nodes = vec![Node::new("db", NodeKind::Datastore).with_label("Users")];
    let with_store = generate(&nodes, &[], &settings("Store")).unwrap();
    let without = generate(&[], &[], &settings("Store")).unwrap();
    assert_eq!(with_store, without);
}

#[test]
fn test_labels_are_escaped_in_markup() {
    let nodes = vec![
        Node::new("1", NodeKind::Input).with_label("Size <cm> {max}"),
        Node::new("2", NodeKind::Output)
            .with_label("Say \"hi\"")
            .with_component_name("Bad*/Name"),
    ];
    let code = generate(&nodes, &[], &settings("Escapes")).unwrap();

    assert!(code.contains("          Size &lt;cm&gt; &#123;max&#125;\n"));
    assert!(code.contains("placeholder=\"Enter size <cm> {max}\""));
    assert!(code.contains("{/* Bad* /Name */}"));
    assert!(code.contains(">Say \"hi\":</h3>"));
}

#[test]
fn test_number_input_field_type() {
    let nodes = vec![
        Node::new("1", NodeKind::Input)
            .with_label("Age")
            .with_data_type(DataType::Number),
        Node::new("2", NodeKind::Input).with_data_type(DataType::Boolean),
    ];
    let code = generate(&nodes, &[], &settings("Ages")).unwrap();

    assert!(code.contains("          type=\"number\"\n"));
    assert!(code.contains("          type=\"text\"\n"));
    // Unlabelled input falls back to the default field text and name
    assert!(code.contains("          Input\n"));
    assert!(code.contains("const [input, setInput]"));
    assert!(code.contains("placeholder=\"Enter input\""));
}

#[test]
fn test_description_line_separators_stay_in_comment() {
    let nodes = vec![
        Node::new("1", NodeKind::Process)
            .with_function_name("format")
            .with_description("first\u{2028}oops = ;\u{2029}second"),
    ];
    let code = generate(&nodes, &[], &settings("Separators")).unwrap();

    assert!(code.contains("    // first oops = ; second\n"));
    assert!(!code.contains('\u{2028}'));
    assert!(!code.contains('\u{2029}'));

    let result = TsxValidator::new().compile(&code, "Separators");
    assert!(result.success, "{:?}", result.error);
}
