use super::fragment::{Fragment, FragmentKind};
use super::normalize::{NormalizedGraph, display_name_of, name_of, setter_name};
use super::wiring::Wiring;
use crate::diagram::{DataType, GenerationSettings, Node};

const CONTAINER_CLASS: &str = "p-6 max-w-md mx-auto bg-white rounded-lg shadow-lg";
const FIELD_LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";
const FIELD_INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-blue-500 focus:border-blue-500";
const TRIGGER_CLASS: &str =
    "w-full bg-blue-500 text-white py-2 px-4 rounded-md hover:bg-blue-600 transition-colors";
const DISPLAY_CLASS: &str = "mt-4 p-3 bg-gray-50 border border-gray-200 rounded-md";

/// Assembles the `return ( ... );` block of the component.
///
/// Emits one field per input node, a single trigger when any process node
/// exists, and one static display block per output node.
pub(super) fn assemble_markup(
    graph: &NormalizedGraph<'_>,
    settings: &GenerationSettings,
    wiring: &Wiring,
) -> Fragment {
    let mut out = String::new();
    out.push_str("\n  return (\n");
    out.push_str(&format!("    <div className=\"{}\">\n", CONTAINER_CLASS));

    for node in &graph.inputs {
        push_field(&mut out, node, settings);
    }

    if !graph.processes.is_empty() {
        push_trigger(&mut out, graph, settings, wiring);
    }

    if !graph.outputs.is_empty() {
        out.push_str("      \n");
        out.push_str("      {/* Output section would go here */}\n");
        for node in &graph.outputs {
            push_display(&mut out, node);
        }
    }

    out.push_str("    </div>\n");
    out.push_str("  );\n");
    Fragment::new(FragmentKind::Markup, out)
}

fn input_type(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Email => "email",
        DataType::Number => "number",
        _ => "text",
    }
}

fn label_of(node: &Node) -> Option<&str> {
    node.attributes.label.as_deref().filter(|l| !l.is_empty())
}

fn push_field(out: &mut String, node: &Node, settings: &GenerationSettings) {
    let label = label_of(node);
    let placeholder = label
        .map(str::to_lowercase)
        .unwrap_or_else(|| "input".to_string());

    out.push_str("      <div className=\"mb-4\">\n");
    out.push_str(&format!("        <label className=\"{}\">\n", FIELD_LABEL_CLASS));
    out.push_str(&format!("          {}\n", jsx_text(label.unwrap_or("Input"))));
    out.push_str("        </label>\n");
    out.push_str("        <input\n");
    out.push_str(&format!(
        "          type=\"{}\"\n",
        input_type(node.attributes.data_type())
    ));
    if settings.use_hooks {
        let name = name_of(node);
        out.push_str(&format!("          value={{{}}}\n", name));
        out.push_str(&format!(
            "          onChange={{(e) => {}(e.target.value)}}\n",
            setter_name(&name)
        ));
    }
    out.push_str(&format!("          className=\"{}\"\n", FIELD_INPUT_CLASS));
    out.push_str(&format!(
        "          placeholder=\"Enter {}\"\n",
        jsx_attribute(&placeholder)
    ));
    out.push_str("        />\n");
    out.push_str("      </div>\n");
}

fn push_trigger(
    out: &mut String,
    graph: &NormalizedGraph<'_>,
    settings: &GenerationSettings,
    wiring: &Wiring,
) {
    out.push_str("      <button\n");
    out.push_str("        onClick={() => {\n");
    out.push_str("          try {\n");
    for (index, node) in graph.processes.iter().enumerate() {
        let binding = if index == 0 { "let result" } else { "result" };
        out.push_str(&format!(
            "            {} = {}({});\n",
            binding,
            name_of(node),
            wiring.argument_for(node)
        ));
        out.push_str("            console.log('Processed result:', result);\n");
    }
    if settings.use_type_script {
        out.push_str("            onSubmit?.(result);\n");
    }
    out.push_str("          } catch (error) {\n");
    out.push_str("            console.error('Processing failed:', error);\n");
    out.push_str("          }\n");
    out.push_str("        }}\n");
    out.push_str(&format!("        className=\"{}\"\n", TRIGGER_CLASS));
    out.push_str("      >\n");
    out.push_str("        Process Data\n");
    out.push_str("      </button>\n");
}

fn push_display(out: &mut String, node: &Node) {
    let display_name = display_name_of(node).replace("*/", "* /");
    out.push_str(&format!("      {{/* {} */}}\n", display_name));
    out.push_str(&format!("      <div className=\"{}\">\n", DISPLAY_CLASS));
    out.push_str(&format!(
        "        <h3 className=\"text-sm font-medium text-gray-800\">{}:</h3>\n",
        jsx_text(label_of(node).unwrap_or("Output"))
    ));
    out.push_str("        <p className=\"text-sm text-gray-600\">Results will be displayed here</p>\n");
    out.push_str("      </div>\n");
}

/// Escapes characters that JSX text cannot contain literally.
fn jsx_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn jsx_attribute(text: &str) -> String {
    text.replace('"', "&quot;")
}
