//! Builders for the individual pieces of a generated component file.
//!
//! Every builder returns a [`Fragment`]. The generator decides which builders
//! run and in what order; rendering is plain concatenation.

use crate::diagram::{DataType, GenerationSettings, Node};
use super::normalize::{name_of, setter_name};

/// The declaration kind a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Import,
    PropsType,
    Header,
    State,
    Handler,
    Markup,
    BodyEnd,
    Export,
}

/// One ordered piece of emitted source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Concatenates fragments in order.
pub fn render(fragments: &[Fragment]) -> String {
    let mut out = String::with_capacity(fragments.iter().map(|f| f.text.len()).sum());
    for fragment in fragments {
        out.push_str(&fragment.text);
    }
    out
}

pub fn import(settings: &GenerationSettings) -> Fragment {
    let hooks = if settings.use_hooks {
        ", { useState, useCallback }"
    } else {
        ""
    };
    Fragment::new(
        FragmentKind::Import,
        format!("import React{} from 'react';\n\n", hooks),
    )
}

pub fn props_type(component_name: &str) -> Fragment {
    Fragment::new(
        FragmentKind::PropsType,
        format!(
            "interface {}Props {{\n  onSubmit?: (data: any) => void;\n}}\n\n",
            component_name
        ),
    )
}

pub fn header(component_name: &str, settings: &GenerationSettings) -> Fragment {
    let text = if settings.use_type_script {
        format!(
            "const {name}: React.FC<{name}Props> = ({{ onSubmit }}) => {{\n",
            name = component_name
        )
    } else {
        format!("const {} = (props) => {{\n", component_name)
    };
    Fragment::new(FragmentKind::Header, text)
}

/// `const [email, setEmail] = useState<string>("");`
///
/// The declared type is always `string`, whatever the node's data type.
pub fn state(node: &Node, settings: &GenerationSettings) -> Fragment {
    let name = name_of(node);
    let annotation = if settings.use_type_script { "<string>" } else { "" };
    Fragment::new(
        FragmentKind::State,
        format!(
            "  const [{}, {}] = useState{}(\"\");\n",
            name,
            setter_name(&name),
            annotation
        ),
    )
}

/// A memoized single-argument handler for a process node.
pub fn handler(node: &Node, settings: &GenerationSettings) -> Fragment {
    let param = if settings.use_type_script {
        "input: string"
    } else {
        "input"
    };
    let comment = node
        .attributes
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(single_line)
        .unwrap_or_else(|| "Process the input data".to_string());

    let mut text = format!(
        "\n  const {} = useCallback(({}) => {{\n    // {}\n",
        name_of(node),
        param,
        comment
    );
    if node.attributes.data_type() == DataType::Email {
        text.push_str("    const emailRegex = /^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$/;\n");
        text.push_str("    if (!emailRegex.test(input)) {\n");
        text.push_str("      throw new Error('Invalid email format');\n");
        text.push_str("    }\n");
        text.push_str("    return input.toLowerCase().trim();\n");
    } else {
        text.push_str("    return input.trim();\n");
    }
    text.push_str("  }, []);\n");

    Fragment::new(FragmentKind::Handler, text)
}

pub fn body_end() -> Fragment {
    Fragment::new(FragmentKind::BodyEnd, "};\n\n")
}

pub fn export(component_name: &str) -> Fragment {
    Fragment::new(
        FragmentKind::Export,
        format!("export default {};", component_name),
    )
}

// A line comment ends at the first line terminator, including U+2028 and U+2029
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n', '\u{2028}', '\u{2029}'], " ")
}
