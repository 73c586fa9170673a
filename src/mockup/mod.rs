//! Heuristic component skeletons from mockup images.
//!
//! No pixels are inspected. The payload size alone picks a layout, which is
//! then filled with a fixed cycle of page sections.

use crate::error::AnalysisError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

mod template;

use template::Section;

pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";

const COMPLEX_THRESHOLD: usize = 100_000;
const GRID_THRESHOLD: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Vertical,
    Grid,
    Complex,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::Vertical => "vertical",
            Layout::Grid => "grid",
            Layout::Complex => "complex",
        };
        f.write_str(name)
    }
}

/// The structural guess made for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProfile {
    pub layout: Layout,
    pub sections: usize,
    pub has_buttons: bool,
    pub has_images: bool,
}

impl ImageProfile {
    /// Picks a profile from the length of the image's base64 encoding.
    pub fn from_encoded_len(encoded_len: usize) -> Self {
        let (layout, sections, has_images) = if encoded_len > COMPLEX_THRESHOLD {
            (Layout::Complex, 4, true)
        } else if encoded_len > GRID_THRESHOLD {
            (Layout::Grid, 3, false)
        } else {
            (Layout::Vertical, 3, false)
        };
        Self {
            layout,
            sections,
            has_buttons: true,
            has_images,
        }
    }
}

/// The result handed back to the caller of [`MockupAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupAnalysis {
    pub success: bool,
    pub component_name: String,
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MockupAnalysis {
    /// A failed analysis. A blank name falls back to `GeneratedComponent`.
    pub fn failed(component_name: &str, error: &dyn fmt::Display) -> Self {
        let name = resolve_name(component_name);
        warn!(component = name, error = %error, "mockup analysis failed");
        Self {
            success: false,
            component_name: name.to_string(),
            code: String::new(),
            description: "Failed to analyze mockup".to_string(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockupAnalyzer;

impl MockupAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes raw image bytes. A blank name falls back to `GeneratedComponent`.
    pub fn analyze(&self, image: &[u8], component_name: &str) -> MockupAnalysis {
        let name = resolve_name(component_name);
        match self.profile(image) {
            Ok(profile) => {
                debug!(
                    component = name,
                    layout = %profile.layout,
                    sections = profile.sections,
                    "mockup profiled"
                );
                MockupAnalysis {
                    success: true,
                    component_name: name.to_string(),
                    code: render_component(&profile, name),
                    description: describe(&profile, name),
                    error: None,
                }
            }
            Err(e) => MockupAnalysis::failed(name, &e),
        }
    }

    /// Analyzes a base64 payload, with or without a `data:<mime>;base64,` prefix.
    pub fn analyze_base64(&self, payload: &str, component_name: &str) -> MockupAnalysis {
        let encoded = match payload.split_once(',') {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => payload,
        };
        match STANDARD.decode(encoded.trim()) {
            Ok(bytes) => self.analyze(&bytes, component_name),
            Err(e) => MockupAnalysis::failed(
                component_name,
                &AnalysisError::InvalidBase64(e.to_string()),
            ),
        }
    }

    pub fn profile(&self, image: &[u8]) -> Result<ImageProfile, AnalysisError> {
        if image.is_empty() {
            return Err(AnalysisError::EmptyImage);
        }
        let encoded_len = base64::encoded_len(image.len(), true).unwrap_or(usize::MAX);
        Ok(ImageProfile::from_encoded_len(encoded_len))
    }
}

fn resolve_name(component_name: &str) -> &str {
    if component_name.trim().is_empty() {
        DEFAULT_COMPONENT_NAME
    } else {
        component_name
    }
}

fn describe(profile: &ImageProfile, name: &str) -> String {
    format!(
        "Generated {} component with {} layout, {} sections, {}, {}",
        name,
        profile.layout,
        profile.sections,
        if profile.has_buttons {
            "with buttons"
        } else {
            "without buttons"
        },
        if profile.has_images {
            "with images"
        } else {
            "without images"
        }
    )
}

fn render_component(profile: &ImageProfile, name: &str) -> String {
    let mut code = String::new();
    code.push_str("import React from 'react';\n\n");
    code.push_str(&format!("interface {}Props {{\n  className?: string;\n}}\n\n", name));
    code.push_str(&format!(
        "export function {name}({{ className = '' }}: {name}Props) {{\n",
        name = name
    ));
    code.push_str("  return (\n");
    code.push_str(&format!(
        "    <div className={{`{} ${{className}}`}}>\n",
        template::layout_classes(profile.layout)
    ));
    for index in 0..profile.sections {
        code.push_str(&template::section(
            Section::at(index),
            profile.has_buttons,
            profile.has_images,
        ));
    }
    code.push_str("    </div>\n");
    code.push_str("  );\n");
    code.push_str("}\n\n");
    code.push_str(&format!("export default {};", name));
    code
}
