//! Syntax validation of generated component source.
//!
//! The generator never checks its own output. Callers hand the text to a
//! [`SourceValidator`], which reports success or failure together with a log
//! of what it did.

use crate::error::CompileError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tree_sitter::{Node, Parser, Tree};

/// The outcome of validating one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl CompilationResult {
    fn failed(error: &CompileError, mut logs: Vec<String>) -> Self {
        let message = error.to_string();
        logs.push(format!("Compilation failed: {}", message));
        Self {
            success: false,
            output: None,
            error: Some(message),
            logs,
        }
    }
}

/// Contract for anything that can check generated source text.
pub trait SourceValidator: Send + Sync {
    fn compile(&self, source: &str, component_name: &str) -> CompilationResult;
}

/// A single syntax problem found in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    /// 1-based line.
    pub line: usize,
    /// 1-based byte column within the line, as tree-sitter reports it.
    /// On lines with non-ASCII text this is not a character count.
    pub column: usize,
    /// Set when the parser inserted a token that the source lacks.
    pub missing: Option<String>,
}

/// Validates TSX (and plain JSX) source with tree-sitter's TSX grammar.
#[derive(Debug, Clone, Default)]
pub struct TsxValidator {
    output_dir: Option<PathBuf>,
}

impl TsxValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also writes each successfully validated file to `<dir>/<name>.tsx`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    fn parse(source: &str) -> Result<Tree, CompileError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|_| CompileError::ParserInitFailed)?;
        parser.parse(source, None).ok_or(CompileError::ParseFailed)
    }

    /// Returns every syntax problem in document order.
    pub fn diagnostics(source: &str) -> Result<Vec<SyntaxDiagnostic>, CompileError> {
        let tree = Self::parse(source)?;
        let root = tree.root_node();
        if !root.has_error() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        let mut stack: Vec<Node> = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                let start = node.start_position();
                found.push(SyntaxDiagnostic {
                    line: start.row + 1,
                    column: start.column + 1,
                    missing: node.is_missing().then(|| node.kind().to_string()),
                });
                continue;
            }
            if node.has_error() {
                let mut cursor = node.walk();
                let children: Vec<Node> = node.children(&mut cursor).collect();
                // Reversed so the stack pops them in source order
                stack.extend(children.into_iter().rev());
            }
        }
        Ok(found)
    }

    fn write_output(
        &self,
        source: &str,
        component_name: &str,
    ) -> Result<Option<String>, CompileError> {
        let Some(dir) = &self.output_dir else {
            return Ok(None);
        };
        fs::create_dir_all(dir).map_err(|source| CompileError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(format!("{}.tsx", sanitize_filename(component_name)));
        fs::write(&path, source).map_err(|source| CompileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(path.display().to_string()))
    }
}

impl SourceValidator for TsxValidator {
    fn compile(&self, source: &str, component_name: &str) -> CompilationResult {
        let mut logs = Vec::new();
        if component_name.trim().is_empty() {
            return CompilationResult::failed(&CompileError::MissingComponentName, logs);
        }
        logs.push(format!("Starting compilation for {}...", component_name));

        let diagnostics = match Self::diagnostics(source) {
            Ok(diagnostics) => diagnostics,
            Err(e) => return CompilationResult::failed(&e, logs),
        };

        if let Some(first) = diagnostics.first() {
            for d in &diagnostics {
                match &d.missing {
                    Some(token) => logs.push(format!(
                        "Missing `{}` at line {}, column {}",
                        token, d.line, d.column
                    )),
                    None => logs.push(format!(
                        "Unexpected syntax at line {}, column {}",
                        d.line, d.column
                    )),
                }
            }
            warn!(
                component = component_name,
                diagnostics = diagnostics.len(),
                "generated source failed validation"
            );
            let error = CompileError::Syntax {
                line: first.line,
                column: first.column,
            };
            return CompilationResult::failed(&error, logs);
        }

        logs.push("TSX parse successful".to_string());
        logs.push(format!("Component {} generated successfully", component_name));

        match self.write_output(source, component_name) {
            Ok(Some(path)) => logs.push(format!("Code written to {}", path)),
            Ok(None) => {}
            Err(e) => return CompilationResult::failed(&e, logs),
        }

        logs.push("Component ready for testing".to_string());
        info!(component = component_name, "generated source validated");

        CompilationResult {
            success: true,
            output: Some(source.to_string()),
            error: None,
            logs,
        }
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
}
