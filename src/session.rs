//! Message relay between an editor client and the generator.
//!
//! A [`Session`] is built once at process start and owns its collaborators.
//! The transport is represented by a [`Publisher`] handle passed into every
//! call, so nothing here depends on a process-wide connection.

use crate::compile::{CompilationResult, SourceValidator};
use crate::diagram::{CodeArtifact, GenerationSettings, IntoDiagram};
use crate::error::SessionError;
use crate::generator;
use crate::mockup::{MockupAnalysis, MockupAnalyzer};
use crate::store::{DiagramStore, NewCodeArtifact};
use crate::ui::{UiDiagram, UiEdge, UiNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCodeRequest {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default, alias = "edges")]
    pub connections: Vec<UiEdge>,
    pub settings: GenerationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileCodeRequest {
    pub code: String,
    pub component_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMockupRequest {
    /// Base64 image, optionally as a data URL.
    pub image: String,
    #[serde(default)]
    pub component_name: String,
}

/// Messages a client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    GenerateCode(GenerateCodeRequest),
    CompileCode(CompileCodeRequest),
    AnalyzeMockup(AnalyzeMockupRequest),
    SaveCode(NewCodeArtifact),
}

/// Messages published back to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    CodeGenerated {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    CompilationResult(CompilationResult),
    MockupAnalyzed(MockupAnalysis),
    CodeSaved(CodeArtifact),
}

impl ServerMessage {
    pub fn channel(&self) -> &'static str {
        match self {
            ServerMessage::CodeGenerated { .. } => "code-generated",
            ServerMessage::CompilationResult(_) => "compilation-result",
            ServerMessage::MockupAnalyzed(_) => "mockup-analyzed",
            ServerMessage::CodeSaved(_) => "code-saved",
        }
    }

    fn generation_failed(message: impl std::fmt::Display) -> Self {
        ServerMessage::CodeGenerated {
            success: false,
            code: None,
            error: Some(format!("Code generation failed: {}", message)),
        }
    }
}

/// The connection handle a session publishes through.
pub trait Publisher {
    fn publish(&mut self, message: ServerMessage) -> Result<(), SessionError>;
}

/// Collects published messages in memory.
impl Publisher for Vec<ServerMessage> {
    fn publish(&mut self, message: ServerMessage) -> Result<(), SessionError> {
        self.push(message);
        Ok(())
    }
}

pub struct Session {
    validator: Arc<dyn SourceValidator>,
    store: Arc<dyn DiagramStore>,
    analyzer: MockupAnalyzer,
}

impl Session {
    pub fn new(validator: Arc<dyn SourceValidator>, store: Arc<dyn DiagramStore>) -> Self {
        Self {
            validator,
            store,
            analyzer: MockupAnalyzer::new(),
        }
    }

    /// Decodes one raw message, runs it, and publishes the reply.
    ///
    /// A message for a known event that fails to decode still gets a failure
    /// reply on that event's channel. Anything else is returned as an error.
    pub fn handle(&self, publisher: &mut dyn Publisher, raw: &str) -> Result<(), SessionError> {
        let message: ClientMessage = match serde_json::from_str(raw) {
            Ok(message) => message,
            Err(e) => {
                let reply = match event_name(raw).as_deref() {
                    Some("generate-code") => ServerMessage::generation_failed(&e),
                    Some("compile-code") => ServerMessage::CompilationResult(CompilationResult {
                        success: false,
                        output: None,
                        error: Some(format!("Compilation failed: {}", e)),
                        logs: vec![format!("Invalid compile request: {}", e)],
                    }),
                    Some("analyze-mockup") => {
                        ServerMessage::MockupAnalyzed(MockupAnalysis::failed("", &e))
                    }
                    _ => {
                        warn!(error = %e, "dropping undecodable session message");
                        return Err(SessionError::Decode(e));
                    }
                };
                return publisher.publish(reply);
            }
        };

        let reply = self.respond(message)?;
        info!(channel = reply.channel(), "publishing session reply");
        publisher.publish(reply)
    }

    /// Runs one decoded message and returns the reply without publishing it.
    pub fn respond(&self, message: ClientMessage) -> Result<ServerMessage, SessionError> {
        let reply = match message {
            ClientMessage::GenerateCode(request) => self.generate(request),
            ClientMessage::CompileCode(request) => ServerMessage::CompilationResult(
                self.validator.compile(&request.code, &request.component_name),
            ),
            ClientMessage::AnalyzeMockup(request) => ServerMessage::MockupAnalyzed(
                self.analyzer
                    .analyze_base64(&request.image, &request.component_name),
            ),
            ClientMessage::SaveCode(new) => ServerMessage::CodeSaved(self.store.create_code(new)?),
        };
        Ok(reply)
    }

    fn generate(&self, request: GenerateCodeRequest) -> ServerMessage {
        let raw = UiDiagram {
            nodes: request.nodes,
            edges: request.connections,
            settings: None,
        };
        let diagram = match raw.into_diagram() {
            Ok(diagram) => diagram,
            Err(e) => return ServerMessage::generation_failed(e),
        };
        match generator::generate(&diagram.nodes, &diagram.edges, &request.settings) {
            Ok(code) => ServerMessage::CodeGenerated {
                success: true,
                code: Some(code),
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "code generation failed");
                ServerMessage::generation_failed(e)
            }
        }
    }
}

fn event_name(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value.get("event")?.as_str().map(str::to_string)
}
