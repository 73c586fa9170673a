use thiserror::Error;

/// Errors that can occur while generating component source from a diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Component name is missing or empty; it is required as an identifier and type name")]
    MissingComponentName,
}

/// Errors that can occur when converting a custom user format into a Sekkei `Diagram`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramConversionError {
    #[error("Failed to parse diagram JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown node type: '{type_name}'")]
    UnknownNodeKind { node_id: String, type_name: String },

    #[error("Node id '{0}' appears more than once in the diagram")]
    DuplicateNodeId(String),

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while persisting or loading a generated code artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Artifact serialization failed: {0}")]
    Encode(String),

    #[error("Artifact deserialization failed: {0}")]
    Decode(String),
}

/// Errors raised by a diagram store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("The store lock was poisoned by a panicking writer")]
    Poisoned,
}

/// Errors raised while dispatching a relayed session message.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Could not decode session message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while validating generated source. They are reported to
/// callers through `CompilationResult::error`, never as a panic.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Component name is required")]
    MissingComponentName,

    #[error("Failed to initialize the TSX parser")]
    ParserInitFailed,

    #[error("Parser produced no syntax tree")]
    ParseFailed,

    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("Could not write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while analyzing a mockup image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Image payload is empty")]
    EmptyImage,

    #[error("Image payload is not valid base64: {0}")]
    InvalidBase64(String),
}
