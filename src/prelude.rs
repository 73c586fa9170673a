//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the sekkei crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use sekkei::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/diagram.json")?;
//! let raw = UiDiagram::from_json(&json)?;
//! let settings = raw.settings.clone().unwrap_or_else(|| GenerationSettings::new("MyForm"));
//! let diagram = raw.into_diagram()?;
//!
//! let code = Generator::new(settings).generate_diagram(&diagram)?;
//! println!("{}", code);
//! # Ok(())
//! # }
//! ```

// Core generation
pub use crate::generator::{Fragment, FragmentKind, Generator, generate};

// Diagram model
pub use crate::diagram::{
    CodeArtifact, DataType, Diagram, Edge, GenerationMode, GenerationSettings, IntoDiagram, Node,
    NodeAttributes, NodeKind, Position, SourceKind,
};
pub use crate::ui::UiDiagram;

// Collaborators
pub use crate::compile::{CompilationResult, SourceValidator, TsxValidator};
pub use crate::mockup::{MockupAnalysis, MockupAnalyzer};
pub use crate::store::{DiagramStore, MemoryStore};

// Error types
pub use crate::error::{DiagramConversionError, GenerateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
