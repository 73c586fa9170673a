//! Serde models of the diagram editor's JSON export.

mod types;

pub use types::*;
