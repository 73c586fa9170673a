//! # Sekkei - Diagram to Component Code Generator
//!
//! **Sekkei** turns a node-based UI diagram into the source text of a single
//! React component. The diagram is made of typed nodes (input, process,
//! output, datastore) and directed edges; generation is a pure function of
//! the nodes, the edges and a settings snapshot, so the same inputs always
//! produce byte-identical output.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse the editor export (or your own format) into Rust structs.
//! 2.  **Convert to Sekkei's Model**: Implement `IntoDiagram` for your structs, or use the
//!     bundled `UiDiagram` which already understands the editor's JSON.
//! 3.  **Generate**: Call `generate(nodes, edges, settings)` or keep a `Generator` around.
//! 4.  **Validate**: Hand the text to a `SourceValidator` such as `TsxValidator`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sekkei::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes = vec![
//!         Node::new("1", NodeKind::Input)
//!             .with_label("Email")
//!             .with_data_type(DataType::Email),
//!         Node::new("2", NodeKind::Process)
//!             .with_function_name("validate")
//!             .with_data_type(DataType::Email),
//!         Node::new("3", NodeKind::Output).with_label("Result"),
//!     ];
//!     let edges = vec![Edge::new("e1", "1", "2"), Edge::new("e2", "2", "3")];
//!     let settings = GenerationSettings::new("SignupForm");
//!
//!     let code = generate(&nodes, &edges, &settings)?;
//!
//!     let result = TsxValidator::new().compile(&code, &settings.component_name);
//!     if result.success {
//!         println!("{}", code);
//!     } else {
//!         eprintln!("{:?}", result.error);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Generation Modes
//!
//! `GenerationMode::Flat` groups nodes by kind and never reads the edges.
//! `GenerationMode::Connected` produces the same declarations but passes each
//! process handler the state of the input node wired into it.

pub mod compile;
pub mod diagram;
pub mod error;
pub mod generator;
pub mod mockup;
pub mod prelude;
pub mod session;
pub mod store;
pub mod ui;

pub use generator::{Generator, generate};
