use super::definition::Diagram;
use crate::error::DiagramConversionError;

/// A trait for custom data models that can be converted into a Sekkei `Diagram`.
///
/// This is the extension point that keeps the generator independent of any
/// particular editor export format. By implementing this trait on your own
/// structs, you provide the translation layer into the canonical model.
///
/// # Example
///
/// ```rust,no_run
/// use sekkei::diagram::{Diagram, IntoDiagram, Node, NodeKind};
/// use sekkei::error::DiagramConversionError;
///
/// struct MyField { key: String, caption: String }
/// struct MyForm { fields: Vec<MyField> }
///
/// impl IntoDiagram for MyForm {
///     fn into_diagram(self) -> Result<Diagram, DiagramConversionError> {
///         let nodes = self
///             .fields
///             .into_iter()
///             .map(|f| Node::new(f.key, NodeKind::Input).with_label(f.caption))
///             .collect();
///
///         Ok(Diagram { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoDiagram {
    /// Consumes the object and converts it into a Sekkei diagram.
    fn into_diagram(self) -> Result<Diagram, DiagramConversionError>;
}

impl IntoDiagram for Diagram {
    fn into_diagram(self) -> Result<Diagram, DiagramConversionError> {
        Ok(self)
    }
}
