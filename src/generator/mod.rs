use crate::diagram::{Diagram, Edge, GenerationMode, GenerationSettings, Node};
use crate::error::GenerateError;
use tracing::debug;

pub mod fragment;
mod markup;
pub mod normalize;
mod wiring;

pub use fragment::{Fragment, FragmentKind};
pub use normalize::{NormalizedGraph, display_name_of, name_of, normalize, setter_name};

use wiring::Wiring;

/// Turns a diagram into the source text of a single React component.
///
/// A `Generator` holds nothing but its settings snapshot. It never mutates the
/// nodes or edges it is given, so one instance can serve any number of calls,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Generator {
    settings: GenerationSettings,
}

impl Generator {
    pub fn new(settings: GenerationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Builds the ordered fragment list for a diagram.
    ///
    /// Fails only when the component name is blank, before anything is emitted.
    pub fn fragments(
        &self,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Result<Vec<Fragment>, GenerateError> {
        let settings = &self.settings;
        let component_name = settings.validated_component_name()?;

        let graph = normalize(nodes);
        debug!(
            component = component_name,
            inputs = graph.inputs.len(),
            processes = graph.processes.len(),
            outputs = graph.outputs.len(),
            datastores = graph.datastores.len(),
            mode = ?settings.mode,
            "generating component"
        );

        let wiring = match settings.mode {
            GenerationMode::Flat => Wiring::flat(&graph),
            GenerationMode::Connected => Wiring::connected(&graph, edges),
        };

        let mut fragments = Vec::with_capacity(6 + graph.inputs.len() + graph.processes.len());
        fragments.push(fragment::import(settings));
        if settings.use_type_script {
            fragments.push(fragment::props_type(component_name));
        }
        fragments.push(fragment::header(component_name, settings));
        if settings.use_hooks {
            fragments.extend(graph.inputs.iter().map(|node| fragment::state(node, settings)));
            fragments.extend(
                graph
                    .processes
                    .iter()
                    .map(|node| fragment::handler(node, settings)),
            );
        }
        fragments.push(markup::assemble_markup(&graph, settings, &wiring));
        fragments.push(fragment::body_end());
        fragments.push(fragment::export(component_name));

        Ok(fragments)
    }

    /// Generates the complete source text for the given nodes and edges.
    pub fn generate(&self, nodes: &[Node], edges: &[Edge]) -> Result<String, GenerateError> {
        let fragments = self.fragments(nodes, edges)?;
        let code = fragment::render(&fragments);
        debug!(bytes = code.len(), "component generated");
        Ok(code)
    }

    pub fn generate_diagram(&self, diagram: &Diagram) -> Result<String, GenerateError> {
        self.generate(&diagram.nodes, &diagram.edges)
    }
}

/// Generates one component source file from a node list, an edge list and a settings snapshot.
///
/// This is the single entry point shared by direct callers and the message relay.
pub fn generate(
    nodes: &[Node],
    edges: &[Edge],
    settings: &GenerationSettings,
) -> Result<String, GenerateError> {
    Generator::new(settings.clone()).generate(nodes, edges)
}
