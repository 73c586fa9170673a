use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sekkei::diagram::{GenerationMode, GenerationSettings, NodeKind};
use sekkei::ui::{UiDiagram, UiEdge, UiNode, UiNodeData, UiPosition};
use std::fs;

const LABELS: [&str; 10] = [
    "Email",
    "First Name",
    "Last Name",
    "Phone Number",
    "Street Address",
    "City",
    "Age",
    "Company",
    "Username",
    "Zip Code",
];
const DATA_TYPES: [&str; 6] = ["string", "number", "boolean", "object", "array", "email"];
const FUNCTION_NAMES: [&str; 6] = [
    "validate",
    "normalize",
    "formatValue",
    "checkInput",
    "sanitize",
    "transform",
];

/// A CLI tool to generate random editor diagrams for the Sekkei generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_diagram.json")]
    output: String,

    /// The minimum number of nodes to generate for each node kind
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of nodes to generate for each node kind
    #[arg(long, default_value_t = 4)]
    max: usize,

    /// Seed for reproducible diagrams
    #[arg(long)]
    seed: Option<u64>,

    /// Component name written into the diagram's settings
    #[arg(long, default_value = "GeneratedForm")]
    component_name: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating new diagram (nodes per kind: {} to {})...",
        cli.min, cli.max
    );

    let nodes = generate_nodes(&mut rng, cli.min, cli.max);
    let edges = generate_edges(&mut rng, &nodes);
    println!("-> Generated {} node(s) and {} edge(s).", nodes.len(), edges.len());

    let diagram = UiDiagram {
        nodes,
        edges,
        settings: Some(
            GenerationSettings::new(cli.component_name)
                .with_type_script(rng.random_bool(0.5))
                .with_hooks(rng.random_bool(0.8))
                .with_mode(if rng.random_bool(0.5) {
                    GenerationMode::Flat
                } else {
                    GenerationMode::Connected
                }),
        ),
    };

    let json_output = serde_json::to_string_pretty(&diagram)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved diagram to '{}'",
        cli.output
    );

    Ok(())
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn generate_nodes(rng: &mut StdRng, min: usize, max: usize) -> Vec<UiNode> {
    let mut nodes = Vec::new();
    for kind in NodeKind::ALL {
        let count = rng.random_range(min..=max);
        for _ in 0..count {
            let id = (nodes.len() + 1).to_string();
            let mut data = UiNodeData {
                label: Some(pick(rng, &LABELS).to_string()),
                data_type: Some(pick(rng, &DATA_TYPES).to_string()),
                ..UiNodeData::default()
            };
            match kind {
                NodeKind::Process => {
                    data.function_name = rng
                        .random_bool(0.7)
                        .then(|| pick(rng, &FUNCTION_NAMES).to_string());
                    data.description = rng
                        .random_bool(0.5)
                        .then(|| format!("Processes the {}", pick(rng, &LABELS).to_lowercase()));
                }
                NodeKind::Output => {
                    data.component_name = rng
                        .random_bool(0.5)
                        .then(|| format!("{}Display", pick(rng, &LABELS).replace(' ', "")));
                }
                NodeKind::Input | NodeKind::Datastore => {}
            }
            nodes.push(UiNode {
                id,
                node_type: kind.as_str().to_string(),
                label: None,
                position: UiPosition {
                    x: rng.random_range(0.0..1200.0),
                    y: rng.random_range(0.0..800.0),
                },
                data,
            });
        }
        if count > 0 {
            println!("-> Generated {} '{}' node(s).", count, kind);
        }
    }
    nodes
}

/// Wires every process node to a random input and every output to a random process.
fn generate_edges(rng: &mut StdRng, nodes: &[UiNode]) -> Vec<UiEdge> {
    let inputs = of_kind(nodes, NodeKind::Input);
    let processes = of_kind(nodes, NodeKind::Process);
    let outputs = of_kind(nodes, NodeKind::Output);

    let mut edges = Vec::new();
    let mut connect = |source: &UiNode, target: &UiNode| {
        edges.push(UiEdge {
            id: Some(format!("e{}-{}", source.id, target.id)),
            source: source.id.clone(),
            target: target.id.clone(),
            source_handle: None,
            target_handle: None,
        });
    };

    for process in &processes {
        if let Some(input) = inputs.choose(rng) {
            connect(*input, *process);
        }
    }
    for output in &outputs {
        if let Some(process) = processes.choose(rng) {
            connect(*process, *output);
        }
    }
    edges
}

fn of_kind(nodes: &[UiNode], kind: NodeKind) -> Vec<&UiNode> {
    nodes
        .iter()
        .filter(|n| n.node_type == kind.as_str())
        .collect()
}
