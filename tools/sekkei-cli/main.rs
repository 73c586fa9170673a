use clap::{Args, Parser, Subcommand, ValueEnum};
use sekkei::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Flat,
    Connected,
}

impl From<ModeCli> for GenerationMode {
    fn from(mode: ModeCli) -> Self {
        match mode {
            ModeCli::Flat => GenerationMode::Flat,
            ModeCli::Connected => GenerationMode::Connected,
        }
    }
}

/// Generates React component source from node-based UI diagrams
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a component from an editor diagram JSON file
    Generate(GenerateArgs),
    /// Check a component source file for syntax errors
    Compile(CompileArgs),
    /// Produce a component skeleton from a mockup image
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the diagram JSON file
    diagram_path: String,

    /// Overrides the component name from the diagram's settings
    #[arg(short = 'n', long)]
    component_name: Option<String>,

    /// Emit plain JSX without type declarations
    #[arg(long)]
    no_typescript: bool,

    /// Emit a static body without state or memoized handlers
    #[arg(long)]
    no_hooks: bool,

    /// How process handlers are wired to inputs
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,

    /// Write the source here instead of stdout
    #[arg(short, long)]
    out: Option<String>,

    /// Run the syntax validator on the generated source
    #[arg(long)]
    validate: bool,
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Path to the component source file
    source_path: String,

    /// Component name used for logs and the output file name
    #[arg(short = 'n', long)]
    component_name: String,

    /// Directory to copy the validated source into
    #[arg(long)]
    out_dir: Option<String>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the mockup image
    image_path: String,

    /// Name of the generated component
    #[arg(short = 'n', long, default_value = sekkei::mockup::DEFAULT_COMPONENT_NAME)]
    component_name: String,

    /// Write the source here instead of stdout
    #[arg(short, long)]
    out: Option<String>,
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Compile(args) => run_compile(args),
        Command::Analyze(args) => run_analyze(args),
    }
}

/// Log level comes from `RUST_LOG`, defaulting to `info`.
fn init_tracing() -> std::result::Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| format!("Failed to create env filter: {e}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {e}"))
}

fn run_generate(args: GenerateArgs) {
    let total_start = Instant::now();

    // --- 1. Loading and Conversion ---
    let json = fs::read_to_string(&args.diagram_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read diagram file '{}': {}",
            &args.diagram_path, e
        ))
    });
    let raw = UiDiagram::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse diagram: {}", e)));

    // Flags win over the settings stored in the file
    let mut settings = raw
        .settings
        .clone()
        .unwrap_or_else(|| GenerationSettings::new(""));
    if let Some(name) = args.component_name {
        settings.component_name = name;
    }
    if args.no_typescript {
        settings.use_type_script = false;
    }
    if args.no_hooks {
        settings.use_hooks = false;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }

    let diagram = raw
        .into_diagram()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert diagram: {}", e)));

    // --- 2. Generation ---
    let generate_start = Instant::now();
    let code = generate(&diagram.nodes, &diagram.edges, &settings)
        .unwrap_or_else(|e| exit_with_error(&format!("Code generation failed: {}", e)));
    let generate_duration = generate_start.elapsed();

    // --- 3. Optional Validation ---
    if args.validate {
        let result = TsxValidator::new().compile(&code, &settings.component_name);
        for line in &result.logs {
            eprintln!("  {}", line);
        }
        if !result.success {
            exit_with_error(&format!(
                "Validation failed: {}",
                result.error.unwrap_or_default()
            ));
        }
    }

    write_or_print(args.out.as_deref(), &code);

    eprintln!("\n--- Generation Summary ---");
    eprintln!("Component:    {}", settings.component_name);
    eprintln!("Nodes:        {}", diagram.nodes.len());
    eprintln!("Edges:        {}", diagram.edges.len());
    eprintln!("Mode:         {:?}", settings.mode);
    eprintln!("Generation:   {:?}", generate_duration);
    eprintln!("Total:        {:?}", total_start.elapsed());
}

fn run_compile(args: CompileArgs) {
    let source = fs::read_to_string(&args.source_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read source file '{}': {}",
            &args.source_path, e
        ))
    });

    let validator = match args.out_dir {
        Some(dir) => TsxValidator::new().with_output_dir(dir),
        None => TsxValidator::new(),
    };
    let result = validator.compile(&source, &args.component_name);
    for line in &result.logs {
        println!("  {}", line);
    }
    if !result.success {
        exit_with_error(&result.error.unwrap_or_default());
    }
}

fn run_analyze(args: AnalyzeArgs) {
    let image = fs::read(&args.image_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read image '{}': {}",
            &args.image_path, e
        ))
    });

    let analysis = MockupAnalyzer::new().analyze(&image, &args.component_name);
    if !analysis.success {
        exit_with_error(&analysis.error.unwrap_or_default());
    }
    eprintln!("-> {}", analysis.description);
    write_or_print(args.out.as_deref(), &analysis.code);
}

fn write_or_print(out: Option<&str>, code: &str) {
    match out {
        Some(path) => {
            fs::write(path, code).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            eprintln!("  -> Wrote component to '{}'", path);
        }
        None => println!("{}", code),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
