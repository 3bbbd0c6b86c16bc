use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use brine_enumer_compiler::{compile_manifest_to_rust, parse_manifest, summarize_manifest, TypeSummary};
use brine_enumer_compiler::error::EnumerError;
use brine_enumer_compiler::schema::{Config, Manifest, Transform};
use brine_enumer_compiler::verifier::verify_manifest;

#[derive(Parser)]
#[command(name = "benumer")]
#[command(about = "Generate string tables, lookups and serde adapters for Rust enums", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust code from a JSON enum manifest
    Gen {
        /// Input manifest file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.rs` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Parse and verify a manifest, then print what would be generated per type
    Check {
        /// Input manifest file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line settings that take precedence over the manifest's `config`.
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Above this many runs, fall back to one flat table and map
    #[arg(long)]
    runs_threshold: Option<usize>,

    /// Prefix of generated table, map and lookup identifiers
    #[arg(long)]
    prefix: Option<String>,

    /// Emit `to_json` / `from_json`
    #[arg(long)]
    json_adapter: bool,

    /// Emit `FromStr` and `to_text` / `from_text`
    #[arg(long)]
    text_adapter: bool,

    /// Emit serde `Serialize` / `Deserialize`
    #[arg(long)]
    yaml_adapter: bool,

    /// Do not emit the enum declaration, only its impls
    #[arg(long)]
    no_declare: bool,

    /// Path to the runtime crate in generated code
    #[arg(long)]
    runtime: Option<String>,

    /// Display name transform for members without an explicit display string
    #[arg(long)]
    transform: Option<Transform>,

    /// Prefix trimmed from member names before the transform
    #[arg(long)]
    trim_prefix: Option<String>,

    /// Prefix added to display names after the transform
    #[arg(long)]
    add_prefix: Option<String>,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(threshold) = self.runs_threshold {
            config.runs_threshold = threshold;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        config.json |= self.json_adapter;
        config.text |= self.text_adapter;
        config.yaml |= self.yaml_adapter;
        if self.no_declare {
            config.declare = false;
        }
        if let Some(runtime) = &self.runtime {
            config.runtime = runtime.clone();
        }
        if let Some(transform) = self.transform {
            config.transform = transform;
        }
        if let Some(trim) = &self.trim_prefix {
            config.trim_prefix = trim.clone();
        }
        if let Some(add) = &self.add_prefix {
            config.add_prefix = add.clone();
        }
    }
}

/// Logging is off unless `BENUMER_LOG` (or `RUST_LOG`) is set.
fn init_tracing() {
    let filter = match std::env::var("BENUMER_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_)  => match std::env::var("RUST_LOG") {
            Ok(_)  => EnvFilter::from_default_env(),
            Err(_) => return,
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_manifest(input: &Path, overrides: &Overrides) -> Result<Manifest, EnumerError> {
    let text = fs::read_to_string(input).map_err(EnumerError::Io)?;
    let mut manifest = parse_manifest(&text)?;
    overrides.apply(&mut manifest.config);
    verify_manifest(&manifest)?;
    info!(input = %input.display(), types = manifest.enums.len(), "loaded manifest");
    Ok(manifest)
}

/// Pretty JSON for `check --json`.
fn summary_json(summary: &[TypeSummary]) -> Result<String, EnumerError> {
    serde_json::to_string_pretty(summary).map_err(EnumerError::Output)
}

fn main() -> Result<(), EnumerError> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen { input, output, overrides } => {
            let manifest = load_manifest(input, overrides)?;
            // Generate Rust source
            let rust_code = compile_manifest_to_rust(&manifest);
            if let Some(out_path) = output {
                fs::write(out_path, &rust_code).map_err(EnumerError::Io)?;
                println!("Generated {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", rust_code);
            }
            Ok(())
        }

        Commands::Check { input, json, overrides } => {
            let manifest = load_manifest(input, overrides)?;
            let summary = summarize_manifest(&manifest);
            if *json {
                println!("{}", summary_json(&summary)?);
            } else {
                for ty in &summary {
                    println!(
                        "{}: {} members, {} runs, {:?} layout",
                        ty.name, ty.members, ty.runs, ty.layout
                    );
                }
            }
            Ok(())
        }
    }
}
