//! Generate bone endpoints from a labeled settings file
//!
//! ```text
//! bonegen figure.json --parallel --skeleton -vv
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rigcrate_algorithms::{
    generate_with, Execution, ExtremitySelection, GenerationOptions, TracingObserver,
    DEFAULT_ITERATIONS,
};
use rigcrate_io::{bone_endpoints_set_to_string, read_point_cloud_set};
use rigcrate_skeleton::build_skeleton;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extract one bone per label from a labeled point cloud settings file
#[derive(Parser, Debug)]
#[command(name = "bonegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (label → list of [x, y, z])
    input: PathBuf,

    /// Power iteration steps
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// How the two extremity points are picked
    #[arg(short, long, value_enum, default_value_t = Selection::Magnitude)]
    selection: Selection,

    /// Process labels in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Emit the assembled skeleton instead of raw endpoints
    #[arg(long)]
    skeleton: bool,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Selection {
    /// Largest and smallest projected norm
    Magnitude,
    /// Largest and smallest coordinate along the axis
    Signed,
}

impl From<Selection> for ExtremitySelection {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Magnitude => ExtremitySelection::Magnitude,
            Selection::Signed => ExtremitySelection::SignedAxis,
        }
    }
}

impl Cli {
    fn options(&self) -> GenerationOptions {
        let execution = if self.parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        };

        GenerationOptions::default()
            .with_iterations(self.iterations)
            .with_selection(self.selection.into())
            .with_execution(execution)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let clouds = read_point_cloud_set(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    info!(path = %cli.input.display(), labels = clouds.len(), "Loaded settings");

    let options = cli.options();
    let bones = generate_with(&clouds, &options, &TracingObserver)?;
    info!(bones = bones.len(), "Generated bone endpoints");

    let json = if cli.skeleton {
        let skeleton = build_skeleton(&bones)?;
        serde_json::to_string_pretty(&skeleton)?
    } else {
        bone_endpoints_set_to_string(&bones)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => println!("{}", json),
    }

    Ok(())
}
