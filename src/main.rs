//! MLP `.mem` export CLI
//!
//! # Examples
//!
//! ```bash
//! cargo run -- export --weights weights.txt --biases biases.txt --output NeuralNetwork
//! cargo run -- export --config export.toml
//! cargo run -- digits --input mnist.csv --output NeuralNetwork --limit 20
//! ```

use clap::{Parser, Subcommand};
use mlp_mem_export::export::{run_digit_export, run_export};
use mlp_mem_export::ExportConfig;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mlp_mem_export")]
#[command(about = "Export trained MLP weights and MNIST samples as .mem bit-string files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert weight/bias text dumps into per-layer .mem files
    Export {
        /// Path to a JSON or TOML configuration file (overrides other flags)
        #[arg(short, long)]
        config: Option<String>,

        /// Path to the weights text dump
        #[arg(short, long, default_value = "weights.txt")]
        weights: String,

        /// Path to the biases text dump
        #[arg(short, long, default_value = "biases.txt")]
        biases: String,

        /// Base output directory
        #[arg(short, long, default_value = "NeuralNetwork")]
        output: String,

        /// Layer widths, input first
        #[arg(short, long, value_delimiter = ',', default_value = "784,15,10")]
        topology: Vec<usize>,
    },

    /// Convert MNIST CSV samples into per-sample .mem files
    Digits {
        /// Path to the samples CSV (label, then 784 pixel values per row)
        #[arg(short, long)]
        input: PathBuf,

        /// Base output directory
        #[arg(short, long, default_value = "NeuralNetwork")]
        output: PathBuf,

        /// Maximum number of samples to export
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            config,
            weights,
            biases,
            output,
            topology,
        } => {
            let config = match config {
                Some(path) => ExportConfig::from_path(&path)?,
                None => ExportConfig {
                    topology,
                    weights_path: weights,
                    biases_path: biases,
                    output_dir: output,
                },
            };
            let base = run_export(&config)?;
            info!("Done: {}", base.display());
        }
        Commands::Digits {
            input,
            output,
            limit,
        } => {
            let written = run_digit_export(&input, &output, limit)?;
            info!("Done: {} samples", written);
        }
    }

    Ok(())
}
