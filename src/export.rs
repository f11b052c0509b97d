//! End-to-end export pipelines
//!
//! Ties parsing, reshaping, encoding and materialization together for the
//! two batch transforms: network weights/biases and digit samples. Each
//! run is a single synchronous pass; outputs are derived and regenerable,
//! so a failed run can simply be repeated after fixing the input.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::ExportConfig;
use crate::digits;
use crate::materialize;
use crate::parse;
use crate::reshape::LayeredNetwork;
use crate::topology::Topology;

/// Export a trained network's weights and biases as a `.mem` file tree.
///
/// Returns the base output directory.
pub fn run_export(config: &ExportConfig) -> anyhow::Result<PathBuf> {
    config.validate()?;
    let topology = Topology::new(config.topology.clone())?;

    let weights_text = std::fs::read_to_string(&config.weights_path)
        .with_context(|| format!("Failed to read weights from {}", config.weights_path))?;
    let biases_text = std::fs::read_to_string(&config.biases_path)
        .with_context(|| format!("Failed to read biases from {}", config.biases_path))?;

    let rows = parse::parse_weight_rows(&weights_text)?;
    let biases = parse::parse_biases(&biases_text)?;
    tracing::info!(
        "Parsed {} weight rows and {} bias values",
        rows.len(),
        biases.len()
    );

    let network = LayeredNetwork::from_flat(&rows, &biases, &topology)?;
    let encoded = network.encode();

    let base = Path::new(&config.output_dir);
    materialize::write_network(base, &encoded)?;

    tracing::info!(
        "Exported {} layers for topology {:?} to {}",
        topology.num_layers(),
        topology.sizes(),
        base.display()
    );
    Ok(base.to_path_buf())
}

/// Export up to `limit` MNIST samples from `input` as `.mem` files.
///
/// Returns the number of samples written.
pub fn run_digit_export(input: &Path, output: &Path, limit: usize) -> anyhow::Result<usize> {
    let samples = digits::load_samples(input, limit)
        .with_context(|| format!("Failed to load samples from {}", input.display()))?;
    digits::write_samples(output, &samples)?;
    Ok(samples.len())
}
