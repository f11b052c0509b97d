//! `.mem` file tree writer
//!
//! Materializes an encoded network as a directory tree with one text file
//! per layer, one bit string per line. Directory creation is idempotent:
//! an already-existing directory is informational, not an error.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::reshape::EncodedNetwork;
use crate::Result;

/// Subdirectory holding per-layer weight files
pub const WEIGHTS_DIR: &str = "Weights_folder";
/// Subdirectory holding per-layer bias files
pub const BIASES_DIR: &str = "Biases_folder";

/// Create a directory if it is not already there.
///
/// Mirrors a one-shot batch tool's folder check: existing output from a
/// previous run is logged and reused, never a failure.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        tracing::info!("Folder {} already there", path.display());
    } else {
        fs::create_dir_all(path)?;
        tracing::info!("Folder {} created", path.display());
    }
    Ok(())
}

/// Write `Weights_<layer>.mem` and `Biases_<layer>.mem` files under `base`.
///
/// Weights are written in row-major neuron order, one encoded bit string
/// per line. Layer indices are 0-based in topology order. Safe to call
/// repeatedly on the same path; files are overwritten.
pub fn write_network(base: &Path, network: &EncodedNetwork) -> Result<()> {
    ensure_dir(base)?;
    let weights_dir = base.join(WEIGHTS_DIR);
    let biases_dir = base.join(BIASES_DIR);
    ensure_dir(&weights_dir)?;
    ensure_dir(&biases_dir)?;

    for (layer, neurons) in network.weights.iter().enumerate() {
        let path = weights_dir.join(format!("Weights_{}.mem", layer));
        write_mem_file(&path, neurons.iter().flatten())?;
    }
    for (layer, values) in network.biases.iter().enumerate() {
        let path = biases_dir.join(format!("Biases_{}.mem", layer));
        write_mem_file(&path, values.iter())?;
    }

    tracing::info!(
        "Wrote {} weight and {} bias layer files to {}",
        network.weights.len(),
        network.biases.len(),
        base.display()
    );
    Ok(())
}

/// Write one bit string per line; the writer is flushed and closed before
/// returning on every path.
pub fn write_mem_file<'a, I>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_network() -> EncodedNetwork {
        let one = "00111111100000000000000000000000".to_string();
        EncodedNetwork {
            weights: vec![
                vec![vec![one.clone(); 4]; 2],
                vec![vec![one.clone(); 2]; 3],
            ],
            biases: vec![vec![one.clone(); 2], vec![one; 3]],
        }
    }

    #[test]
    fn test_layout_and_line_counts() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("NeuralNetwork");
        write_network(&base, &sample_network()).unwrap();

        let w0 = fs::read_to_string(base.join(WEIGHTS_DIR).join("Weights_0.mem")).unwrap();
        let w1 = fs::read_to_string(base.join(WEIGHTS_DIR).join("Weights_1.mem")).unwrap();
        let b0 = fs::read_to_string(base.join(BIASES_DIR).join("Biases_0.mem")).unwrap();
        let b1 = fs::read_to_string(base.join(BIASES_DIR).join("Biases_1.mem")).unwrap();

        assert_eq!(w0.lines().count(), 8);
        assert_eq!(w1.lines().count(), 6);
        assert_eq!(b0.lines().count(), 2);
        assert_eq!(b1.lines().count(), 3);
        assert!(w0.lines().all(|l| l.len() == 32));
    }

    #[test]
    fn test_idempotent() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("NeuralNetwork");
        let network = sample_network();
        write_network(&base, &network).unwrap();
        // second run over the existing tree must succeed
        write_network(&base, &network).unwrap();
    }

    #[test]
    fn test_ensure_dir_twice() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");
        ensure_dir(&path).unwrap();
        ensure_dir(&path).unwrap();
        assert!(path.is_dir());
    }
}
