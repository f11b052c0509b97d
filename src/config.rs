//! Export configuration
//!
//! Explicit configuration for the weight/bias export pipeline, replacing
//! any notion of a hardcoded network shape. Loadable from JSON or TOML.

use serde::{Deserialize, Serialize};

/// Configuration for one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Layer widths, input first (e.g. `[784, 15, 10]`)
    pub topology: Vec<usize>,
    /// Path to the weights text dump
    pub weights_path: String,
    /// Path to the biases text dump
    pub biases_path: String,
    /// Base directory for the generated `.mem` tree
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            topology: vec![784, 15, 10],
            weights_path: "weights.txt".to_string(),
            biases_path: "biases.txt".to_string(),
            output_dir: "NeuralNetwork".to_string(),
        }
    }
}

impl ExportConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ExportConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ExportConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_toml(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from a path, dispatching on the extension
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        if path.ends_with(".toml") {
            Self::from_toml(path)
        } else {
            Self::from_json(path)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.topology.len() < 2 {
            anyhow::bail!("Topology needs at least input and output layers");
        }
        if self.topology.contains(&0) {
            anyhow::bail!("Topology layer widths must be > 0");
        }
        if self.output_dir.is_empty() {
            anyhow::bail!("Output directory must not be empty");
        }
        Ok(())
    }
}
