//! Topology-aware reshaping
//!
//! Regroups flat weight rows and bias values into per-layer matrices
//! matching a network topology, then renders every value as an encoded
//! bit string. Rows are partitioned by cumulative sums of the output
//! widths: layer i owns rows `[sum(n[1..=i]), sum(n[1..=i+1]))`, one row
//! per output neuron, `n[i]` weights wide.

use ndarray::{Array1, Array2};

use crate::encoding::encode_f32;
use crate::topology::Topology;
use crate::{Error, Result};

/// Per-layer weights and biases as float matrices
#[derive(Debug, Clone)]
pub struct LayeredNetwork {
    /// One `n_out x n_in` matrix per layer, row per output neuron
    pub weights: Vec<Array2<f32>>,
    /// One `n_out` vector per layer
    pub biases: Vec<Array1<f32>>,
}

/// Per-layer weights and biases as 32-character bit strings
#[derive(Debug, Clone)]
pub struct EncodedNetwork {
    /// `[layer][output_neuron][input_weight]`
    pub weights: Vec<Vec<Vec<String>>>,
    /// `[layer][neuron]`
    pub biases: Vec<Vec<String>>,
}

impl LayeredNetwork {
    /// Regroup flat weight rows and bias values by topology.
    ///
    /// Fails with [`Error::MalformedInput`] when the row count, any row
    /// width, or the bias count disagrees with the topology.
    pub fn from_flat(rows: &[Vec<f32>], biases: &[f32], topology: &Topology) -> Result<Self> {
        let expected = topology.total_neurons();
        if rows.len() != expected {
            return Err(Error::MalformedInput(format!(
                "expected {} weight rows for topology {:?}, got {}",
                expected,
                topology.sizes(),
                rows.len()
            )));
        }
        if biases.len() != expected {
            return Err(Error::MalformedInput(format!(
                "expected {} bias values for topology {:?}, got {}",
                expected,
                topology.sizes(),
                biases.len()
            )));
        }

        let mut weights = Vec::with_capacity(topology.num_layers());
        let mut bias_layers = Vec::with_capacity(topology.num_layers());
        let mut offset = 0;

        for (layer, (n_in, n_out)) in topology.layer_pairs().enumerate() {
            let mut flat = Vec::with_capacity(n_in * n_out);
            for (neuron, row) in rows[offset..offset + n_out].iter().enumerate() {
                if row.len() != n_in {
                    return Err(Error::MalformedInput(format!(
                        "layer {} neuron {}: expected {} weights, got {}",
                        layer,
                        neuron,
                        n_in,
                        row.len()
                    )));
                }
                flat.extend_from_slice(row);
            }
            let matrix = Array2::from_shape_vec((n_out, n_in), flat)
                .map_err(|e| Error::MalformedInput(e.to_string()))?;
            weights.push(matrix);
            bias_layers.push(Array1::from_vec(biases[offset..offset + n_out].to_vec()));
            offset += n_out;
        }

        Ok(Self {
            weights,
            biases: bias_layers,
        })
    }

    /// Render every weight and bias as its encoded bit string
    pub fn encode(&self) -> EncodedNetwork {
        let weights = self
            .weights
            .iter()
            .map(|layer| {
                layer
                    .outer_iter()
                    .map(|row| row.iter().map(|&v| encode_f32(v)).collect())
                    .collect()
            })
            .collect();
        let biases = self
            .biases
            .iter()
            .map(|layer| layer.iter().map(|&v| encode_f32(v)).collect())
            .collect();
        EncodedNetwork { weights, biases }
    }
}
