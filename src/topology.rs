//! Network topology
//!
//! Describes the shape of a feed-forward network as an ordered list of
//! layer widths, and derives the row/value counts a flat weight or bias
//! dump must satisfy.

use crate::{Error, Result};

/// Ordered list of layer widths defining a feed-forward network's shape.
///
/// `sizes[0]` is the input width, `sizes[last]` the output width. A valid
/// topology has at least two entries, all positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    /// Create a validated topology.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.len() < 2 {
            return Err(Error::Topology(format!(
                "need at least input and output layers, got {:?}",
                sizes
            )));
        }
        if let Some(pos) = sizes.iter().position(|&n| n == 0) {
            return Err(Error::Topology(format!("layer {} has zero width", pos)));
        }
        Ok(Self { sizes })
    }

    /// The 784-15-10 network used by the MNIST training export.
    pub fn mnist() -> Self {
        Self {
            sizes: vec![784, 15, 10],
        }
    }

    /// Layer widths in order
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of weight layers (connections between consecutive widths)
    pub fn num_layers(&self) -> usize {
        self.sizes.len() - 1
    }

    /// Iterate over `(input_width, output_width)` for each weight layer
    pub fn layer_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sizes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total neurons past the input layer.
    ///
    /// Equals both the expected number of weight rows (one per output
    /// neuron across all layers) and the expected number of bias values.
    pub fn total_neurons(&self) -> usize {
        self.sizes[1..].iter().sum()
    }

    /// Total individual weights across all layers
    pub fn total_weights(&self) -> usize {
        self.layer_pairs().map(|(n_in, n_out)| n_in * n_out).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_topology() {
        let topo = Topology::new(vec![4, 2, 3]).unwrap();
        assert_eq!(topo.num_layers(), 2);
        assert_eq!(topo.total_neurons(), 5);
        assert_eq!(topo.total_weights(), 4 * 2 + 2 * 3);

        let pairs: Vec<_> = topo.layer_pairs().collect();
        assert_eq!(pairs, vec![(4, 2), (2, 3)]);
    }

    #[test]
    fn test_mnist_topology() {
        let topo = Topology::mnist();
        assert_eq!(topo.sizes(), &[784, 15, 10]);
        assert_eq!(topo.total_neurons(), 25);
        assert_eq!(topo.total_weights(), 784 * 15 + 15 * 10);
    }

    #[test]
    fn test_rejects_short_topology() {
        assert!(Topology::new(vec![]).is_err());
        assert!(Topology::new(vec![10]).is_err());
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(Topology::new(vec![784, 0, 10]).is_err());
    }
}
