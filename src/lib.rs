//! # MLP `.mem` Export
//!
//! Converts a trained multilayer perceptron's weights and biases into IEEE-754
//! bit-string dumps suitable for hardware memory-initialization (`.mem`) files,
//! and converts MNIST image samples into the same encoding.
//!
//! ## Modules
//!
//! - `encoding`: float32 to 32-character bit-string encoding
//! - `topology`: network shape description and validation
//! - `parse`: tolerant parsing of weight/bias text dumps
//! - `reshape`: regrouping flat dumps into per-layer matrices
//! - `materialize`: `.mem` file tree writer
//! - `digits`: MNIST sample conversion
//! - `config`: export configuration
//! - `export`: end-to-end pipelines

pub mod config;
pub mod digits;
pub mod encoding;
pub mod export;
pub mod materialize;
pub mod parse;
pub mod reshape;
pub mod topology;

pub use config::ExportConfig;
pub use encoding::{encode_f32, encode_f64};
pub use reshape::{EncodedNetwork, LayeredNetwork};
pub use topology::Topology;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for this library
pub type Result<T> = std::result::Result<T, Error>;

/// Library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input text does not match the counts implied by the network topology.
    /// Fatal: malformed input means the upstream training export is wrong.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid topology: {0}")]
    Topology(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
