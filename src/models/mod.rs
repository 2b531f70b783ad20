pub mod config;

pub use config::{CompressorConfig, ConvertConfig};
