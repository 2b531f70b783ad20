//! Public API for the sp1-tiles crate.
//!
//! This module provides the high-level API: [`TileEncoder`] builder and
//! [`EncodeError`] unified error type.

mod builder;
mod error;

pub use builder::TileEncoder;
pub use error::EncodeError;
