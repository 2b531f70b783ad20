//! png2sp1 - PNG to SP1 tile converter
//!
//! Turns Spectrum-palette PNG images into C source for Z88DK's SP1 library.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
