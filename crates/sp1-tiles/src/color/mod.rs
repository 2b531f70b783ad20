//! Pixel color type
//!
//! Images reach the encoder as plain 8-bit RGB triples. Any alpha channel is
//! dropped by the caller before the pixels are handed over.
//!
//! # Example
//!
//! ```
//! use sp1_tiles::Rgb;
//!
//! let cyan = Rgb::new(0, 205, 205);
//! assert_eq!(cyan.to_bytes(), [0, 205, 205]);
//! ```

mod rgb;

pub use rgb::Rgb;
