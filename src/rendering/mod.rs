pub mod c_source;
pub mod png_input;

pub use c_source::{render_c_source, SourceOptions};
pub use png_input::{decode_png, load_png, RgbImage};
