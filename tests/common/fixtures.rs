//! Test fixtures: palette colors and on-disk PNG images.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Palette colors as RGB triples
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 205];
    pub const RED: [u8; 3] = [205, 0, 0];
    pub const GREEN: [u8; 3] = [0, 205, 0];
    pub const YELLOW: [u8; 3] = [205, 205, 0];
    pub const WHITE: [u8; 3] = [205, 205, 205];
    pub const BRIGHT_WHITE: [u8; 3] = [255, 255, 255];

    /// Not part of the palette
    pub const ORANGE: [u8; 3] = [255, 128, 0];
}

/// Temporary directory holding PNG and config fixtures
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an RGB PNG whose pixels come from `pixel(x, y)`.
    pub fn png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixel: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }
        let path = self.dir.path().join(name);
        write_png(&path, width, height, png::ColorType::Rgb, &data);
        path
    }

    /// Write a single-color RGB PNG.
    pub fn solid_png(&self, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        self.png(name, width, height, |_, _| color)
    }

    /// Write a YAML config file.
    pub fn config(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// 16x8 image: a black/white checker block next to a solid red one
pub fn checker_and_red(x: u32, y: u32) -> [u8; 3] {
    if x >= 8 {
        colors::RED
    } else if (x + y) % 2 == 0 {
        colors::BLACK
    } else {
        colors::WHITE
    }
}

fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
    let file = std::fs::File::create(path).expect("Failed to create PNG");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    writer
        .write_image_data(data)
        .expect("Failed to write PNG data");
}
