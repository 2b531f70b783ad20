use serde::Deserialize;
use sp1_tiles::{PaletteError, SpectrumColor, TileEncoder};
use std::path::Path;

use crate::error::ConfigError;

/// Conversion settings, loaded from an optional YAML file and then
/// overridden from the command line.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Value added to tile ids in tile references
    #[serde(default = "default_base")]
    pub base: u8,

    /// Identifier used for the generated C arrays
    #[serde(default = "default_id")]
    pub id: String,

    /// Limit the print string to this many blocks (0 = no limit)
    #[serde(default)]
    pub limit: usize,

    /// Preferred background color name (null or empty disables it)
    #[serde(default = "default_preferred_bg")]
    pub preferred_bg: Option<String>,

    /// Preferred foreground color name (null or empty disables it)
    #[serde(default = "default_preferred_fg")]
    pub preferred_fg: Option<String>,

    /// Emit the print string
    #[serde(default = "default_true")]
    pub print_string: bool,

    /// Emit the tile/attribute pair array
    #[serde(default)]
    pub array: bool,

    /// Emit the tile map
    #[serde(default)]
    pub map: bool,

    /// Pass the tile data through the external compressor
    #[serde(default)]
    pub compress: bool,

    /// External compressor invocation
    #[serde(default)]
    pub compressor: CompressorConfig,
}

fn default_base() -> u8 {
    TileEncoder::DEFAULT_BASE
}

fn default_id() -> String {
    "tiles".to_string()
}

fn default_preferred_bg() -> Option<String> {
    Some("black".to_string())
}

fn default_preferred_fg() -> Option<String> {
    Some("white".to_string())
}

fn default_true() -> bool {
    true
}

/// External compressor: reads raw tile data on stdin, writes the packed
/// data to stdout.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CompressorConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

fn default_program() -> String {
    "ucl".to_string()
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            id: default_id(),
            limit: 0,
            preferred_bg: default_preferred_bg(),
            preferred_fg: default_preferred_fg(),
            print_string: true,
            array: false,
            map: false,
            compress: false,
            compressor: CompressorConfig::default(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve the preferred colors against the palette.
    pub fn preferred_colors(
        &self,
    ) -> Result<(Option<SpectrumColor>, Option<SpectrumColor>), PaletteError> {
        Ok((
            resolve_color(self.preferred_bg.as_deref())?,
            resolve_color(self.preferred_fg.as_deref())?,
        ))
    }

    /// Build the encoder these settings describe.
    pub fn encoder(&self) -> Result<TileEncoder, PaletteError> {
        let (background, foreground) = self.preferred_colors()?;
        Ok(TileEncoder::new()
            .base(self.base)
            .limit(self.limit)
            .preferred_background(background)
            .preferred_foreground(foreground))
    }
}

fn resolve_color(name: Option<&str>) -> Result<Option<SpectrumColor>, PaletteError> {
    match name.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}
