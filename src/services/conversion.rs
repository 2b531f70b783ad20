use std::path::Path;

use sp1_tiles::{EncodeError, EncodedImage, PaletteError, TileEncoder};

use crate::error::{ConfigError, DecodeError, FilterError};
use crate::models::ConvertConfig;
use crate::rendering::{load_png, render_c_source, RgbImage, SourceOptions};
use crate::services::ExternalFilter;

/// Error from the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("compressor failed: {0}")]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Result of converting one image
pub struct Conversion {
    pub encoded: EncodedImage,
    /// Tile buffer as written to the output, after the compressor if any
    pub tile_data: Vec<u8>,
    /// Rendered C source
    pub source: String,
}

/// Pipeline that orchestrates PNG decode → encode → compress → render
pub struct ConversionPipeline {
    config: ConvertConfig,
    encoder: TileEncoder,
    compressor: Option<ExternalFilter>,
}

impl ConversionPipeline {
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        let encoder = config.encoder()?;

        if config.base < 32 {
            tracing::warn!(
                base = config.base,
                "Base below 32, tile bytes will collide with print control codes"
            );
        }

        let compressor = config
            .compress
            .then(|| ExternalFilter::from_config(&config.compressor));

        Ok(Self {
            config,
            encoder,
            compressor,
        })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert a PNG file into C source.
    pub fn convert(&self, path: &Path) -> Result<String, ConvertError> {
        let image = load_png(path)?;
        let name = path.display().to_string();
        Ok(self.convert_image(&image, &name)?.source)
    }

    /// Convert an already decoded image.
    pub fn convert_image(&self, image: &RgbImage, name: &str) -> Result<Conversion, ConvertError> {
        let encoded = self
            .encoder
            .encode(&image.pixels, image.width, image.height)?;

        tracing::info!(
            image = name,
            tiles = encoded.tile_count(),
            pairs = encoded.matrix_table().len(),
            print_bytes = encoded.print_stream().len(),
            "Encoded image"
        );

        let tile_data = match &self.compressor {
            Some(filter) => {
                let packed = filter.run(encoded.tiles())?;
                tracing::info!(
                    program = filter.program(),
                    from = encoded.tiles().len(),
                    to = packed.len(),
                    "Compressed tiles"
                );
                packed
            }
            None => encoded.tiles().to_vec(),
        };

        let source = render_c_source(
            &encoded,
            &tile_data,
            &SourceOptions {
                id: &self.config.id,
                image_name: name,
                print_string: self.config.print_string,
                array: self.config.array,
                map: self.config.map,
            },
        );

        Ok(Conversion {
            encoded,
            tile_data,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp1_tiles::Rgb;

    fn image(width: usize, height: usize, pixel: impl Fn(usize, usize) -> Rgb) -> RgbImage {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        RgbImage {
            pixels,
            width,
            height,
        }
    }

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const RED: Rgb = Rgb::new(205, 0, 0);

    #[test]
    fn test_invalid_preferred_color_rejected() {
        let config = ConvertConfig {
            preferred_bg: Some("purple".to_string()),
            ..Default::default()
        };
        let result = ConversionPipeline::new(config);
        assert!(matches!(result, Err(ConvertError::Palette(_))));
    }

    #[test]
    fn test_low_base_is_accepted() {
        let config = ConvertConfig {
            base: 0,
            ..Default::default()
        };
        let pipeline = ConversionPipeline::new(config).unwrap();
        let conversion = pipeline
            .convert_image(&image(8, 8, |_, _| BLACK), "black.png")
            .unwrap();
        assert_eq!(conversion.encoded.raw_print_stream(), &[20, 0x07, 0, 13, 0]);
    }

    #[test]
    fn test_convert_image_default() {
        let pipeline = ConversionPipeline::new(ConvertConfig::default()).unwrap();
        let conversion = pipeline
            .convert_image(
                &image(16, 8, |x, _| if x < 8 { BLACK } else { RED }),
                "two.png",
            )
            .unwrap();

        assert_eq!(conversion.tile_data, conversion.encoded.tiles());
        assert_eq!(conversion.encoded.tile_count(), 1);
        assert!(conversion.source.contains("const uchar ptiles[]"));
        assert!(conversion.source.contains("#define TILES_BASE 128"));
        assert!(conversion.source.contains(" * two.png (16x8)"));
    }

    #[test]
    fn test_encode_error_is_wrapped() {
        let pipeline = ConversionPipeline::new(ConvertConfig::default()).unwrap();
        let result = pipeline.convert_image(&image(8, 8, |_, _| Rgb::new(1, 2, 3)), "bad.png");
        match result {
            Err(ConvertError::Encode(EncodeError::UnknownColor { x, y, .. })) => {
                assert_eq!((x, y), (0, 0));
            }
            _ => panic!("expected UnknownColor"),
        }
    }

    #[test]
    fn test_missing_file() {
        let pipeline = ConversionPipeline::new(ConvertConfig::default()).unwrap();
        let result = pipeline.convert(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(ConvertError::Decode(DecodeError::Io(_)))));
    }

    #[cfg(unix)]
    #[test]
    fn test_compressor_output_replaces_tiles() {
        let mut config = ConvertConfig {
            compress: true,
            ..Default::default()
        };
        config.compressor.program = "sh".to_string();
        config.compressor.args = vec!["-c".to_string(), "cat >/dev/null; printf 'AB'".to_string()];

        let pipeline = ConversionPipeline::new(config).unwrap();
        let conversion = pipeline
            .convert_image(&image(8, 8, |_, _| BLACK), "black.png")
            .unwrap();

        assert_eq!(conversion.tile_data, b"AB");
        assert!(conversion.source.contains("const uchar tiles[] = {\n0x41, 0x42\n};"));
        assert!(conversion.source.contains("#define TILES_LEN 1"));
    }

    #[test]
    fn test_compressor_failure_is_fatal() {
        let mut config = ConvertConfig {
            compress: true,
            ..Default::default()
        };
        config.compressor.program = "png2sp1-no-such-compressor".to_string();

        let pipeline = ConversionPipeline::new(config).unwrap();
        let result = pipeline.convert_image(&image(8, 8, |_, _| BLACK), "black.png");
        assert!(matches!(result, Err(ConvertError::Filter(FilterError::Spawn { .. }))));
    }
}
