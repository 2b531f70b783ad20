use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use png2sp1::models::ConvertConfig;
use png2sp1::services::ConversionPipeline;
use sp1_tiles::SpectrumColor;

#[derive(Parser, Debug)]
#[command(name = "png2sp1", version)]
#[command(about = "Image conversion tool for Z88DK and SP1.lib")]
struct Cli {
    /// Image to convert (PNG, Spectrum palette)
    image: Option<PathBuf>,

    /// Base character (default 128)
    #[arg(short, long)]
    base: Option<u8>,

    /// Variable name (default tiles)
    #[arg(short, long)]
    id: Option<String>,

    /// Don't include the print string
    #[arg(long)]
    no_print_string: bool,

    /// Output a tile/attribute array
    #[arg(long)]
    array: bool,

    /// Output a tile map
    #[arg(long)]
    map: bool,

    /// Compress the tiles with the external compressor
    #[arg(long)]
    ucl: bool,

    /// Limit the print string to N blocks (0 = no limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Preferred background color (default black)
    #[arg(long, value_name = "NAME")]
    preferred_bg: Option<String>,

    /// Preferred foreground color (default white)
    #[arg(long, value_name = "NAME")]
    preferred_fg: Option<String>,

    /// List color names and exit
    #[arg(long)]
    list_colors: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the C source here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Cli {
    /// Layer the command line over a file (or default) configuration.
    fn apply(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(base) = self.base {
            config.base = base;
        }
        if let Some(ref id) = self.id {
            config.id = id.clone();
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(ref bg) = self.preferred_bg {
            config.preferred_bg = Some(bg.clone());
        }
        if let Some(ref fg) = self.preferred_fg {
            config.preferred_fg = Some(fg.clone());
        }
        if self.no_print_string {
            config.print_string = false;
        }
        config.array |= self.array;
        config.map |= self.map;
        config.compress |= self.ucl;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "png2sp1=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if cli.list_colors {
        println!("Color list: {}", SpectrumColor::names().collect::<Vec<_>>().join(", "));
        return Ok(());
    }

    let Some(image) = cli.image.as_deref() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  <IMAGE>",
            )
            .exit();
    };

    run_convert(&cli, image)
}

fn run_convert(cli: &Cli, image: &Path) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => ConvertConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    let config = cli.apply(config);

    let pipeline = ConversionPipeline::new(config)?;
    let source = pipeline
        .convert(image)
        .with_context(|| format!("failed to convert {}", image.display()))?;

    match cli.output {
        Some(ref output) => {
            std::fs::write(output, &source)
                .with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!(output = %output.display(), bytes = source.len(), "Wrote C source");
        }
        None => print!("{source}"),
    }

    Ok(())
}
