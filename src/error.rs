use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open the image: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("only RGB(A) images are supported, got {0:?}")]
    UnsupportedColorType(png::ColorType),
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pipe error talking to {program}: {source}")]
    Pipe {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
