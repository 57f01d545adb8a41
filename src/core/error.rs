use std::path::PathBuf;
use thiserror::Error;

/// Failures while opening or decoding the selected image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Image file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Unable to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {0:?} has no pixels")]
    Empty(PathBuf),

    #[error("Target width must be greater than zero")]
    InvalidWidth,
}

/// Failures while clustering pixel colors into a palette
#[derive(Debug, Error, PartialEq)]
pub enum PaletteExtractionError {
    #[error("Number of colors must be at least 1")]
    ZeroColors,

    #[error("No pixel samples to cluster")]
    NoSamples,

    #[error("Requested {requested} colors but the image only has {distinct} distinct colors")]
    TooManyColors { requested: usize, distinct: usize },

    #[error("Requested {requested} colors, at most {max} are supported")]
    TooManyClusters { requested: usize, max: usize },

    #[error("Clustering returned {got} centroids, expected {expected}")]
    WrongCentroidCount { expected: usize, got: usize },
}

/// Problems reading `config.ini`; never fatal, the caller falls back to defaults
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    Missing(PathBuf),

    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },

    #[error("Invalid value for {key} in {path:?}: {value:?} is not a whole number")]
    InvalidValue {
        path: PathBuf,
        key: String,
        value: String,
    },

    #[error("Could not determine the executable directory")]
    NoLocation,
}

/// Anything that ends a processing iteration before the viewer opens
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] ImageLoadError),

    #[error(transparent)]
    Extract(#[from] PaletteExtractionError),
}
