//! Error types for configuring a render and writing its output.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bounds are not finite and increasing, or the grid is empty.
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
