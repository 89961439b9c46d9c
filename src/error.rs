//! Error types for Poisson-disk sampling

use thiserror::Error;

/// Errors that can occur while configuring or running the sampler
#[derive(Error, Debug)]
pub enum PoissonError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The explicit start point is the origin placeholder, lies outside the
    /// unit square or is rejected by the area filter
    #[error("invalid start point ({x}, {y}): must be a non-origin point in the unit square accepted by the area filter")]
    InvalidStartPoint { x: f64, y: f64 },

    /// The area filter rejected every randomly drawn start candidate
    #[error("no start point accepted by the area filter after {attempts} attempts")]
    SeedSearchExhausted { attempts: usize },

    /// A density collaborator cannot be used for sampling
    #[error("invalid density source: {0}")]
    InvalidDensitySource(String),

    /// The density image could not be opened or decoded
    #[cfg(feature = "image")]
    #[error("failed to load density image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for sampling operations
pub type Result<T> = std::result::Result<T, PoissonError>;
