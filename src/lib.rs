//! Poisson-disk sampling on the unit square
//!
//! Generates blue-noise point sets: points placed at random, but never closer
//! to each other than a minimum distance. Sampling uses Bridson's
//! grid-accelerated dart throwing, so generation is close to linear in the
//! number of points.
//!
//! # Quick Start
//!
//! ```rust
//! use poisson_disk_sampling::*;
//!
//! // 500 points with the spacing derived from the count
//! let points = generate(500, SamplerConfig::default()).unwrap();
//! assert!(points.len() <= 500);
//!
//! // Seeded, restricted to a disc, thinned by Perlin noise afterwards
//! let config = SamplerConfig::builder()
//!     .seed(42)
//!     .tries(30)
//!     .min_distance(0.02)
//!     .unwrap()
//!     .area_filter(CircleFilter::new(0.5, 0.5, 0.25))
//!     .post_filter(DensityFilter::perlin(1024, 1024, 64.0, 0).unwrap())
//!     .build();
//!
//! let points = generate(5_000, config).unwrap();
//! println!("Generated {} points", points.len());
//! ```
//!
//! # Features
//!
//! - `image` (default): density maps from grayscale images via [`ImageDensity`]
//! - `serde`: serialization support for points and plain filter types

// Modules
pub mod error;
pub mod point;
pub mod generator;
pub mod noise;
pub mod filter;
pub mod grid;
pub mod config;
pub mod sampler;

// Re-export core types for convenience
pub use error::{PoissonError, Result};
pub use point::Point;
pub use generator::{BasicGenerator, RandomGenerator};
pub use noise::{NoiseSource, PerlinConfig, PerlinNoise};
pub use filter::{
    CircleFilter, DensityFilter, DensitySource, FnFilter, NoiseDensity, PointFilter,
    RectangleFilter,
};
pub use grid::Grid;
pub use config::{SamplerConfig, SamplerConfigBuilder};
pub use sampler::{generate, Sampler};

#[cfg(feature = "image")]
pub use filter::ImageDensity;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
