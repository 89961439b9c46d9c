//! Noise sources for density-driven sampling
//!
//! Density filters consume smooth noise through the [`NoiseSource`] trait.
//! [`PerlinNoise`] is the built-in implementation; any other evaluator
//! (simplex, value noise, a closure) can be plugged in instead.

mod perlin;

pub use perlin::{sample_perlin_fbm, PerlinConfig, PerlinNoise};

/// Trait for smooth 2D noise evaluators
pub trait NoiseSource: Send {
    /// Evaluate noise at `(x, y)`, returning a value in `[-1, 1]`
    fn noise(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64 + Send,
{
    fn noise(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
