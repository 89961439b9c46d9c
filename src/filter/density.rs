//! Density-driven filters
//!
//! A density source maps every point to an acceptance probability in
//! `[0, 1]`. [`DensityFilter`] draws a uniform `R` from the sampler's
//! generator and keeps the point iff `R < density(point)`, so higher density
//! means more points.

use super::PointFilter;
use crate::error::{PoissonError, Result};
use crate::generator::RandomGenerator;
use crate::noise::{NoiseSource, PerlinNoise};
use crate::point::Point;

/// Trait for spatial fields supplying a per-point acceptance probability
pub trait DensitySource: Send {
    /// Density at `point`, in `[0, 1]`
    fn density(&self, point: &Point) -> f64;
}

impl<F> DensitySource for F
where
    F: Fn(&Point) -> f64 + Send,
{
    fn density(&self, point: &Point) -> f64 {
        self(point)
    }
}

/// Density derived from a noise field sampled on a virtual pixel raster
///
/// The point is scaled to the pixel `(floor(x * width), floor(y * height))`
/// and the noise is evaluated at `pixel / feature_size`. Noise values in
/// `[-1, 1]` are remapped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct NoiseDensity<N> {
    noise: N,
    width: u32,
    height: u32,
    feature_size: f64,
}

impl<N: NoiseSource> NoiseDensity<N> {
    /// # Errors
    ///
    /// Returns `InvalidDensitySource` if the raster is empty or
    /// `feature_size` is not a positive finite number
    pub fn new(noise: N, width: u32, height: u32, feature_size: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PoissonError::InvalidDensitySource(format!(
                "noise raster must be non-empty (got {}x{})",
                width, height
            )));
        }
        if !(feature_size.is_finite() && feature_size > 0.0) {
            return Err(PoissonError::InvalidDensitySource(format!(
                "feature size must be positive (got {})",
                feature_size
            )));
        }

        Ok(Self {
            noise,
            width,
            height,
            feature_size,
        })
    }

    pub fn noise_source(&self) -> &N {
        &self.noise
    }
}

impl<N: NoiseSource> DensitySource for NoiseDensity<N> {
    fn density(&self, point: &Point) -> f64 {
        let px = (point.x * self.width as f64).floor();
        let py = (point.y * self.height as f64).floor();
        let value = self
            .noise
            .noise(px / self.feature_size, py / self.feature_size);

        ((value + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Probabilistic filter keeping points in proportion to a density field
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::{BasicGenerator, DensityFilter, Point, PointFilter};
///
/// // Keep everything in the left half, nothing in the right half
/// let filter = DensityFilter::new(|p: &Point| if p.x < 0.5 { 1.0 } else { 0.0 });
/// let mut generator = BasicGenerator::new(1);
///
/// assert!(filter.accept(&Point::new(0.25, 0.5), &mut generator));
/// assert!(!filter.accept(&Point::new(0.75, 0.5), &mut generator));
/// ```
#[derive(Debug, Clone)]
pub struct DensityFilter<D> {
    source: D,
}

impl<D: DensitySource> DensityFilter<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &D {
        &self.source
    }
}

impl<N: NoiseSource> DensityFilter<NoiseDensity<N>> {
    /// Density filter over an arbitrary noise evaluator
    pub fn noise(noise: N, width: u32, height: u32, feature_size: f64) -> Result<Self> {
        Ok(Self::new(NoiseDensity::new(noise, width, height, feature_size)?))
    }
}

impl DensityFilter<NoiseDensity<PerlinNoise>> {
    /// Density filter over single-octave Perlin noise
    ///
    /// # Example
    ///
    /// ```
    /// use poisson_disk_sampling::{generate, DensityFilter, SamplerConfig};
    ///
    /// let config = SamplerConfig::builder()
    ///     .seed(3)
    ///     .post_filter(DensityFilter::perlin(512, 512, 64.0, 0).unwrap())
    ///     .build();
    ///
    /// let points = generate(500, config).unwrap();
    /// assert!(points.len() <= 500);
    /// ```
    pub fn perlin(width: u32, height: u32, feature_size: f64, seed: u64) -> Result<Self> {
        Self::noise(PerlinNoise::new(seed), width, height, feature_size)
    }
}

impl<D: DensitySource> PointFilter for DensityFilter<D> {
    fn accept(&self, point: &Point, generator: &mut dyn RandomGenerator) -> bool {
        let r = generator.float();
        r < self.source.density(point)
    }
}
