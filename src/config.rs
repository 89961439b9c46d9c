//! Sampler configuration and builder
//!
//! The builder starts from the defaults below and applies each setter in call
//! order; calling a setter twice keeps the last value.
//!
//! | option              | default                       |
//! |---------------------|-------------------------------|
//! | `tries`             | 30                            |
//! | `min_distance`      | derived from the target count |
//! | `generator`         | `BasicGenerator::new(0)`      |
//! | `area_filter`       | `RectangleFilter::new(0, 1)`  |
//! | `post_filter`       | none                          |
//! | `seed_points`       | none                          |
//! | `start_point`       | random                        |
//! | `max_seed_attempts` | 10 000                        |

use std::fmt;

use crate::error::{PoissonError, Result};
use crate::filter::{PointFilter, RectangleFilter};
use crate::generator::{BasicGenerator, RandomGenerator};
use crate::point::Point;

/// Default number of candidates tried around each active point
pub const DEFAULT_TRIES: usize = 30;

/// Default bound on random draws while searching for a start point
pub const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;

/// Resolved sampling parameters
///
/// Built with [`SamplerConfig::builder`]; immutable afterwards.
///
/// # Example
///
/// ```rust
/// use poisson_disk_sampling::*;
///
/// let config = SamplerConfig::builder()
///     .tries(20)
///     .min_distance(0.05)
///     .unwrap()
///     .seed(42)
///     .area_filter(CircleFilter::new(0.5, 0.5, 0.4))
///     .build();
///
/// assert_eq!(config.tries(), 20);
/// assert_eq!(config.resolved_min_distance(1000), 0.05);
/// ```
pub struct SamplerConfig {
    pub(crate) tries: usize,
    pub(crate) min_distance: Option<f64>,
    pub(crate) generator: Box<dyn RandomGenerator>,
    pub(crate) area_filter: Box<dyn PointFilter>,
    pub(crate) post_filter: Option<Box<dyn PointFilter>>,
    pub(crate) seed_points: Vec<Point>,
    pub(crate) start_point: Option<Point>,
    pub(crate) max_seed_attempts: usize,
}

impl SamplerConfig {
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::new()
    }

    /// Candidates tried around each active point
    #[inline]
    pub fn tries(&self) -> usize {
        self.tries
    }

    /// Explicitly configured minimum distance, if any
    #[inline]
    pub fn min_distance(&self) -> Option<f64> {
        self.min_distance
    }

    /// Minimum distance used when sampling `target_count` points
    ///
    /// A configured positive distance is returned as is; otherwise it is
    /// derived as `sqrt(n) / n`, which spaces `n` points evenly over the
    /// unit square.
    pub fn resolved_min_distance(&self, target_count: usize) -> f64 {
        match self.min_distance {
            Some(distance) if distance > 0.0 => distance,
            _ => {
                let n = target_count as f64;
                n.sqrt() / n
            }
        }
    }

    #[inline]
    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    #[inline]
    pub fn seed_points(&self) -> &[Point] {
        &self.seed_points
    }

    #[inline]
    pub fn max_seed_attempts(&self) -> usize {
        self.max_seed_attempts
    }

    #[inline]
    pub fn has_post_filter(&self) -> bool {
        self.post_filter.is_some()
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfigBuilder::new().build()
    }
}

impl fmt::Debug for SamplerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplerConfig")
            .field("tries", &self.tries)
            .field("min_distance", &self.min_distance)
            .field("post_filter", &self.post_filter.is_some())
            .field("seed_points", &self.seed_points.len())
            .field("start_point", &self.start_point)
            .field("max_seed_attempts", &self.max_seed_attempts)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SamplerConfig`]
///
/// Setters that can receive invalid values return `Result<Self>`, the rest
/// return `Self`.
pub struct SamplerConfigBuilder {
    tries: usize,
    min_distance: Option<f64>,
    generator: Option<Box<dyn RandomGenerator>>,
    area_filter: Option<Box<dyn PointFilter>>,
    post_filter: Option<Box<dyn PointFilter>>,
    seed_points: Vec<Point>,
    start_point: Option<Point>,
    max_seed_attempts: usize,
}

impl SamplerConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            min_distance: None,
            generator: None,
            area_filter: None,
            post_filter: None,
            seed_points: Vec::new(),
            start_point: None,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }

    /// Set the number of candidates tried around each active point
    ///
    /// With 0 tries the output is just the start point.
    pub fn tries(mut self, tries: usize) -> Self {
        self.tries = tries;
        self
    }

    /// Set the minimum distance between any two points
    ///
    /// Zero or negative values mean "derive from the target count".
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `distance` is NaN or infinite
    pub fn min_distance(mut self, distance: f64) -> Result<Self> {
        if !distance.is_finite() {
            return Err(PoissonError::InvalidConfig(format!(
                "min distance must be finite (got {})",
                distance
            )));
        }
        self.min_distance = Some(distance);
        Ok(self)
    }

    /// Set the random generator
    pub fn generator<G>(mut self, generator: G) -> Self
    where
        G: RandomGenerator + 'static,
    {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Use a [`BasicGenerator`] seeded with `seed`
    pub fn seed(self, seed: u64) -> Self {
        self.generator(BasicGenerator::new(seed))
    }

    /// Set the filter every candidate must pass while the set grows
    pub fn area_filter<F>(mut self, filter: F) -> Self
    where
        F: PointFilter + 'static,
    {
        self.area_filter = Some(Box::new(filter));
        self
    }

    /// Set a filter applied once to the finished point set
    pub fn post_filter<F>(mut self, filter: F) -> Self
    where
        F: PointFilter + 'static,
    {
        self.post_filter = Some(Box::new(filter));
        self
    }

    /// Pre-populate the grid with existing points
    ///
    /// Seed points block candidates around them but are not part of the
    /// output. Only one point per grid cell is kept; later points win.
    pub fn seed_points<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        self.seed_points = points.into_iter().collect();
        self
    }

    /// Start sampling from `(x, y)` instead of a random point
    ///
    /// The point is checked against the area filter when sampling starts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStartPoint` if a coordinate is NaN or infinite
    pub fn start_point(mut self, x: f64, y: f64) -> Result<Self> {
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(PoissonError::InvalidStartPoint { x, y });
        }
        self.start_point = Some(point);
        Ok(self)
    }

    /// Bound the random search for a start point accepted by the area filter
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `attempts` is 0
    pub fn max_seed_attempts(mut self, attempts: usize) -> Result<Self> {
        if attempts == 0 {
            return Err(PoissonError::InvalidConfig(
                "max seed attempts must be at least 1".to_string(),
            ));
        }
        self.max_seed_attempts = attempts;
        Ok(self)
    }

    /// Build the configuration, filling unset collaborators with defaults
    pub fn build(self) -> SamplerConfig {
        SamplerConfig {
            tries: self.tries,
            min_distance: self.min_distance,
            generator: self.generator.unwrap_or_else(|| {
                Box::new(BasicGenerator::default()) as Box<dyn RandomGenerator>
            }),
            area_filter: self.area_filter.unwrap_or_else(|| {
                Box::new(RectangleFilter::unit()) as Box<dyn PointFilter>
            }),
            post_filter: self.post_filter,
            seed_points: self.seed_points,
            start_point: self.start_point,
            max_seed_attempts: self.max_seed_attempts,
        }
    }
}

impl Default for SamplerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
