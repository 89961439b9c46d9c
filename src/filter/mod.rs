//! Point acceptance filters
//!
//! A [`PointFilter`] decides whether a point may be kept. The sampler uses
//! one filter as the *area filter* (gating every candidate while the set
//! grows) and optionally another as the *post filter* (applied once to the
//! finished set).
//!
//! Filters receive the sampler's random generator so that probabilistic
//! filters such as [`DensityFilter`] stay reproducible under a fixed seed.

mod density;
#[cfg(feature = "image")]
mod raster;
mod shape;

pub use density::{DensityFilter, DensitySource, NoiseDensity};
#[cfg(feature = "image")]
pub use raster::ImageDensity;
pub use shape::{CircleFilter, RectangleFilter};

use crate::generator::RandomGenerator;
use crate::point::Point;

/// Trait for filters deciding which points are kept
pub trait PointFilter: Send {
    /// Whether `point` is accepted
    fn accept(&self, point: &Point, generator: &mut dyn RandomGenerator) -> bool;
}

impl<T: PointFilter + ?Sized> PointFilter for Box<T> {
    fn accept(&self, point: &Point, generator: &mut dyn RandomGenerator) -> bool {
        (**self).accept(point, generator)
    }
}

/// Filter backed by a plain predicate
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::{BasicGenerator, FnFilter, Point, PointFilter};
///
/// let left_half = FnFilter::new(|p: &Point| p.x < 0.5);
/// let mut generator = BasicGenerator::new(0);
/// assert!(left_half.accept(&Point::new(0.2, 0.9), &mut generator));
/// assert!(!left_half.accept(&Point::new(0.7, 0.9), &mut generator));
/// ```
pub struct FnFilter<F> {
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&Point) -> bool + Send,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> PointFilter for FnFilter<F>
where
    F: Fn(&Point) -> bool + Send,
{
    fn accept(&self, point: &Point, _generator: &mut dyn RandomGenerator) -> bool {
        (self.predicate)(point)
    }
}
