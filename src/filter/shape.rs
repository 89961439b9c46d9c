//! Geometric area filters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::PointFilter;
use crate::generator::RandomGenerator;
use crate::point::Point;

/// Axis-aligned square `[min, max] x [min, max]`, bounds inclusive
///
/// `RectangleFilter::new(0.0, 1.0)` is the default area filter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleFilter {
    pub min: f64,
    pub max: f64,
}

impl RectangleFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The whole unit square
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Default for RectangleFilter {
    fn default() -> Self {
        Self::unit()
    }
}

impl PointFilter for RectangleFilter {
    fn accept(&self, point: &Point, _generator: &mut dyn RandomGenerator) -> bool {
        point.x >= self.min && point.y >= self.min && point.x <= self.max && point.y <= self.max
    }
}

/// Disc around `center`; `radius` is a linear distance
///
/// A point is accepted when its squared distance to the center is at most
/// `radius * radius`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFilter {
    pub center: Point,
    pub radius: f64,
}

impl CircleFilter {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

impl PointFilter for CircleFilter {
    fn accept(&self, point: &Point, _generator: &mut dyn RandomGenerator) -> bool {
        point.distance_squared(&self.center) <= self.radius * self.radius
    }
}
