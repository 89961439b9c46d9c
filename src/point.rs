//! Point value type
//!
//! A 2D coordinate on the sampling domain, conventionally `[0, 1] x [0, 1]`.

use glam::DVec2;
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::RandomGenerator;

/// A sampled point in the unit square
///
/// Points are small `Copy` values; the output list, the active queue and the
/// grid each hold their own copies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`
    ///
    /// All spacing checks compare squared distances, so no square root is
    /// taken while sampling.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.to_vec2().distance_squared(other.to_vec2())
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Random point in the annulus `[min_dist, 2 * min_dist)` around `self`
    ///
    /// The radius is drawn before the angle. Candidates produced this way are
    /// never closer than `min_dist` to their parent; whether they collide with
    /// some other accepted point is left to the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use poisson_disk_sampling::{BasicGenerator, Point};
    ///
    /// let mut generator = BasicGenerator::new(7);
    /// let center = Point::new(0.5, 0.5);
    /// let candidate = center.random_around(0.1, &mut generator);
    ///
    /// let distance = center.distance(&candidate);
    /// assert!(distance >= 0.1 - 1e-12 && distance < 0.2);
    /// ```
    pub fn random_around<G>(&self, min_dist: f64, generator: &mut G) -> Point
    where
        G: RandomGenerator + ?Sized,
    {
        let radius = min_dist * (generator.float() + 1.0);
        let angle = TAU * generator.float();

        let offset = DVec2::from_angle(angle) * radius;
        Point::from(self.to_vec2() + offset)
    }

    /// Uniformly random point in the unit square
    pub fn random<G>(generator: &mut G) -> Point
    where
        G: RandomGenerator + ?Sized,
    {
        let x = generator.float();
        let y = generator.float();
        Point::new(x, y)
    }

    /// Whether this is the `(0, 0)` placeholder, which is never a valid start point
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
