//! Poisson-disk sampler
//!
//! Runs Bridson's algorithm over the unit square in three phases:
//!
//! 1. **Seeding**: pre-populate the grid with seed points and place the start
//!    point (explicit, or drawn at random until the area filter accepts one).
//!    Seed points outside the unit square are skipped.
//! 2. **Expanding**: pop active points in FIFO order and try `tries`
//!    candidates in the annulus `[d, 2d)` around each; candidates inside the
//!    unit square that pass the area filter and have no grid neighbor closer
//!    than `d` are accepted and become active themselves.
//! 3. **Post-filtering**: optionally drop points rejected by the post filter.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::config::SamplerConfig;
use crate::error::{PoissonError, Result};
use crate::grid::Grid;
use crate::point::Point;

/// Blue-noise point generator
///
/// The sampler owns its configuration, including the random generator, so
/// successive calls to [`Sampler::generate`] continue the same random stream.
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::*;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .min_distance(0.05)
///     .unwrap()
///     .build();
///
/// let mut sampler = Sampler::new(config);
/// let points = sampler.generate(100).unwrap();
///
/// assert_eq!(points.len(), 100);
/// for (i, a) in points.iter().enumerate() {
///     for b in &points[i + 1..] {
///         assert!(a.distance_squared(b) >= 0.05 * 0.05 - 1e-12);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration used by this sampler
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Generate up to `target_count` points
    ///
    /// Stops early when no active point can spawn further candidates. The
    /// result is ordered by acceptance: the start point first, then points in
    /// breadth-first expansion order. A `target_count` of 0 yields an empty
    /// set without touching the generator.
    ///
    /// # Errors
    ///
    /// - `InvalidStartPoint` if the configured start point is the origin, lies
    ///   outside the unit square or is rejected by the area filter
    /// - `SeedSearchExhausted` if no random start point passes the area filter
    /// - `InvalidConfig` if the minimum distance needs an oversized grid
    pub fn generate(&mut self, target_count: usize) -> Result<Vec<Point>> {
        if target_count == 0 {
            debug!("target count is 0, nothing to sample");
            return Ok(Vec::new());
        }

        let min_distance = self.config.resolved_min_distance(target_count);
        let mut grid = Grid::new(min_distance)?;
        debug!(
            target_count,
            min_distance,
            cols = grid.cols(),
            rows = grid.rows(),
            "sampling started"
        );

        let mut skipped = 0;
        for point in &self.config.seed_points {
            if grid.contains(point) {
                grid.set(*point);
            } else {
                skipped += 1;
            }
        }
        if !self.config.seed_points.is_empty() {
            debug!(
                seed_points = self.config.seed_points.len(),
                skipped,
                occupied = grid.occupied(),
                "grid pre-populated"
            );
        }

        let start = self.resolve_start_point(&grid)?;
        let mut points = self.expand(start, target_count, min_distance, &mut grid);
        points.truncate(target_count);
        debug!(accepted = points.len(), "expansion finished");

        Ok(self.apply_post_filter(points))
    }

    /// Explicit start point, or the first random point the area filter accepts
    fn resolve_start_point(&mut self, grid: &Grid) -> Result<Point> {
        let SamplerConfig {
            generator,
            area_filter,
            start_point,
            max_seed_attempts,
            ..
        } = &mut self.config;

        if let Some(point) = *start_point {
            if point.is_origin()
                || !grid.contains(&point)
                || !area_filter.accept(&point, &mut **generator)
            {
                return Err(PoissonError::InvalidStartPoint {
                    x: point.x,
                    y: point.y,
                });
            }
            return Ok(point);
        }

        for attempt in 1..=*max_seed_attempts {
            let candidate = Point::random(&mut **generator);
            if area_filter.accept(&candidate, &mut **generator) {
                debug!(attempt, x = candidate.x, y = candidate.y, "start point found");
                return Ok(candidate);
            }
        }

        warn!(
            attempts = *max_seed_attempts,
            "area filter rejected every start candidate"
        );
        Err(PoissonError::SeedSearchExhausted {
            attempts: *max_seed_attempts,
        })
    }

    /// Grow the point set from `start` until the queue drains or the target is reached
    ///
    /// Every popped point gets all of its tries, so the result can overshoot
    /// `target_count` by fewer than `tries` points.
    fn expand(
        &mut self,
        start: Point,
        target_count: usize,
        min_distance: f64,
        grid: &mut Grid,
    ) -> Vec<Point> {
        let SamplerConfig {
            generator,
            area_filter,
            tries,
            ..
        } = &mut self.config;

        let min_distance_squared = min_distance * min_distance;
        let mut active = VecDeque::from([start]);
        let mut points = vec![start];
        grid.set(start);

        while points.len() < target_count {
            let Some(point) = active.pop_front() else {
                debug!(accepted = points.len(), "active queue exhausted");
                break;
            };

            for _ in 0..*tries {
                let candidate = point.random_around(min_distance, &mut **generator);

                if grid.contains(&candidate)
                    && area_filter.accept(&candidate, &mut **generator)
                    && !grid.has_neighbor_within(&candidate, min_distance_squared)
                {
                    active.push_back(candidate);
                    points.push(candidate);
                    grid.set(candidate);
                }
            }
        }

        points
    }

    /// Keep only the points accepted by the post filter, in order
    fn apply_post_filter(&mut self, points: Vec<Point>) -> Vec<Point> {
        let SamplerConfig {
            generator,
            post_filter,
            ..
        } = &mut self.config;

        let Some(filter) = post_filter else {
            return points;
        };

        let before = points.len();
        let kept: Vec<Point> = points
            .into_iter()
            .filter(|point| filter.accept(point, &mut **generator))
            .collect();
        debug!(before, after = kept.len(), "post filter applied");

        kept
    }
}

/// Generate up to `target_count` blue-noise points with `config`
///
/// Shorthand for `Sampler::new(config).generate(target_count)`.
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::{generate, SamplerConfig};
///
/// let points = generate(100, SamplerConfig::default()).unwrap();
/// assert!(!points.is_empty() && points.len() <= 100);
/// ```
pub fn generate(target_count: usize, config: SamplerConfig) -> Result<Vec<Point>> {
    Sampler::new(config).generate(target_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{
        CircleFilter, DensityFilter, FnFilter, PointFilter, RectangleFilter,
    };
    use crate::generator::BasicGenerator;

    fn assert_min_spacing(points: &[Point], min_distance: f64) {
        let min_sq = min_distance * min_distance;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d2 = a.distance_squared(b);
                assert!(
                    d2 >= min_sq - 1e-12,
                    "points {:?} and {:?} are too close: {} < {}",
                    a,
                    b,
                    d2.sqrt(),
                    min_distance
                );
            }
        }
    }

    #[test]
    fn test_default_generation() {
        let points = generate(100, SamplerConfig::default()).unwrap();

        assert!(!points.is_empty());
        assert!(points.len() <= 100);
        for p in &points {
            assert!((0.0..=1.0).contains(&p.x), "x out of range: {:?}", p);
            assert!((0.0..=1.0).contains(&p.y), "y out of range: {:?}", p);
        }
        // derived min distance is sqrt(100) / 100
        assert_min_spacing(&points, 0.1);
    }

    #[test]
    fn test_reaches_target_count() {
        let config = SamplerConfig::builder()
            .seed(1)
            .min_distance(0.01)
            .unwrap()
            .build();

        let points = generate(1000, config).unwrap();
        assert_eq!(points.len(), 1000);
        assert_min_spacing(&points, 0.01);
    }

    #[test]
    fn test_saturates_domain() {
        let config = SamplerConfig::builder()
            .seed(8)
            .min_distance(0.2)
            .unwrap()
            .build();

        let points = generate(10_000, config).unwrap();
        assert!(points.len() > 1);
        // a 0.2 spacing cannot fit anywhere near the target
        assert!(points.len() < 100);
        assert_min_spacing(&points, 0.2);
    }

    #[test]
    fn test_determinism() {
        let build = || {
            SamplerConfig::builder()
                .seed(42)
                .min_distance(0.03)
                .unwrap()
                .build()
        };

        let first = generate(500, build()).unwrap();
        let second = generate(500, build()).unwrap();
        assert_eq!(first, second, "Same seed should produce identical points");
    }

    #[test]
    fn test_different_seeds() {
        let first = generate(200, SamplerConfig::builder().seed(1).build()).unwrap();
        let second = generate(200, SamplerConfig::builder().seed(2).build()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sampler_continues_random_stream() {
        let mut sampler = Sampler::new(SamplerConfig::builder().seed(5).build());
        let first = sampler.generate(50).unwrap();
        let second = sampler.generate(50).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_tries_yields_start_point() {
        let config = SamplerConfig::builder()
            .tries(0)
            .start_point(0.3, 0.6)
            .unwrap()
            .build();

        let points = generate(100, config).unwrap();
        assert_eq!(points, vec![Point::new(0.3, 0.6)]);
    }

    #[test]
    fn test_zero_tries_random_start() {
        let config = SamplerConfig::builder().tries(0).seed(3).build();
        let points = generate(100, config).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_zero_target_is_empty() {
        let points = generate(0, SamplerConfig::default()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_start_point_comes_first() {
        let config = SamplerConfig::builder()
            .seed(10)
            .start_point(0.5, 0.5)
            .unwrap()
            .build();

        let points = generate(300, config).unwrap();
        assert_eq!(points[0], Point::new(0.5, 0.5));
        assert!(points.len() > 1);
    }

    #[test]
    fn test_origin_start_point_rejected() {
        let config = SamplerConfig::builder()
            .start_point(0.0, 0.0)
            .unwrap()
            .build();

        let result = generate(10, config);
        assert!(matches!(
            result,
            Err(PoissonError::InvalidStartPoint { x, y }) if x == 0.0 && y == 0.0
        ));
    }

    #[test]
    fn test_start_point_outside_area_rejected() {
        let config = SamplerConfig::builder()
            .area_filter(CircleFilter::new(0.5, 0.5, 0.1))
            .start_point(0.9, 0.9)
            .unwrap()
            .build();

        assert!(matches!(
            generate(10, config),
            Err(PoissonError::InvalidStartPoint { .. })
        ));
    }

    #[test]
    fn test_start_point_outside_unit_square_rejected() {
        let config = SamplerConfig::builder()
            .area_filter(RectangleFilter::new(-0.5, 1.5))
            .start_point(1.2, 0.5)
            .unwrap()
            .build();

        assert!(matches!(
            generate(10, config),
            Err(PoissonError::InvalidStartPoint { x, y }) if x == 1.2 && y == 0.5
        ));
    }

    #[test]
    fn test_wide_area_filter_keeps_spacing() {
        let config = SamplerConfig::builder()
            .seed(1)
            .min_distance(0.05)
            .unwrap()
            .area_filter(RectangleFilter::new(-0.5, 1.5))
            .build();

        let points = generate(5000, config).unwrap();

        assert!(points.len() > 100);
        for p in &points {
            assert!((0.0..=1.0).contains(&p.x), "x out of range: {:?}", p);
            assert!((0.0..=1.0).contains(&p.y), "y out of range: {:?}", p);
        }
        assert_min_spacing(&points, 0.05);
    }

    #[test]
    fn test_seed_points_outside_unit_square_skipped() {
        let config = SamplerConfig::builder()
            .seed(3)
            .min_distance(0.05)
            .unwrap()
            .seed_points(vec![Point::new(1.3, 0.5), Point::new(-2.0, -2.0)])
            .build();

        let points = generate(2000, config).unwrap();
        assert!(points.len() > 100);
        assert_min_spacing(&points, 0.05);
    }

    #[test]
    fn test_seed_search_bounded() {
        let config = SamplerConfig::builder()
            .area_filter(FnFilter::new(|_: &Point| false))
            .max_seed_attempts(25)
            .unwrap()
            .build();

        assert!(matches!(
            generate(10, config),
            Err(PoissonError::SeedSearchExhausted { attempts: 25 })
        ));
    }

    #[test]
    fn test_points_stay_in_area() {
        let area = CircleFilter::new(0.5, 0.5, 0.25);
        let config = SamplerConfig::builder()
            .seed(21)
            .min_distance(0.02)
            .unwrap()
            .area_filter(area)
            .build();

        let points = generate(5000, config).unwrap();
        let mut generator = BasicGenerator::new(0);

        assert!(points.len() > 10);
        for p in &points {
            assert!(area.accept(p, &mut generator), "{:?} outside circle", p);
        }
        assert_min_spacing(&points, 0.02);
    }

    #[test]
    fn test_rectangle_area() {
        let area = RectangleFilter::new(0.2, 0.8);
        let config = SamplerConfig::builder()
            .seed(4)
            .area_filter(area)
            .build();

        let points = generate(400, config).unwrap();
        let mut generator = BasicGenerator::new(0);
        for p in &points {
            assert!(area.accept(p, &mut generator));
        }
    }

    #[test]
    fn test_seed_points_block_candidates() {
        let seeds: Vec<Point> = (1..5)
            .map(|i| Point::new(i as f64 * 0.2, 0.5))
            .collect();
        let config = SamplerConfig::builder()
            .seed(6)
            .min_distance(0.05)
            .unwrap()
            .seed_points(seeds.clone())
            .start_point(0.1, 0.1)
            .unwrap()
            .build();

        let points = generate(2000, config).unwrap();

        assert!(points.len() > 10);
        for p in &points {
            assert!(!seeds.contains(p), "seed points are not part of the output");
            for s in &seeds {
                assert!(p.distance_squared(s) >= 0.05 * 0.05 - 1e-12);
            }
        }
    }

    #[test]
    fn test_post_filter_keeps_order() {
        let build = || {
            SamplerConfig::builder()
                .seed(12)
                .min_distance(0.04)
                .unwrap()
        };

        let all = generate(400, build().build()).unwrap();
        let filtered = generate(
            400,
            build().post_filter(RectangleFilter::new(0.0, 0.5)).build(),
        )
        .unwrap();

        let expected: Vec<Point> = all
            .iter()
            .copied()
            .filter(|p| p.x <= 0.5 && p.y <= 0.5)
            .collect();
        assert_eq!(filtered, expected);
        assert!(filtered.len() < all.len());
    }

    #[test]
    fn test_zero_density_post_filter_empties_output() {
        let unfiltered = generate(200, SamplerConfig::builder().seed(9).build()).unwrap();
        assert!(!unfiltered.is_empty());

        let config = SamplerConfig::builder()
            .seed(9)
            .post_filter(DensityFilter::new(|_: &Point| 0.0))
            .build();
        let points = generate(200, config).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_zero_density_area_filter_finds_no_start() {
        let config = SamplerConfig::builder()
            .area_filter(DensityFilter::new(|_: &Point| 0.0))
            .max_seed_attempts(100)
            .unwrap()
            .build();

        assert!(matches!(
            generate(50, config),
            Err(PoissonError::SeedSearchExhausted { attempts: 100 })
        ));
    }

    #[test]
    fn test_full_density_post_filter_keeps_everything() {
        let all = generate(300, SamplerConfig::builder().seed(14).build()).unwrap();
        let kept = generate(
            300,
            SamplerConfig::builder()
                .seed(14)
                .post_filter(DensityFilter::new(|_: &Point| 1.0))
                .build(),
        )
        .unwrap();
        assert_eq!(all, kept);
    }

    #[test]
    fn test_perlin_post_filter_is_subset() {
        let all = generate(2000, SamplerConfig::builder().seed(30).build()).unwrap();
        let kept = generate(
            2000,
            SamplerConfig::builder()
                .seed(30)
                .post_filter(DensityFilter::perlin(1024, 1024, 128.0, 0).unwrap())
                .build(),
        )
        .unwrap();

        assert!(!kept.is_empty());
        assert!(kept.len() < all.len());
        let mut remaining = all.iter();
        for p in &kept {
            assert!(remaining.any(|q| q == p), "{:?} missing or out of order", p);
        }
    }

    #[test]
    fn test_density_area_filter_thins_points() {
        // left half dense, right half empty
        let config = SamplerConfig::builder()
            .seed(2)
            .min_distance(0.03)
            .unwrap()
            .start_point(0.25, 0.5)
            .unwrap()
            .area_filter(DensityFilter::new(|p: &Point| {
                if (0.0..0.5).contains(&p.x) && (0.0..=1.0).contains(&p.y) {
                    1.0
                } else {
                    0.0
                }
            }))
            .build();

        let points = generate(5000, config).unwrap();
        assert!(points.len() > 10);
        assert!(points.iter().all(|p| p.x < 0.5));
        assert_min_spacing(&points, 0.03);
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let config = SamplerConfig::builder()
            .min_distance(1e-7)
            .unwrap()
            .build();
        assert!(matches!(
            generate(10, config),
            Err(PoissonError::InvalidConfig(_))
        ));
    }
}
