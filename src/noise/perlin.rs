//! 2D Perlin noise
//!
//! Seeded gradient noise with fractal octaves, used as the built-in noise
//! source for density filters. Uses Ken Perlin's permutation table.

use glam::DVec2;

use super::NoiseSource;

/// Configuration for fractal Perlin noise
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerlinConfig {
    /// Frequency of the first octave (lower = larger features)
    pub base_frequency: f64,
    /// Number of octaves layered together
    pub octaves: usize,
    /// Amplitude decay per octave
    pub persistence: f64,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            base_frequency: 1.0,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

// ============================================================================
// PERMUTATION TABLE
// ============================================================================
// Must remain unchanged to keep seeded noise reproducible.
const PERM: [u32; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Lattice hash mixing the seed into two permutation lookups
#[inline]
fn hash(x: i64, y: i64, seed: u64) -> u32 {
    let seed_hash = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
        >> 32;
    let ix = ((x as u64) ^ seed_hash) & 255;
    let iy = ((y as u64) ^ (seed_hash >> 8)) & 255;
    let a = PERM[ix as usize];
    PERM[((a as u64 + iy) & 255) as usize]
}

/// Dot product of the offset with one of 8 gradient directions
#[inline]
fn gradient(hash_value: u32, x: f64, y: f64) -> f64 {
    match hash_value & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Quintic fade curve: 6t^5 - 15t^4 + 10t^3
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Single octave of 2D Perlin noise, clamped to `[-1, 1]`
fn perlin_2d(pos: DVec2, seed: u64) -> f64 {
    let cell = pos.floor();
    let x0 = cell.x as i64;
    let y0 = cell.y as i64;

    let xf = pos.x - cell.x;
    let yf = pos.y - cell.y;

    let u = fade(xf);
    let v = fade(yf);

    let g00 = gradient(hash(x0, y0, seed), xf, yf);
    let g10 = gradient(hash(x0 + 1, y0, seed), xf - 1.0, yf);
    let g01 = gradient(hash(x0, y0 + 1, seed), xf, yf - 1.0);
    let g11 = gradient(hash(x0 + 1, y0 + 1, seed), xf - 1.0, yf - 1.0);

    let bottom = lerp(g00, g10, u);
    let top = lerp(g01, g11, u);

    lerp(bottom, top, v).clamp(-1.0, 1.0)
}

/// Fractal Brownian motion over [`perlin_2d`], normalized back to `[-1, 1]`
pub fn sample_perlin_fbm(position: DVec2, seed: u64, config: &PerlinConfig) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = config.base_frequency;
    let mut max_value = 0.0;

    for _ in 0..config.octaves.max(1) {
        total += perlin_2d(position * frequency, seed) * amplitude;
        max_value += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    if max_value > 0.0 {
        (total / max_value).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Seeded 2D Perlin noise evaluator
///
/// # Example
///
/// ```
/// use poisson_disk_sampling::{NoiseSource, PerlinNoise};
///
/// let noise = PerlinNoise::new(42);
/// let value = noise.noise(3.7, 1.2);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerlinNoise {
    pub seed: u64,
    pub config: PerlinConfig,
}

impl PerlinNoise {
    /// Single-octave noise with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config: PerlinConfig::default(),
        }
    }

    /// Noise with a custom octave configuration
    pub fn with_config(seed: u64, config: PerlinConfig) -> Self {
        Self { seed, config }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        sample_perlin_fbm(DVec2::new(x, y), self.seed, &self.config)
    }
}
