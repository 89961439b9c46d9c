//! Image-backed density source
//!
//! Only available with the `image` feature.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

use super::density::{DensityFilter, DensitySource};
use crate::error::{PoissonError, Result};
use crate::point::Point;

/// Grayscale raster used as a density map
///
/// The point `(x, y)` reads the pixel `(floor(x * width), floor(y * height))`,
/// clamped to the image. Black is density 0, white is density 1. Colour
/// images are reduced to their red channel, not to luma.
#[derive(Debug, Clone)]
pub struct ImageDensity {
    pixels: GrayImage,
}

impl ImageDensity {
    /// Load and decode a density image from disk
    ///
    /// # Errors
    ///
    /// Returns `PoissonError::Image` if the file cannot be opened or decoded,
    /// and `InvalidDensitySource` if it has no pixels.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path)?;
        Self::from_image(&img)
    }

    /// Build from an already decoded image, keeping its 8-bit red channel
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        let rgba = img.to_rgba8();
        let red = GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            Luma([rgba.get_pixel(x, y).0[0]])
        });
        Self::from_gray(red)
    }

    pub fn from_gray(pixels: GrayImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(PoissonError::InvalidDensitySource(format!(
                "density image must be non-empty (got {}x{})",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    fn pixel_index(coord: f64, size: u32) -> u32 {
        let scaled = (coord * size as f64).floor();
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as u32).min(size - 1)
        }
    }
}

impl DensitySource for ImageDensity {
    fn density(&self, point: &Point) -> f64 {
        let px = Self::pixel_index(point.x, self.pixels.width());
        let py = Self::pixel_index(point.y, self.pixels.height());
        self.pixels.get_pixel(px, py).0[0] as f64 / 255.0
    }
}

impl DensityFilter<ImageDensity> {
    /// Density filter reading a grayscale image from disk
    pub fn image_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(ImageDensity::from_path(path)?))
    }
}
