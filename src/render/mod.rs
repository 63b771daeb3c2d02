//! Image rendering
//!
//! Builds one camera ray per pixel, traces it and stores the color.
//!
//! # Optimizations
//! - **Row Iteration**: rows come from `par_chunks_mut(width)`, so the pixel
//!   coordinate never needs `i % w` / `i / w`.
//! - **Incremental Ray Generation**: the vertical coordinate is computed once
//!   per row.
//! - **Per-Worker Tracer**: `for_each_init` gives every rayon worker its own
//!   [`Tracer`] and scratch buffer; the scene is shared read-only.

mod config;
pub mod shade;

pub use config::RenderConfig;

use crate::raycast::Tracer;
use crate::scene::{Camera, Scene};
use crate::stats::MarchStats;
use crate::types::{Color, Ray};
use glam::DVec3;
use log::info;
use rayon::prelude::*;
use std::time::Instant;

/// Rendered image, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Image {
    /// Black image
    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(row, col)`
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        self.pixels[row * self.width + col]
    }

    /// Set the color at `(row, col)`
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, color: Color) {
        self.pixels[row * self.width + col] = color;
    }

    /// All pixels, row by row
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// True if the image has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Pixel-center camera-space coordinates for an image
///
/// `x = (2 (col + 0.5) / width - 1) * aspect * tan(fov / 2)`,
/// `y = (1 - 2 (row + 0.5) / height) * tan(fov / 2)`.
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid {
    origin: DVec3,
    half_fov_tan: f64,
    aspect: f64,
    inv_width: f64,
    inv_height: f64,
}

impl PixelGrid {
    /// Grid for a camera and image size (both non-zero)
    pub fn new(camera: &Camera, width: usize, height: usize) -> Self {
        PixelGrid {
            origin: camera.position,
            half_fov_tan: camera.half_fov_tan(),
            aspect: width as f64 / height as f64,
            inv_width: 1.0 / width as f64,
            inv_height: 1.0 / height as f64,
        }
    }

    /// Vertical camera-space coordinate of a row
    #[inline]
    pub fn row_y(&self, row: usize) -> f64 {
        (1.0 - 2.0 * (row as f64 + 0.5) * self.inv_height) * self.half_fov_tan
    }

    /// Horizontal camera-space coordinate of a column
    #[inline]
    pub fn col_x(&self, col: usize) -> f64 {
        (2.0 * (col as f64 + 0.5) * self.inv_width - 1.0) * self.aspect * self.half_fov_tan
    }

    /// Ray through camera-space `(x, y)` on the `z = 1` plane
    ///
    /// Camera rotation is not applied.
    #[inline]
    pub fn ray(&self, x: f64, y: f64) -> Ray {
        Ray::new(self.origin, DVec3::new(x, y, 1.0))
    }

    /// Ray through the center of pixel `(row, col)`
    #[inline]
    pub fn pixel_ray(&self, row: usize, col: usize) -> Ray {
        self.ray(self.col_x(col), self.row_y(row))
    }
}

fn render_row(tracer: &mut Tracer<'_>, grid: &PixelGrid, row: usize, pixels: &mut [Color]) {
    let y = grid.row_y(row);
    for (col, pixel) in pixels.iter_mut().enumerate() {
        *pixel = tracer.trace(&grid.ray(grid.col_x(col), y));
    }
}

/// Render `scene` into a `width x height` image
///
/// Rows are spread over the rayon pool unless `config.parallel` is off.
pub fn render(scene: &Scene, config: &RenderConfig, width: usize, height: usize) -> Image {
    if !config.parallel {
        return render_with_stats(scene, config, width, height).0;
    }

    let mut image = Image::new(width, height);
    if image.is_empty() {
        return image;
    }

    let start = Instant::now();
    let grid = PixelGrid::new(scene.camera(), width, height);
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each_init(
            || Tracer::new(scene, config),
            |tracer, (row, pixels)| render_row(tracer, &grid, row, pixels),
        );

    info!(
        "Rendered {}x{} ({} shapes) in {:.2?}",
        width,
        height,
        scene.len(),
        start.elapsed()
    );
    image
}

/// Render on the current thread and return the march counters too
pub fn render_with_stats(
    scene: &Scene,
    config: &RenderConfig,
    width: usize,
    height: usize,
) -> (Image, MarchStats) {
    let mut image = Image::new(width, height);
    if image.is_empty() {
        return (image, MarchStats::default());
    }

    let start = Instant::now();
    let grid = PixelGrid::new(scene.camera(), width, height);
    let mut tracer = Tracer::new(scene, config);
    for (row, pixels) in image.pixels.chunks_mut(width).enumerate() {
        render_row(&mut tracer, &grid, row, pixels);
    }

    let stats = *tracer.stats();
    info!(
        "Rendered {}x{} ({} shapes) serially in {:.2?}: {} steps ({:.1} per ray), {} full resolves",
        width,
        height,
        scene.len(),
        start.elapsed(),
        stats.steps,
        stats.steps_per_ray(),
        stats.full_resolves
    );
    (image, stats)
}
