//! Escape-time evaluation of the Mandelbrot set over a sampled region of the complex plane.

mod error;
mod fractal;
mod grid;
mod render;

pub use error::{FractalError, Result};
pub use fractal::{escape_intensity, escape_time};
pub use grid::{grid_shape, sample_grid, Region};
pub use render::{intensity_to_image, save_intensity_png};

pub use ndarray::Array2;
pub use num_complex::Complex64;
