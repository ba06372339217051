use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::{FractalError, Result};

fn gray_level(intensity: f64) -> u8 {
	(255.0 * intensity.clamp(0.0, 1.0)) as u8
}

// (width, height) of the image for a rows x cols grid
fn image_dimensions(rows: usize, cols: usize) -> Result<(u32, u32)> {
	match (u32::try_from(cols), u32::try_from(rows)) {
		(Ok(width), Ok(height)) => Ok((width, height)),
		_ => Err(FractalError::InvalidArgument(format!(
			"a {}x{} intensity grid exceeds the largest image size",
			rows, cols
		))),
	}
}

/// Converts an intensity grid into an 8-bit greyscale image, row 0 at the top.
pub fn intensity_to_image(intensity: &Array2<f64>) -> Result<GrayImage> {
	let (width, height) = image_dimensions(intensity.nrows(), intensity.ncols())?;
	Ok(GrayImage::from_fn(width, height, |x, y| {
		Luma([gray_level(intensity[[y as usize, x as usize]])])
	}))
}

pub fn save_intensity_png<P: AsRef<Path>>(intensity: &Array2<f64>, path: P) -> Result<()> {
	if intensity.is_empty() {
		return Err(FractalError::InvalidArgument(format!(
			"cannot encode an empty {}x{} intensity grid",
			intensity.nrows(),
			intensity.ncols()
		)));
	}

	let path = path.as_ref();
	let image = intensity_to_image(intensity)?;
	image.save_with_format(path, ImageFormat::Png)?;
	log::debug!(
		"wrote {}x{} image to {}",
		image.width(),
		image.height(),
		path.display()
	);
	Ok(())
}
