use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{FractalError, Result};

/// Rectangle of the complex plane together with the lattice spacing used to sample it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
	pub top_left: Complex64,
	pub bottom_right: Complex64,
	pub step: f64,
}

impl Region {
	pub fn new(top_left: Complex64, bottom_right: Complex64, step: f64) -> Self {
		Self {
			top_left,
			bottom_right,
			step,
		}
	}

	pub fn shape(&self) -> Result<(usize, usize)> {
		grid_shape(self.top_left, self.bottom_right, self.step)
	}

	pub fn sample(&self) -> Result<Array2<Complex64>> {
		sample_grid(self.top_left, self.bottom_right, self.step)
	}
}

impl Default for Region {
	fn default() -> Self {
		Self::new(Complex64::new(-2.0, 1.5), Complex64::new(1.0, -1.5), 0.005)
	}
}

// Number of terms in the half-open sequence start, start + step, ... below start + span.
fn axis_len(span: f64, step: f64) -> usize {
	let n = (span / step).ceil();
	if n > 0.0 {
		n as usize
	} else {
		0
	}
}

fn check_inputs(top_left: Complex64, bottom_right: Complex64, step: f64) -> Result<()> {
	if !step.is_finite() || step <= 0.0 {
		return Err(FractalError::InvalidArgument(format!(
			"step must be a positive finite number, got {}",
			step
		)));
	}
	for (name, corner) in [("top_left", top_left), ("bottom_right", bottom_right)] {
		if !corner.is_finite() {
			return Err(FractalError::InvalidArgument(format!(
				"{} must be finite, got {}",
				name, corner
			)));
		}
	}
	Ok(())
}

// ndarray requires the product of the non-zero axis lengths, in bytes, to fit in an isize.
fn check_size(rows: usize, cols: usize) -> Result<()> {
	let bytes = rows
		.max(1)
		.checked_mul(cols.max(1))
		.and_then(|cells| cells.checked_mul(std::mem::size_of::<Complex64>()));
	match bytes {
		Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
		_ => Err(FractalError::InvalidArgument(format!(
			"a {}x{} grid is too large to allocate",
			rows, cols
		))),
	}
}

/// Returns `(rows, cols)` of the grid [`sample_grid`] would produce for the same inputs.
pub fn grid_shape(top_left: Complex64, bottom_right: Complex64, step: f64) -> Result<(usize, usize)> {
	check_inputs(top_left, bottom_right, step)?;
	let cols = axis_len(bottom_right.re - top_left.re, step);
	let rows = axis_len(top_left.im - bottom_right.im, step);
	check_size(rows, cols)?;
	Ok((rows, cols))
}

/// Samples the rectangle spanned by `top_left` and `bottom_right` on a regular lattice.
///
/// Columns run over `top_left.re, top_left.re + step, ...` strictly below `bottom_right.re`,
/// rows over `top_left.im, top_left.im - step, ...` strictly above `bottom_right.im`, so
/// `grid[[0, 0]] == top_left`. An empty rectangle gives a zero-length axis.
pub fn sample_grid(top_left: Complex64, bottom_right: Complex64, step: f64) -> Result<Array2<Complex64>> {
	let (rows, cols) = grid_shape(top_left, bottom_right, step)?;
	log::debug!(
		"sampling {}x{} grid from {} to {} with step {}",
		rows,
		cols,
		top_left,
		bottom_right,
		step
	);

	Ok(Array2::from_shape_fn((rows, cols), |(row, col)| Complex64 {
		re: top_left.re + col as f64 * step,
		// rows go down while the imaginary part goes up
		im: top_left.im - row as f64 * step,
	}))
}
