use ndarray::{Array2, Zip};
use num_complex::Complex64;

const ESCAPE_RADIUS: f64 = 2.0;

fn compute_next(z: Complex64, c: Complex64) -> Complex64 {
	z * z + c
}

/// Iterates `z <- z^2 + c` from `z = 0` and returns the 0-based iteration at which `|z| >= 2`,
/// or `None` if `z` stays bounded for all `max_iterations` steps.
pub fn escape_time(c: Complex64, max_iterations: u32) -> Option<u32> {
	let mut zn = Complex64::new(0.0, 0.0);
	for iteration in 0..max_iterations {
		zn = compute_next(zn, c);
		if zn.norm() >= ESCAPE_RADIUS {
			return Some(iteration);
		}
	}
	None
}

/// Evaluates every point of `c_grid` and maps its escape time to a greyscale intensity.
///
/// Runs `max_iterations + 1` masked steps. A point's escape time `t` is the number of steps
/// completed when `|z| > 2` first holds, after which the point is frozen. Intensity is
/// `(max_iterations - t + 1) / (max_iterations + 1)`; points that never escape keep
/// `t = max_iterations + 1` and come out black.
pub fn escape_intensity(c_grid: &Array2<Complex64>, max_iterations: u32) -> Array2<f64> {
	let not_escaped = u64::from(max_iterations) + 1;
	log::debug!(
		"evaluating {}x{} grid with {} iterations",
		c_grid.nrows(),
		c_grid.ncols(),
		max_iterations
	);

	let mut z = Array2::<Complex64>::zeros(c_grid.raw_dim());
	let mut escape_times = Array2::<u64>::from_elem(c_grid.raw_dim(), not_escaped);
	let mut active = Array2::<bool>::from_elem(c_grid.raw_dim(), true);
	let mut remaining = c_grid.len();

	for steps in 1..=not_escaped {
		if remaining == 0 {
			if !c_grid.is_empty() {
				log::debug!("all points escaped after {} steps", steps - 1);
			}
			break;
		}
		Zip::from(&mut z)
			.and(&mut escape_times)
			.and(&mut active)
			.and(c_grid)
			.for_each(|z, escape_time, active, &c| {
				if !*active {
					return;
				}
				*z = compute_next(*z, c);
				if z.norm() > ESCAPE_RADIUS {
					*escape_time = steps;
					*active = false;
					remaining -= 1;
				}
			});
		log::trace!("step {}: {} points still active", steps, remaining);
	}

	log::debug!(
		"{} of {} points escaped",
		c_grid.len() - remaining,
		c_grid.len()
	);

	let scale = not_escaped as f64;
	escape_times.mapv(|t| (not_escaped - t) as f64 / scale)
}
