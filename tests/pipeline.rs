use mandelbrot_grid::{
	escape_intensity, escape_time, grid_shape, intensity_to_image, sample_grid, save_intensity_png,
	Complex64, FractalError, Region,
};
use tempdir::TempDir;

#[test]
fn sample_then_evaluate_keeps_shape() {
	let top_left = Complex64::new(-2.0, 1.0);
	let bottom_right = Complex64::new(0.5, -1.0);
	let step = 0.25;

	let grid = sample_grid(top_left, bottom_right, step).unwrap();
	let intensity = escape_intensity(&grid, 50);

	assert_eq!(grid.dim(), (8, 10));
	assert_eq!(grid_shape(top_left, bottom_right, step).unwrap(), (8, 10));
	assert_eq!(intensity.dim(), grid.dim());
	assert_eq!(grid[[0, 0]], top_left);
}

#[test]
fn origin_row_is_black_and_far_corner_is_bright() {
	let grid = sample_grid(Complex64::new(-1.0, 1.0), Complex64::new(1.0, -1.0), 1.0).unwrap();
	let intensity = escape_intensity(&grid, 10);

	// 0 and -1 stay bounded
	assert_eq!(intensity[[1, 0]], 0.0);
	assert_eq!(intensity[[1, 1]], 0.0);
	assert!(intensity.iter().all(|&v| (0.0..1.0).contains(&v)));

	let far = sample_grid(Complex64::new(3.0, 3.0), Complex64::new(4.0, 2.0), 1.0).unwrap();
	assert_eq!(escape_intensity(&far, 10)[[0, 0]], 10.0 / 11.0);
	assert_eq!(escape_time(far[[0, 0]], 10), Some(0));
}

#[test]
fn renders_region_to_png() {
	let tmp_dir = TempDir::new("pipeline_tests").unwrap();
	let path = tmp_dir.path().join("mandelbrot.png");

	let grid = sample_grid(Complex64::new(-2.0, 1.0), Complex64::new(1.0, -1.0), 0.125).unwrap();
	let intensity = escape_intensity(&grid, 30);
	save_intensity_png(&intensity, &path).unwrap();

	let decoded = image::open(&path).unwrap().into_luma8();
	assert_eq!(decoded, intensity_to_image(&intensity).unwrap());
	assert_eq!((decoded.width(), decoded.height()), (24, 16));
}

#[test]
fn rejects_degenerate_step_before_evaluating() {
	let result = Region::new(Complex64::new(-1.0, 1.0), Complex64::new(1.0, -1.0), 0.0).sample();
	assert!(matches!(result, Err(FractalError::InvalidArgument(_))));
}
