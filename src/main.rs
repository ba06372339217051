use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mandelbrot_grid::{escape_intensity, escape_time, save_intensity_png, Complex64, Region};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Render a region of the complex plane to a greyscale PNG
	Render {
		/// Top left corner as RE,IM
		#[arg(long, default_value = "-2,1.5", value_parser = parse_complex, allow_hyphen_values = true)]
		top_left: Complex64,

		/// Bottom right corner as RE,IM
		#[arg(long, default_value = "1,-1.5", value_parser = parse_complex, allow_hyphen_values = true)]
		bottom_right: Complex64,

		/// Distance between neighbouring samples
		#[arg(short, long, default_value_t = 0.005)]
		step: f64,

		/// Maximum iterations
		#[arg(short, long, default_value_t = 100)]
		max_iterations: u32,

		/// Output file
		#[arg(short, long, default_value = "mandelbrot.png")]
		output: PathBuf,
	},
	/// Report the escape time of a single point
	Probe {
		/// Point as RE,IM
		#[arg(value_parser = parse_complex, allow_hyphen_values = true)]
		point: Complex64,

		/// Maximum iterations
		#[arg(short, long, default_value_t = 100)]
		max_iterations: u32,
	},
}

/// Parse a complex number written as `re,im`, e.g. `-0.75,0.1`
fn parse_complex(s: &str) -> Result<Complex64, String> {
	let (re, im) = s
		.split_once(',')
		.ok_or_else(|| format!("expected RE,IM but got '{}'", s))?;
	let re = re
		.trim()
		.parse::<f64>()
		.map_err(|e| format!("invalid real part '{}': {}", re, e))?;
	let im = im
		.trim()
		.parse::<f64>()
		.map_err(|e| format!("invalid imaginary part '{}': {}", im, e))?;
	Ok(Complex64::new(re, im))
}

fn render(region: Region, max_iterations: u32, output: PathBuf) -> anyhow::Result<()> {
	let now = Instant::now();

	let grid = region.sample().context("could not sample the requested region")?;
	let intensity = escape_intensity(&grid, max_iterations);
	save_intensity_png(&intensity, &output)
		.with_context(|| format!("could not write '{}'", output.display()))?;

	log::info!(
		"rendered {}x{} image to {} in {:.2?}",
		intensity.ncols(),
		intensity.nrows(),
		output.display(),
		now.elapsed()
	);
	Ok(())
}

fn probe(point: Complex64, max_iterations: u32) {
	match escape_time(point, max_iterations) {
		Some(iteration) => println!("{} escaped at iteration {}", point, iteration),
		None => println!(
			"{} did not escape within {} iterations",
			point, max_iterations
		),
	}
}

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args: Args = Args::parse();
	match args.command {
		Command::Render {
			top_left,
			bottom_right,
			step,
			max_iterations,
			output,
		} => render(Region::new(top_left, bottom_right, step), max_iterations, output),
		Command::Probe {
			point,
			max_iterations,
		} => {
			probe(point, max_iterations);
			Ok(())
		}
	}
}
