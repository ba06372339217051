#[derive(Debug, thiserror::Error)]
pub enum FractalError {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Image error: {0}")]
	Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FractalError>;
