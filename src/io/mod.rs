//! Image output
//!
//! # Optimizations
//! - **Buffered I/O**: `BufWriter` around the output file.
//! - **Single Write Per Row**: each row is quantized into a reused byte buffer.

mod ppm;

pub use ppm::{save_ppm, write_ppm};

use thiserror::Error;

/// Image I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image with zero width or height
    #[error("cannot write an empty image")]
    EmptyImage,
}
