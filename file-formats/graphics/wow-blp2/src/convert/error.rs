use ::image::error::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a decoded texture to disk
#[derive(Debug, Error)]
pub enum Error {
    /// The encoder or the file system rejected the output
    #[error("Failed to write {path}: {1}", path = .0.display())]
    WriteFailed(PathBuf, #[source] ImageError),
    /// Pixel buffer does not match the image dimensions
    #[error("Image is {0}x{1}, but there are {2} bytes of pixel data")]
    BufferSize(u32, u32, usize),
}
