use thiserror::Error;

/// Errors that appears when loading from filesystem
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
    /// The file was read but is not a decodable BLP2 texture
    #[error("Failed to decode {0}: {1}")]
    Parsing(std::path::PathBuf, #[source] Error),
}

impl LoadError {
    /// Category of the failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FileSystem(..) => ErrorKind::Io,
            LoadError::Parsing(_, e) => e.kind(),
        }
    }
}

/// Category of a decoding failure, independent of the details carried by
/// [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading the file failed
    Io,
    /// The first four bytes are not `BLP2`
    BadMagic,
    /// The body is not direct content
    UnsupportedContentType,
    /// The body is not DXT compressed
    UnsupportedCompression,
    /// The alpha kind does not select DXT1, DXT3 or DXT5
    UnsupportedAlphaKind,
    /// The header has no full resolution mipmap
    NoMipLevel,
    /// The file is shorter than what the header declares, or the mipmap size
    /// disagrees with the image dimensions
    Truncated,
}

/// Errors that BLP parser can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid magic bytes in BLP header
    #[error("Unexpected magic value {0}. The file format is not BLP2.")]
    WrongMagic(String),
    /// Content type other than direct
    #[error("Library doesn't support content type: {0}")]
    UnsupportedContentType(u32),
    /// Compression other than DXT
    #[error("Library doesn't support compression tag: {0}")]
    UnsupportedCompression(u8),
    /// Alpha kind that does not map to a DXT variant
    #[error("Library doesn't support alpha type: {0}")]
    UnsupportedAlphaKind(u8),
    /// Offset or length of the first mipmap is zero
    #[error("There is no image data for mipmap 0 (offset {offset}, size {length})")]
    NoMipLevel {
        /// Declared offset of mipmap 0
        offset: u32,
        /// Declared length of mipmap 0
        length: u32,
    },
    /// Image data extends beyond file boundaries
    #[error("Part of image exceeds bounds of file at offset {offset} with size {size}")]
    OutOfBounds {
        /// Offset where the out of bounds access occurred
        offset: usize,
        /// Size of data that was attempted to be read
        size: usize,
    },
    /// The mipmap byte count does not cover the block grid of the image
    #[error(
        "Image of {width}x{height} needs {expected} bytes of blocks, but mipmap has {actual} bytes"
    )]
    BlockCountMismatch {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Bytes required by the block grid
        expected: usize,
        /// Bytes present
        actual: usize,
    },
    /// Unexpected end of file while parsing
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }

    /// Category of the failure, looking through any context wrappers
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::WrongMagic(_) => ErrorKind::BadMagic,
            Error::UnsupportedContentType(_) => ErrorKind::UnsupportedContentType,
            Error::UnsupportedCompression(_) => ErrorKind::UnsupportedCompression,
            Error::UnsupportedAlphaKind(_) => ErrorKind::UnsupportedAlphaKind,
            Error::NoMipLevel { .. } => ErrorKind::NoMipLevel,
            Error::OutOfBounds { .. }
            | Error::BlockCountMismatch { .. }
            | Error::UnexpectedEof => ErrorKind::Truncated,
            Error::Context(_, inner) => inner.kind(),
        }
    }
}
