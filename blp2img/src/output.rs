//! Output file naming

use std::path::{Path, PathBuf};
use wow_blp2::convert::OutputFormat;

/// Path of the converted image: the input with its extension replaced by the
/// format's, or the format's extension appended when the input has none.
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}
