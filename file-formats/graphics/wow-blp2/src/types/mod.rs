/// DXT compression variants
pub mod dxtn;
/// BLP2 file header structures
pub mod header;
/// Decoded RGBA8 image
pub mod image;

pub use self::image::*;
pub use dxtn::*;
pub use header::*;
