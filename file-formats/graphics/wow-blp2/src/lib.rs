//! Decoder for World of Warcraft BLP2 (texture) files.
//!
//! This crate reads BLP2 textures whose body is DXT1, DXT3 or DXT5 block
//! compressed and turns the full resolution mipmap into a linear RGBA8
//! buffer. The buffer can be handed to the [`convert`] module to be written
//! as PNG, BMP, TGA or JPG.
//!
//! # Examples
//!
//! ```no_run
//! use wow_blp2::parser::decode;
//!
//! let bytes = std::fs::read("texture.blp").unwrap();
//! let image = decode(&bytes).unwrap();
//! println!("{}x{}", image.width(), image.height());
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Writing decoded images into common raster formats
pub mod convert;
/// Trimmed debug output for large tables
pub mod debug;
/// DXT1/DXT3/DXT5 block codec
pub mod dxtn;
/// BLP2 container parser
pub mod parser;
/// Types describing BLP2 files and decoded images
pub mod types;

pub use parser::{Error, ErrorKind, LoadError, decode, load_blp};
pub use types::{BlpHeader, DecodedImage, DxtnFormat};
