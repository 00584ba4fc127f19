//! Command line arguments for blp2img

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wow_blp2::convert::OutputFormat;

#[derive(Parser)]
#[command(name = "blp2img")]
#[command(about = "Convert BLP2 textures to PNG, BMP, TGA or JPG", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// BLP2 files to convert. Each output is written next to its input.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output image format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = FormatArg::Png)]
    pub format: FormatArg,

    /// Print file details while converting (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Portable Network Graphics
    Png,
    /// Windows bitmap
    Bmp,
    /// Truevision TGA
    Tga,
    /// JPEG at quality 100, without alpha
    Jpg,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Bmp => OutputFormat::Bmp,
            FormatArg::Tga => OutputFormat::Tga,
            FormatArg::Jpg => OutputFormat::Jpg,
        }
    }
}
