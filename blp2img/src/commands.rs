//! Conversion of a single BLP2 file

use crate::output::output_path;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wow_blp2::convert::{OutputFormat, save_image};
use wow_blp2::parser::{decode_content, parse_header};
use wow_blp2::{BlpHeader, DecodedImage};

/// Edge length of the pixel sample printed in verbose mode
const SAMPLE_SIZE: u32 = 4;

/// Decode `input` and write it next to itself in `format`.
///
/// Returns the path of the written image.
pub fn convert_file(input: &Path, format: OutputFormat, verbose: bool) -> Result<PathBuf> {
    let output = output_path(input, format);
    if verbose {
        print_path_details(input, format);
    }

    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read BLP file: {}", input.display()))?;
    let header = parse_header(&bytes)
        .with_context(|| format!("Invalid BLP file: {}", input.display()))?;
    log::debug!("Parsed {header}");
    if verbose {
        print_header_details(&header);
    }

    let image = decode_content(&header, &bytes)
        .with_context(|| format!("Failed to decode BLP file: {}", input.display()))?;

    if verbose {
        println!("Saving decoded image as {}", format.extension().to_uppercase());
    }
    save_image(&image, &output, format)
        .with_context(|| format!("Failed to write {} file", output.display()))?;

    if verbose {
        print_pixel_sample(&image);
    }
    Ok(output)
}

fn print_path_details(input: &Path, format: OutputFormat) {
    let component = |value: Option<&std::ffi::OsStr>| {
        value.map_or_else(String::new, |v| v.to_string_lossy().into_owned())
    };

    println!("Processing File:");
    println!("  Fullname: {}", input.display());
    println!("  Folder: {}", component(input.parent().map(Path::as_os_str)));
    println!("  Filename: {}", component(input.file_stem()));
    println!("  Extension: {}", component(input.extension()));
    println!("  Format: {format}");
}

fn print_header_details(header: &BlpHeader) {
    println!("BLP File Details:");
    println!(
        "  Type: {}, {}",
        header.content_type,
        header.content().map_or("Unknown", |c| c.label())
    );
    println!(
        "  Compression: {}, {}",
        header.compression,
        header.compression_kind().map_or("Unknown", |c| c.label())
    );
    println!("  Alpha Depth: {}", header.alpha_depth);
    println!("  Alpha Type: {}", header.alpha_kind);
    println!("  Has Mipmaps: {}", header.has_mips);
    println!("  Width: {}, Height: {}", header.width, header.height);

    for mip in header.mip_levels() {
        println!(
            "  Mipmap {}: {}x{}, offset {}, size {} bytes",
            mip.level, mip.width, mip.height, mip.offset, mip.length
        );
    }
    let (offset, length) = (header.mip_offsets[0], header.mip_lengths[0]);
    if offset == 0 || length == 0 {
        println!("No image data found.");
    } else {
        println!("Reading image data at offset {offset}, size {length} bytes");
    }
}

fn print_pixel_sample(image: &DecodedImage) {
    println!();
    println!("First few pixels of decoded image (RGBA format):");
    for y in 0..SAMPLE_SIZE.min(image.height()) {
        let row: Vec<String> = (0..SAMPLE_SIZE.min(image.width()))
            .filter_map(|x| image.pixel(x, y))
            .map(|[r, g, b, a]| format!("({r:3},{g:3},{b:3},{a:3})"))
            .collect();
        println!("{}", row.join(" "));
    }
}
