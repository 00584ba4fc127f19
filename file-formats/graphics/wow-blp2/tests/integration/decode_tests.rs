use crate::common::*;
use pretty_assertions::assert_eq;
use test_log::test;
use wow_blp2::types::{Compression, ContentType};
use wow_blp2::{Error, ErrorKind, LoadError, decode, load_blp, parser::parse_header};

#[test]
fn test_dxt1_solid_red() {
    let file = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec()).build();
    let image = decode(&file).unwrap();

    assert_eq!((image.width(), image.height()), (4, 4));
    assert_eq!(image.pixels().len(), 64);
    assert!(image.pixels().chunks_exact(4).all(|p| p == [248, 0, 0, 255]));
}

#[test]
fn test_dxt1_transparent_mode() {
    let file = BlpBuilder::dxt1(4, 4, TRANSPARENT_MODE.to_vec()).build();
    let image = decode(&file).unwrap();

    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(pixel(&image, x, y), [0, 0, 0, 255]);
        }
    }
    for x in 0..4 {
        assert_eq!(pixel(&image, x, 3), [0, 0, 0, 0]);
    }
}

#[test]
fn test_dxt3_half_alpha() {
    let mut block = vec![0x88; 8];
    block.extend_from_slice(&SOLID_RED);
    let file = BlpBuilder::dxt3(4, 4, block).build();
    let image = decode(&file).unwrap();

    assert!(image.pixels().chunks_exact(4).all(|p| p == [248, 0, 0, 0x88]));
}

#[test]
fn test_dxt5_eight_alpha_ramp() {
    let order = [0, 2, 3, 4, 5, 6, 7, 1, 0, 2, 3, 4, 5, 6, 7, 1];
    let mut block = vec![0xFF, 0x00];
    block.extend_from_slice(&pack_alpha_indices(order));
    block.extend_from_slice(&SOLID_RED);
    let file = BlpBuilder::dxt5(4, 4, block).build();
    let image = decode(&file).unwrap();

    let alphas: Vec<u8> = (0..8).map(|x| pixel(&image, x % 4, x / 4)[3]).collect();
    assert_eq!(alphas, [255, 218, 182, 145, 109, 72, 36, 0]);
    assert_eq!(pixel(&image, 0, 2), [248, 0, 0, 255]);
    assert_eq!(pixel(&image, 3, 3), [248, 0, 0, 0]);
}

#[test]
fn test_non_multiple_dimensions() {
    // Block (1, 0) is white; its tile pixel (0, 2) lands on image (4, 2).
    let mut blocks = SOLID_RED.to_vec();
    blocks.extend_from_slice(&[0xFF, 0xFF, 0x00, 0x00, 0, 0, 0, 0]);
    let file = BlpBuilder::dxt1(5, 3, blocks).build();
    let image = decode(&file).unwrap();

    assert_eq!(image.pixels().len(), 60);
    assert_eq!(pixel(&image, 4, 2), [248, 252, 248, 255]);
    assert_eq!(pixel(&image, 3, 2), [248, 0, 0, 255]);
    assert_eq!(image.pixel(5, 0), None);
    assert_eq!(image.pixel(0, 3), None);
}

#[test]
fn test_bad_magic() {
    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.magic = *b"BLP1";
    let err = decode(&builder.build()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadMagic);
    assert!(err.to_string().contains("BLP1"), "{err}");
}

#[test]
fn test_unsupported_content() {
    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.content_type = 0;
    let err = decode(&builder.build()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedContentType);
    assert!(matches!(err, Error::UnsupportedContentType(0)));

    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.content_type = 5;
    assert_eq!(
        decode(&builder.build()).unwrap_err().kind(),
        ErrorKind::UnsupportedContentType
    );
}

#[test]
fn test_unsupported_compression() {
    for compression in [1, 3, 0, 9] {
        let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
        builder.compression = compression;
        let err = decode(&builder.build()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCompression, "{compression}");
    }
}

#[test]
fn test_unsupported_alpha_kind() {
    let mut builder = BlpBuilder::dxt5(4, 4, vec![0; 16]);
    builder.alpha_kind = 8;
    let err = decode(&builder.build()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedAlphaKind);
    assert!(matches!(err, Error::UnsupportedAlphaKind(8)));
}

#[test]
fn test_missing_mip_level() {
    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.mip_length = Some(0);
    assert_eq!(decode(&builder.build()).unwrap_err().kind(), ErrorKind::NoMipLevel);

    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.mip_offset = Some(0);
    assert_eq!(decode(&builder.build()).unwrap_err().kind(), ErrorKind::NoMipLevel);
}

#[test]
fn test_mip_range_outside_file() {
    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.mip_length = Some(16);
    let err = decode(&builder.build()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);

    let mut builder = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec());
    builder.mip_offset = Some(10_000);
    let err = decode(&builder.build()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn test_block_data_size_mismatch() {
    // 8x8 DXT1 needs four blocks, only one is present.
    let file = BlpBuilder::dxt1(8, 8, SOLID_RED.to_vec()).build();
    let err = decode(&file).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert!(matches!(
        err,
        Error::BlockCountMismatch {
            expected: 32,
            actual: 8,
            ..
        }
    ));
}

#[test]
fn test_truncated_header() {
    let file = BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec()).build();
    for len in [0, 4, 500, 1171] {
        let err = decode(&file[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated, "length {len}");
    }
}

#[test]
fn test_header_of_unsupported_file_is_still_readable() {
    let mut builder = BlpBuilder::dxt1(64, 32, Vec::new());
    builder.compression = 1;
    builder.has_mips = 1;
    let header = parse_header(&builder.build()).unwrap();

    assert_eq!(header.content(), Some(ContentType::Direct));
    assert_eq!(header.compression_kind(), Some(Compression::Palettized));
    assert_eq!((header.width, header.height), (64, 32));
    assert!(header.has_mipmaps());
}

#[test]
fn test_every_pixel_comes_from_its_block() {
    // 10x6 DXT1 with one distinct solid color per block.
    let colors = [0xF800u16, 0x07E0, 0x001F, 0xFFE0, 0x07FF, 0xF81F];
    let blocks: Vec<u8> = colors
        .iter()
        .flat_map(|c| {
            let [lo, hi] = c.to_le_bytes();
            [lo, hi, 0, 0, 0, 0, 0, 0]
        })
        .collect();
    let image = decode(&BlpBuilder::dxt1(10, 6, blocks).build()).unwrap();

    assert_eq!(image.pixels().len(), 4 * 10 * 6);
    for y in 0..6 {
        for x in 0..10 {
            let c = colors[(y / 4 * 3 + x / 4) as usize];
            let expected = [
                ((c >> 11) << 3) as u8,
                (((c >> 5) & 0x3F) << 2) as u8,
                ((c & 0x1F) << 3) as u8,
                255,
            ];
            assert_eq!(pixel(&image, x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.blp");
    std::fs::write(&path, BlpBuilder::dxt1(4, 4, SOLID_RED.to_vec()).build()).unwrap();

    let image = load_blp(&path).unwrap();
    assert_eq!(pixel(&image, 2, 2), [248, 0, 0, 255]);
}

#[test]
fn test_load_errors_carry_the_path() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.blp");
    let err = load_blp(&missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, LoadError::FileSystem(ref p, _) if *p == missing));

    let bogus = dir.path().join("bogus.blp");
    std::fs::write(&bogus, b"BLP1 and then some").unwrap();
    let err = load_blp(&bogus).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadMagic);
    assert!(matches!(err, LoadError::Parsing(ref p, _) if *p == bogus));
}
