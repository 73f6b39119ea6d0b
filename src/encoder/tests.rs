use super::*;
use crate::renderer::{render, RandomPlacement, RenderConfig, Rgb};
use tempfile::tempdir;

fn sample_raster() -> Raster {
    let config = RenderConfig {
        width: 48,
        height: 48,
        tile_size: 8,
        ..RenderConfig::default()
    };
    Raster::filled(config.width, config.height, config.low_color)
}

#[test]
fn test_encoding_is_deterministic() {
    let raster = sample_raster();

    let first = encode_png(&raster).unwrap();
    let second = encode_png(&raster).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_encode_round_trip_preserves_pixels() {
    let config = RenderConfig {
        width: 48,
        height: 48,
        tile_size: 8,
        ..RenderConfig::default()
    };
    let raster = render(&[4, 9, 100], &config, &mut RandomPlacement::new());

    let bytes = encode_png(&raster).unwrap();

    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(info.width, raster.width());
    assert_eq!(info.height, raster.height());
    assert_eq!(&buf[..info.buffer_size()], raster.rgb_bytes().as_slice());
}

#[test]
fn test_background_encodes_as_single_color() {
    let raster = Raster::filled(16, 16, Rgb { r: 20, g: 241, b: 149 });
    let bytes = encode_png(&raster).unwrap();

    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    for pixel in buf[..info.buffer_size()].chunks_exact(3) {
        assert_eq!(pixel, [20, 241, 149]);
    }
}

#[test]
fn test_save_image_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("solmap_1.png");

    let raster = sample_raster();
    save_image(&raster, &path).unwrap();

    assert!(path.exists());
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, encode_png(&raster).unwrap());
}
