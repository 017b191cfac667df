use centre_colour::{
    image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage},
    CentreColourExtractor, ColourExtractor, Error, ImageLocator, ImageProcessor,
};
use std::path::Path;
use tempfile::TempDir;

/// A 120x80 image filled with `border` except for a 60x60 centre square of `centre`.
fn framed(border: Rgb<u8>, centre: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(120, 80, |x, y| {
        if (30..90).contains(&x) && (10..70).contains(&y) {
            centre
        } else {
            border
        }
    })
}

fn locate_and_extract(dir: &Path, name: &str) -> centre_colour::Result<String> {
    ImageProcessor::located(name, &ImageLocator::new().in_dir(dir))?.get_colour()
}

#[test]
fn png_without_extension() {
    let dir = TempDir::new().unwrap();
    framed(Rgb([0, 0, 0]), Rgb([0x1d, 0x9b, 0xf0]))
        .save(dir.path().join("screenshot.png"))
        .unwrap();

    assert_eq!(locate_and_extract(dir.path(), "screenshot").unwrap(), "1d9bf0");
}

#[test]
fn jpeg_is_preferred_over_png() {
    let dir = TempDir::new().unwrap();
    framed(Rgb([0, 0, 0]), Rgb([255, 255, 255]))
        .save(dir.path().join("both.jpeg"))
        .unwrap();
    framed(Rgb([0, 0, 0]), Rgb([0, 0, 0])).save(dir.path().join("both.png")).unwrap();

    let path = ImageLocator::new().in_dir(dir.path()).locate("both").unwrap();
    assert_eq!(path, dir.path().join("both.jpeg"));

    // jpeg is lossy, but a flat white centre stays close to white
    let hex = CentreColourExtractor::new().get_colour(&path).unwrap();
    let channels = (0..3)
        .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap())
        .collect::<Vec<_>>();
    assert!(channels.iter().all(|&c| c >= 240), "{hex}");
}

#[test]
fn uppercase_extension_is_used_as_given() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("Shot.PNG");
    framed(Rgb([9, 9, 9]), Rgb([0xab, 0xcd, 0xef]))
        .save_with_format(&target, centre_colour::image::ImageFormat::Png)
        .unwrap();

    assert_eq!(locate_and_extract(dir.path(), "Shot.PNG").unwrap(), "abcdef");
}

#[test]
fn rgba_png_drops_alpha_from_output() {
    let dir = TempDir::new().unwrap();
    RgbaImage::from_pixel(64, 64, Rgba([0x10, 0x20, 0x30, 0x40]))
        .save(dir.path().join("translucent.png"))
        .unwrap();

    assert_eq!(locate_and_extract(dir.path(), "translucent").unwrap(), "102030");
}

#[test]
fn greyscale_png_is_unsupported() {
    let dir = TempDir::new().unwrap();
    GrayImage::from_pixel(16, 16, Luma([128]))
        .save(dir.path().join("grey.png"))
        .unwrap();

    let err = locate_and_extract(dir.path(), "grey").unwrap_err();
    assert!(matches!(err, Error::UnsupportedMode { .. }), "{err}");
    assert!(err.to_string().contains("modes supported but got L"), "{err}");
}

#[test]
fn undecodable_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

    let err = locate_and_extract(dir.path(), "broken").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "{err}");
}

#[test]
fn missing_and_empty_names_fail_differently() {
    let dir = TempDir::new().unwrap();

    let missing = locate_and_extract(dir.path(), "nothing_here").unwrap_err();
    assert!(matches!(missing, Error::NotFound { .. }), "{missing}");

    let empty = locate_and_extract(dir.path(), "").unwrap_err();
    assert!(matches!(empty, Error::InvalidInput { .. }), "{empty}");
}

#[test]
fn directories_are_not_images() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("folder.png")).unwrap();

    let err = ImageLocator::new().in_dir(dir.path()).locate("folder").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "{err}");
}
