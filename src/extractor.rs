use crate::{
    colour::Colour,
    error::{Error, Result},
    histogram::{Histogram, Tally},
    sample::{resample_window, CropWindow},
    DEFAULT_INITIAL_CROP_SIZE,
};
use image::{io::Reader as ImageReader, ColorType, DynamicImage, GenericImageView, ImageBuffer};
use log::{debug, trace};
use std::{borrow::Cow, hash::Hash, path::Path};

/// A strategy for turning an image file into a single colour.
///
/// [`crate::ImageProcessor`] only ever talks to this trait, so alternative strategies (block
/// averaging, median cut, ...) can be swapped in without touching filename handling or the CLI.
pub trait ColourExtractor {
    /// Returns the colour as six lowercase hex digits with no prefix.
    fn get_colour(&self, image_path: &Path) -> Result<String>;
}

impl<E> ColourExtractor for &E
where
    E: ColourExtractor + ?Sized,
{
    fn get_colour(&self, image_path: &Path) -> Result<String> {
        (**self).get_colour(image_path)
    }
}

impl<E> ColourExtractor for Box<E>
where
    E: ColourExtractor + ?Sized,
{
    fn get_colour(&self, image_path: &Path) -> Result<String> {
        (**self).get_colour(image_path)
    }
}

/// Finds the most frequent colour in the centre of an image.
///
/// A square of side [`initial_crop_size`](Self::initial_crop_size) is cut from the centre of the
/// image and its pixels tallied. If several colours share the highest count, the square is halved
/// and cut again from the centre of the previous one, until a single colour wins or the square
/// shrinks to nothing. Squares are resampled with nearest-neighbour sampling so only colours
/// present in the source are ever counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentreColourExtractor {
    initial_crop_size: u32,
}

impl Default for CentreColourExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CentreColourExtractor {
    pub fn new() -> Self {
        Self {
            initial_crop_size: DEFAULT_INITIAL_CROP_SIZE,
        }
    }

    /// Side of the first centre square, in pixels. Zero means no colour can ever be found.
    pub fn initial_crop_size(self, initial_crop_size: u32) -> Self {
        Self { initial_crop_size, ..self }
    }

    pub fn crop_size(&self) -> u32 {
        self.initial_crop_size
    }

    /// Checks the image is 8-bit RGB or RGBA and extracts its centre colour.
    pub fn extract_dynamic(&self, image: &DynamicImage) -> Result<Colour> {
        match image {
            DynamicImage::ImageRgb8(buf) => self.extract(buf),
            DynamicImage::ImageRgba8(buf) => self.extract(buf),
            other => Err(Error::UnsupportedMode {
                mode: mode_name(other.color()).to_owned(),
            }),
        }
    }

    /// Same as [`Self::extract_dynamic`], formatted as hex.
    pub fn get_colour_from_image(&self, image: &DynamicImage) -> Result<String> {
        self.extract_dynamic(image).map(Colour::hex)
    }

    pub fn extract<P>(&self, image: &ImageBuffer<P, Vec<u8>>) -> Result<Colour>
    where
        P: image::Pixel<Subpixel = u8> + 'static + std::cmp::Eq + Hash,
    {
        let mut edge = self.initial_crop_size;
        let mut working = Cow::Borrowed(image);
        let mut best = None;

        while edge > 0 {
            let (width, height) = working.dimensions();

            if width > edge && height > edge {
                let window = CropWindow::centred(width, height, edge);
                trace!("resampling {width}x{height} through {window:?} to {edge}x{edge}");

                let resampled = resample_window(&*working, window, edge, edge);
                working = Cow::Owned(resampled);
            }

            let histogram = Histogram::from_pixels(working.pixels().copied());

            match histogram.tally() {
                Tally::Dominant(pixel) => {
                    debug!("edge {edge}: single most frequent colour among {} distinct", histogram.len());
                    best = Some(pixel);
                    edge = 0;
                }
                Tally::Tied { first, contenders } => {
                    debug!("edge {edge}: {contenders} colours tied, shrinking");
                    best = Some(first);
                    edge /= 2;
                }
                Tally::Empty => {
                    debug!("edge {edge}: nothing to count, shrinking");
                    edge /= 2;
                }
            }
        }

        let colour = best.map(|pixel| Colour::from_pixel(&pixel)).ok_or(Error::NoDominantColour)?;
        debug!("extracted colour {colour}");

        Ok(colour)
    }
}

impl ColourExtractor for CentreColourExtractor {
    fn get_colour(&self, image_path: &Path) -> Result<String> {
        // the file stays open only while decoding
        let image = {
            let reader = ImageReader::open(image_path)
                .and_then(|reader| reader.with_guessed_format())
                .map_err(|source| Error::Open {
                    path: image_path.to_path_buf(),
                    source,
                })?;

            reader.decode().map_err(|source| Error::Decode {
                path: image_path.to_path_buf(),
                source,
            })?
        };

        let (width, height) = image.dimensions();
        debug!("decoded {} as {width}x{height} {}", image_path.display(), mode_name(image.color()));

        self.get_colour_from_image(&image)
    }
}

/// Short name of a pixel layout, in the style of the image mode names most tools print.
pub fn mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGBF",
        ColorType::Rgba32F => "RGBAF",
        _ => "unknown",
    }
}
