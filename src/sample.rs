use image::{GenericImageView, ImageBuffer, Pixel};

/// A square region centred on an image, as pixel offsets from its top-left corner.
///
/// The right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropWindow {
    /// Centres a square of side `edge` on a `width` x `height` image using floor division. The
    /// edge must not exceed either dimension.
    pub fn centred(width: u32, height: u32, edge: u32) -> Self {
        debug_assert!(edge <= width && edge <= height);

        let left = width / 2 - edge / 2;
        let top = height / 2 - edge / 2;

        Self {
            left,
            top,
            right: left + edge,
            bottom: top + edge,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Crops `window` out of `image` and resamples it to `width` x `height` with nearest-neighbour
/// sampling, so every output pixel is a copy of some input pixel.
pub fn resample_window<I, P>(image: &I, window: CropWindow, width: u32, height: u32) -> ImageBuffer<P, Vec<u8>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    ImageBuffer::from_fn(width, height, |x, y| {
        image.get_pixel(
            window.left + nearest(x, window.width(), width),
            window.top + nearest(y, window.height(), height),
        )
    })
}

/// Maps an output coordinate to the source coordinate whose pixel contains the output pixel's
/// centre.
fn nearest(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    if src_len == 0 {
        return 0;
    }

    // floor((dst + 0.5) * src_len / dst_len) in integers
    let src = (2 * u64::from(dst) + 1) * u64::from(src_len) / (2 * u64::from(dst_len));
    src.min(u64::from(src_len) - 1) as u32
}
