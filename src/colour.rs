use std::fmt;

/// An 8-bit sRGB colour. Any alpha the source pixel had is dropped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    red: u8,
    green: u8,
    blue: u8,
}

impl Colour {
    pub fn new((red, green, blue): (u8, u8, u8)) -> Colour {
        Self { red, green, blue }
    }

    /// Builds a colour from the first three channels of a pixel, ignoring any further ones.
    pub fn from_pixel<P>(pixel: &P) -> Colour
    where
        P: image::Pixel<Subpixel = u8>,
    {
        match *pixel.channels() {
            [red, green, blue, ..] => Self { red, green, blue },
            // grey pixels never reach the extractor, but a single channel still has an obvious meaning
            [grey, ..] => Self::new((grey, grey, grey)),
            [] => Self::new((0, 0, 0)),
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Lowercase, zero-padded, unprefixed hex: always exactly six characters.
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
