// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant colour from the centre of an image.
//!
//! The most frequent colour is taken from a square in the middle of the image. When several
//! colours are equally frequent, the square is halved and the count repeated on the smaller,
//! more central square until one colour wins.
//!
//! ```no_run
//! use centre_colour::ImageProcessor;
//!
//! let processor = ImageProcessor::new("screenshot")?;
//! println!("{}", processor.get_colour()?);
//! # Ok::<(), centre_colour::Error>(())
//! ```

mod colour;
mod error;
mod extractor;
mod histogram;
mod locator;
mod processor;
mod sample;

/// Side of the first centre square sampled, in pixels.
pub const DEFAULT_INITIAL_CROP_SIZE: u32 = 50;
/// Decoded pixel layouts colours can be extracted from.
pub const SUPPORTED_MODES: [&str; 2] = ["RGB", "RGBA"];
/// Image file extensions, in the order they are looked for.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = [".jpeg", ".png"];

pub use crate::{
    colour::Colour,
    error::{Error, Result},
    extractor::{CentreColourExtractor, ColourExtractor},
    locator::{FileCheck, ImageLocator, LocalFiles},
    processor::ImageProcessor,
};
pub use image;
