use crate::{
    error::Result,
    extractor::{CentreColourExtractor, ColourExtractor},
    locator::{FileCheck, ImageLocator},
};
use std::path::{Path, PathBuf};

/// An image file on disk paired with the strategy used to pull a colour out of it.
#[derive(Debug)]
pub struct ImageProcessor<E = CentreColourExtractor> {
    image_path: PathBuf,
    extractor: E,
}

impl ImageProcessor {
    /// Resolves `name` in the working directory and pairs it with a fresh default extractor.
    pub fn new(name: &str) -> Result<Self> {
        Self::located(name, &ImageLocator::new())
    }

    /// Resolves `name` through `locator` and pairs it with a fresh default extractor.
    pub fn located<F>(name: &str, locator: &ImageLocator<F>) -> Result<Self>
    where
        F: FileCheck,
    {
        Self::with_locator(name, locator, CentreColourExtractor::new())
    }
}

impl<E> ImageProcessor<E>
where
    E: ColourExtractor,
{
    pub fn with_extractor(name: &str, extractor: E) -> Result<Self> {
        Self::with_locator(name, &ImageLocator::new(), extractor)
    }

    pub fn with_locator<F>(name: &str, locator: &ImageLocator<F>, extractor: E) -> Result<Self>
    where
        F: FileCheck,
    {
        let image_path = locator.locate(name)?;
        Ok(Self::from_path(image_path, extractor))
    }

    /// Pairs an already resolved path with an extractor.
    pub fn from_path(image_path: impl Into<PathBuf>, extractor: E) -> Self {
        Self {
            image_path: image_path.into(),
            extractor,
        }
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn get_colour(&self) -> Result<String> {
        self.extractor.get_colour(&self.image_path)
    }
}
