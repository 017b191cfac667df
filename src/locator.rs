use crate::{
    error::{Error, Result},
    SUPPORTED_EXTENSIONS,
};
use log::{debug, trace};
use std::path::{Component, Path, PathBuf};

/// Answers whether a path names an existing regular file.
pub trait FileCheck {
    fn is_file(&self, path: &Path) -> bool;
}

/// [`FileCheck`] against the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileCheck for LocalFiles {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> FileCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn is_file(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Resolves an image name, with or without its extension, to a file on disk.
///
/// A name that already ends in a supported extension (in any letter case) is checked as given.
/// Any other name has each supported extension appended in turn, `.jpeg` before `.png`, and the
/// first one that exists wins. The resolved name keeps the letter case it was given in.
#[derive(Debug, Clone)]
pub struct ImageLocator<F = LocalFiles> {
    dir: Option<PathBuf>,
    files: F,
}

impl Default for ImageLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLocator {
    pub fn new() -> Self {
        Self::with_file_check(LocalFiles)
    }
}

impl<F> ImageLocator<F>
where
    F: FileCheck,
{
    pub fn with_file_check(files: F) -> Self {
        Self { dir: None, files }
    }

    /// Look for images in `dir` instead of the working directory.
    pub fn in_dir(self, dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..self
        }
    }

    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        let base = Path::new(check_name(name)?);

        let candidates = if has_supported_extension(base) {
            vec![base.to_path_buf()]
        } else {
            SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| PathBuf::from(format!("{name}{ext}")))
                .collect()
        };

        for candidate in candidates {
            let full = match &self.dir {
                Some(dir) => dir.join(&candidate),
                None => candidate,
            };

            trace!("checking {}", full.display());
            if self.files.is_file(&full) {
                debug!("resolved {name:?} to {}", full.display());
                return Ok(full);
            }
        }

        Err(Error::NotFound { name: name.to_owned() })
    }
}

fn check_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("name is empty"));
    }

    if name.contains('\0') {
        return Err(Error::invalid_input("name contains a NUL byte"));
    }

    let path = Path::new(name);
    let ends_in_file = matches!(path.components().next_back(), Some(Component::Normal(_)));

    if !ends_in_file || name.ends_with(std::path::is_separator) {
        return Err(Error::invalid_input(format!("{name:?} does not name a file")));
    }

    Ok(name)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
