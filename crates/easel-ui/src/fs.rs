//! Directory listing and thumbnail decoding behind a trait, so dialogs
//! can run against fakes in tests.

use std::io;
use std::path::Path;

use image::imageops::FilterType;
use log::warn;

use easel_core::coords::Vec2;
use easel_core::surface::Pixmap;

/// Where a file dialog gets its directory contents and previews.
pub trait FileSource {
    /// Names of the entries directly inside `dir`, in listing order.
    fn entries(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// A `size`-pixel preview of the file, or `None` when it cannot be
    /// read or decoded.
    fn thumbnail(&self, path: &Path, size: Vec2) -> Option<Pixmap>;
}

/// The real filesystem. Listings come back sorted by name so the grid
/// order is stable across platforms.
#[derive(Debug, Default)]
pub struct StdFs;

impl StdFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSource for StdFs {
    fn entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn thumbnail(&self, path: &Path, size: Vec2) -> Option<Pixmap> {
        let img = match image::open(path) {
            Ok(img) => img,
            Err(err) => {
                warn!("cannot decode {}: {err}", path.display());
                return None;
            }
        };
        let (w, h) = (size.x.max(1.0) as u32, size.y.max(1.0) as u32);
        let rgba = img.resize_exact(w, h, FilterType::Triangle).to_rgba8();
        Pixmap::from_rgba8(w, h, rgba.into_raw())
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn entries_come_back_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pear.txt", "apple.txt", "mango.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let names = StdFs::new().entries(dir.path()).unwrap();
        assert_eq!(names, ["apple.txt", "mango.txt", "pear.txt"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(StdFs::new().entries(&gone).is_err());
    }

    #[test]
    fn thumbnail_resizes_a_real_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let pm = StdFs::new()
            .thumbnail(&path, Vec2::new(2.0, 2.0))
            .unwrap();
        assert_eq!((pm.width(), pm.height()), (2, 2));
        let px = pm.pixel(0, 0).unwrap();
        assert_eq!((px.r, px.a), (255, 255));
    }

    #[test]
    fn undecodable_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, b"definitely not a png").unwrap();
        assert!(StdFs::new().thumbnail(&path, Vec2::new(8.0, 8.0)).is_none());
    }
}
