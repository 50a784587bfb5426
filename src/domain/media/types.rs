// SPDX-License-Identifier: MPL-2.0
//! Image file handles and the supported extension set.

use std::fmt;
use std::path::{Path, PathBuf};

/// Image formats the gallery claims, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Bmp,
    Svg,
    Webp,
    Avif,
    Tiff,
    Ico,
    Heic,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 11] = [
        ImageExtension::Png,
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::Gif,
        ImageExtension::Bmp,
        ImageExtension::Svg,
        ImageExtension::Webp,
        ImageExtension::Avif,
        ImageExtension::Tiff,
        ImageExtension::Ico,
        ImageExtension::Heic,
    ];

    /// Parses an extension (without the leading dot), ignoring case.
    #[must_use]
    pub fn parse(ext: &str) -> Option<Self> {
        let lower = ext.to_ascii_lowercase();
        Self::ALL.into_iter().find(|e| e.as_str() == lower)
    }

    /// Lower-case canonical spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Gif => "gif",
            ImageExtension::Bmp => "bmp",
            ImageExtension::Svg => "svg",
            ImageExtension::Webp => "webp",
            ImageExtension::Avif => "avif",
            ImageExtension::Tiff => "tiff",
            ImageExtension::Ico => "ico",
            ImageExtension::Heic => "heic",
        }
    }

    #[must_use]
    pub fn is_vector(self) -> bool {
        matches!(self, ImageExtension::Svg)
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether the gallery can display files with this extension.
#[must_use]
pub fn can_accept_extension(ext: &str) -> bool {
    ImageExtension::parse(ext).is_some()
}

/// One entry of a raw folder listing, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// File name including extension.
    pub name: String,
    /// Extension as found on disk, any case, without the dot.
    pub extension: String,
}

impl FileEntry {
    /// Builds an entry from a path, deriving name and extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            extension,
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }
}

/// A displayable image file owned by the host file system.
///
/// The path is the identity: two refs are equal when their paths are.
#[derive(Debug, Clone)]
pub struct ImageRef {
    path: PathBuf,
    name: String,
    extension: ImageExtension,
}

impl ImageRef {
    /// Builds a ref from a path, or `None` if the extension is unsupported.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        Self::from_entry(FileEntry::from_path(path))
    }

    /// Promotes a listing entry, or `None` if the extension is unsupported.
    #[must_use]
    pub fn from_entry(entry: FileEntry) -> Option<Self> {
        let extension = ImageExtension::parse(&entry.extension)?;
        Some(Self {
            path: entry.path,
            name: entry.name,
            extension,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension (used as alt text and sort key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn extension(&self) -> ImageExtension {
        self.extension
    }

    /// File name without its extension (used as tab and thumbnail label).
    #[must_use]
    pub fn basename(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ImageRef {}

impl std::hash::Hash for ImageRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Natural pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_size(self) -> iced_core::Size {
        iced_core::Size::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ImageExtension::parse("PNG"), Some(ImageExtension::Png));
        assert_eq!(ImageExtension::parse("HeIc"), Some(ImageExtension::Heic));
        assert_eq!(ImageExtension::parse("mp4"), None);
        assert_eq!(ImageExtension::parse(""), None);
    }

    #[test]
    fn can_accept_extension_covers_fixed_set() {
        for ext in [
            "png", "jpg", "jpeg", "gif", "bmp", "svg", "webp", "avif", "tiff", "ico", "heic",
        ] {
            assert!(can_accept_extension(ext), "{ext} should be accepted");
            assert!(can_accept_extension(&ext.to_uppercase()));
        }
        assert!(!can_accept_extension("md"));
        assert!(!can_accept_extension("tif"));
    }

    #[test]
    fn image_ref_lowercases_extension_and_keeps_name() {
        let image = ImageRef::from_path("/vault/photos/Sunset.JPG").expect("supported");
        assert_eq!(image.extension(), ImageExtension::Jpg);
        assert_eq!(image.name(), "Sunset.JPG");
        assert_eq!(image.basename(), "Sunset");
        assert_eq!(image.parent(), Some(Path::new("/vault/photos")));
    }

    #[test]
    fn unsupported_files_are_not_image_refs() {
        assert!(ImageRef::from_path("/vault/notes/todo.md").is_none());
        assert!(ImageRef::from_path("/vault/photos/noext").is_none());
    }

    #[test]
    fn image_refs_compare_by_path() {
        let a = ImageRef::from_path("/a/x.png").expect("supported");
        let b = ImageRef::from_entry(FileEntry {
            path: PathBuf::from("/a/x.png"),
            name: "renamed.png".into(),
            extension: "png".into(),
        })
        .expect("supported");
        assert_eq!(a, b);
    }
}
