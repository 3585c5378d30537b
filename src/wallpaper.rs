use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{ImageError, ImageFormat, Rgb, RgbImage, RgbaImage};

use crate::error::{MultiWallError, Result};

pub const WALLPAPER_FILE_NAME: &str = "MultiWallImage.bmp";
pub const PREVIEW_FILE_NAME: &str = "MultiWallPreview.png";

/// How the OS lays the saved bitmap over the desktop. Composites are always
/// built for `Tiled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallpaperStyle {
    #[default]
    Tiled,
    Centered,
    Stretched,
}

impl WallpaperStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tiled" | "tile" => Some(Self::Tiled),
            "centered" | "center" | "centre" => Some(Self::Centered),
            "stretched" | "stretch" => Some(Self::Stretched),
            _ => None,
        }
    }

    /// `(WallpaperStyle, TileWallpaper)` registry values for this style.
    pub fn registry_values(self) -> (&'static str, &'static str) {
        match self {
            Self::Tiled => ("1", "1"),
            Self::Centered => ("1", "0"),
            Self::Stretched => ("2", "0"),
        }
    }
}

/// Writes the composite as a 24-bit BMP and returns the written path.
pub fn save_wallpaper(canvas: &RgbaImage, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = prepare_target(dir, file_name)?;

    let rgb = RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let [r, g, b, _] = canvas.get_pixel(x, y).0;
        Rgb([r, g, b])
    });

    rgb.save_with_format(&path, ImageFormat::Bmp)
        .map_err(|source| MultiWallError::Save {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

pub fn save_preview(preview: &RgbaImage, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = prepare_target(dir, file_name)?;

    preview
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| MultiWallError::Save {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

fn prepare_target(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::create_dir_all(dir).map_err(|e| MultiWallError::Save {
        path: path.clone(),
        source: ImageError::IoError(e),
    })?;
    Ok(path)
}
