use std::io::Cursor;
use std::path::Path;

use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::surface::Surface;

/// Default file name for exported wallpapers.
pub const DEFAULT_FILE_NAME: &str = "wallpaper.png";

/// Encode a surface as PNG (straight-alpha RGBA8).
pub fn encode_png(surface: &Surface) -> DialpaperResult<Vec<u8>> {
    let mut rgba = surface.data().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), rgba)
        .ok_or_else(|| DialpaperError::render("surface buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DialpaperError::render(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write `surface` as PNG. A directory target gets [`DEFAULT_FILE_NAME`] inside it.
///
/// Returns the path actually written.
pub fn write_png(surface: &Surface, target: &Path) -> DialpaperResult<std::path::PathBuf> {
    let path = if target.is_dir() {
        target.join(DEFAULT_FILE_NAME)
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = encode_png(surface)?;
    std::fs::write(&path, bytes)?;
    Ok(path)
}
