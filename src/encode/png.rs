use std::path::Path;

use crate::{
    foundation::error::{CoverError, CoverResult},
    render::buffer::PixelBuffer,
};

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> CoverResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CoverError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `buffer` as a straight-alpha RGBA8 PNG.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> CoverResult<()> {
    ensure_parent_dir(path)?;
    let straight = buffer.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &straight,
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;
    tracing::debug!(path = %path.display(), "encoded png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
