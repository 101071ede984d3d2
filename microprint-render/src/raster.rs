//! PNG microprints
//!
//! Each character cell is a `scale` × `scale` block: text color where the
//! log has a visible character, background color elsewhere. From scale 2 up
//! the bottom pixel row of every line stays background so lines read apart.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{RenderError, Result};
use crate::layout::Layout;

/// Paints `layout` into an image
pub fn render_raster(layout: &Layout, scale: u32) -> Result<RgbImage> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }

    let (width, height) = dimensions(layout, scale)?;
    let mut image = RgbImage::new(width, height);
    let glyph_height = if scale >= 2 { scale - 1 } else { scale };

    for (row_index, row) in layout.rows.iter().enumerate() {
        // Bounded by `dimensions`
        let top = row_index as u32 * scale;

        for y in top..top + scale {
            for x in 0..width {
                image.put_pixel(x, y, row.style.background);
            }
        }

        for (column, ch) in row.text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = column as u32 * scale;
            for y in top..top + glyph_height {
                for x in left..left + scale {
                    image.put_pixel(x, y, row.style.text);
                }
            }
        }
    }

    Ok(image)
}

/// Paints `layout` and writes it to `path` as PNG
pub fn render_raster_to_file(layout: &Layout, path: &Path, scale: u32) -> Result<()> {
    let image = render_raster(layout, scale)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Image {
            path: path.to_path_buf(),
            source,
        })
}

fn dimensions(layout: &Layout, scale: u32) -> Result<(u32, u32)> {
    let width = layout.columns as u64 * u64::from(scale);
    let height = layout.rows.len() as u64 * u64::from(scale);

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RenderError::TooLarge { width, height }),
    }
}
