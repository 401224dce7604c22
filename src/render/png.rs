//! PNG output for rendered sprites.
//!
//! Converts rendered sprites to PNG files with optional integer scaling.

use std::path::Path;

use crate::error::{Result, SpriteError};
use crate::types::Colour;

use super::RenderedSprite;

/// Write a rendered sprite to a PNG file.
///
/// # Arguments
///
/// * `rendered` - The rendered sprite to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling, 0 is treated as 1)
///
/// Returns the dimensions of the written image.
pub fn write_png(rendered: &RenderedSprite, path: &Path, scale: u32) -> Result<(u32, u32)> {
    let scale = scale.max(1);
    let (width, height) = scaled_size(rendered, scale)?;

    let img = if scale == 1 {
        rendered.to_rgba_image()
    } else {
        let pixels = scale_pixels(rendered.pixels(), scale);
        RenderedSprite::new(&rendered.name, pixels).to_rgba_image()
    };

    img.save(path).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok((width, height))
}

/// Output dimensions of a sprite at `scale`, or an error if they do not fit
/// in an image.
pub fn scaled_size(rendered: &RenderedSprite, scale: u32) -> Result<(u32, u32)> {
    let side = |pixels: usize| u32::try_from(pixels).ok()?.checked_mul(scale);

    match (side(rendered.width()), side(rendered.height())) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(SpriteError::Build {
            message: format!(
                "Scale {} is too large for '{}' ({}x{})",
                scale,
                rendered.name,
                rendered.width(),
                rendered.height()
            ),
            help: Some("Use a smaller --scale".to_string()),
        }),
    }
}

/// Scale a pixel grid by an integer factor.
///
/// Uses nearest-neighbour scaling for crisp pixel art.
pub fn scale_pixels(pixels: &[Vec<Colour>], scale: u32) -> Vec<Vec<Colour>> {
    if scale <= 1 {
        return pixels.to_vec();
    }

    let scale = scale as usize;
    pixels
        .iter()
        .flat_map(|row| {
            let wide: Vec<Colour> = row
                .iter()
                .flat_map(|&colour| std::iter::repeat(colour).take(scale))
                .collect();
            std::iter::repeat(wide).take(scale)
        })
        .collect()
}
