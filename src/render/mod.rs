//! Rendering module for smudge.
//!
//! This module turns compositions into pixels: the canvas rasterizes
//! each layer in order and the result is written out as PNG.

mod canvas;
pub(crate) mod font;
mod png;
mod sprite;

pub use canvas::{Canvas, RasterError};
pub use png::{scale_pixels, scaled_size, write_png};
pub use sprite::RenderedSprite;

use crate::error::{Result, SpriteError};
use crate::types::Composition;

/// Paint every layer of a composition onto a fresh canvas.
///
/// Either every layer is drawn or the error names the failing sprite;
/// a partially painted canvas is never returned.
pub fn render(composition: &Composition) -> Result<RenderedSprite> {
    let fault = |source| SpriteError::Raster {
        sprite: composition.name.clone(),
        source,
    };

    let mut canvas = Canvas::new(composition.size, composition.size).map_err(fault)?;
    for layer in composition.layers() {
        canvas.apply(&layer.shape).map_err(fault)?;
    }

    Ok(canvas.finish(&composition.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Shape};

    #[test]
    fn test_render_composition() {
        let mut comp = Composition::new("dot", 8);
        comp.push(Shape::rectangle([2, 2, 3, 3], Colour::BLACK));

        let sprite = render(&comp).unwrap();
        assert_eq!(sprite.name, "dot");
        assert_eq!(sprite.size(), (8, 8));
        assert_eq!(sprite.get(2, 2), Some(Colour::BLACK));
        assert_eq!(sprite.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_render_fault_names_sprite() {
        let mut comp = Composition::new("broken", 8);
        comp.push(Shape::rectangle([0, 0, 7, 7], Colour::BLACK));
        comp.push(Shape::line([0, 0, 4, 4], Colour::WHITE, 0));

        match render(&comp) {
            Err(SpriteError::Raster { sprite, source }) => {
                assert_eq!(sprite, "broken");
                assert_eq!(source, RasterError::ZeroWidth);
            }
            other => panic!("expected raster fault, got {:?}", other),
        }
    }

    #[test]
    fn test_render_zero_size_fails() {
        let comp = Composition::new("nothing", 0);
        assert!(matches!(
            render(&comp),
            Err(SpriteError::Raster { source: RasterError::EmptyCanvas { .. }, .. })
        ));
    }
}
