//! Finished sprite images.

use image::{ImageBuffer, RgbaImage};

use crate::types::{Colour, Rect};

/// A rendered sprite - a grid of colours.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSprite {
    /// Sprite name.
    pub name: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl RenderedSprite {
    /// Create a new rendered sprite.
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<Colour>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        Self {
            name: name.into(),
            pixels,
            width,
            height,
        }
    }

    /// Copy the pixels out of a finished canvas image.
    pub fn from_image(name: impl Into<String>, image: &RgbaImage) -> Self {
        let pixels = image
            .rows()
            .map(|row| row.map(|p| Colour::from(*p)).collect())
            .collect();
        Self::new(name, pixels)
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Smallest box holding every non-transparent pixel.
    pub fn painted_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, colour) in row.iter().enumerate() {
                if colour.is_transparent() {
                    continue;
                }
                let here = Rect::new(x as i32, y as i32, x as i32, y as i32);
                bounds = Some(bounds.map_or(here, |b| b.union(&here)));
            }
        }
        bounds
    }

    /// Convert to an `image` RGBA buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img: RgbaImage = ImageBuffer::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let colour = self.pixels[y as usize][x as usize];
            *pixel = colour.into();
        }
        img
    }
}
