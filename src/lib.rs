//! smudge - Sprite generator for Find Smudge
//!
//! A library for composing the game's pixel-art sprites from primitive
//! shapes and writing them out as transparent PNGs.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;

pub use error::{Result, SpriteError};
pub use render::{scale_pixels, write_png, Canvas, RasterError, RenderedSprite};
pub use sprites::{Composer, SpriteRegistry};
pub use types::{Colour, Composition, Layer, Palette, Point, Rect, Shape};
