//! Core domain types for smudge.
//!
//! This module contains the fundamental types used throughout the generator:
//! - `Colour` - RGBA colour values
//! - `Palette` - Named colour table shared by all sprites
//! - `Shape` - A single drawing instruction
//! - `Composition` - A sprite's ordered layer stack

mod colour;
mod composition;
mod palette;
mod shape;

pub use colour::Colour;
pub use composition::{Composition, Layer};
pub use palette::{keys, Palette};
pub use shape::{Point, Rect, Shape, Stroke};
