//! Canvas - a transparent RGBA image that shapes are drawn onto.
//!
//! Primitives are drawn with `imageproc`. Plain images are written with
//! `put_pixel` (no alpha blending), so the pixel at an overlap always holds
//! the colour of the shape drawn last.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::point::Point as Vertex;
use imageproc::rect::Rect as Area;
use thiserror::Error;

use crate::types::{Colour, Point, Rect, Shape, Stroke};

use super::font;
use super::RenderedSprite;

/// Arc samples per degree of sweep.
const ARC_SAMPLES: f32 = 4.0;

/// A shape the rasterizer refuses to draw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("inverted bounding box [{}, {}, {}, {}]", .0.x0, .0.y0, .0.x1, .0.y1)]
    InvertedBounds(Rect),

    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("stroke width must be at least 1")]
    ZeroWidth,

    #[error("no glyph for {0:?} in the bitmap font")]
    MissingGlyph(char),
}

/// A mutable RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyCanvas { width, height });
        }

        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Rasterize a shape on top of the current contents.
    ///
    /// The shape is validated before anything is drawn, so a rejected shape
    /// leaves the canvas untouched.
    pub fn apply(&mut self, shape: &Shape) -> Result<(), RasterError> {
        match shape {
            Shape::Ellipse { bounds, fill } => {
                check_bounds(bounds)?;
                self.fill_ellipse(bounds, (*fill).into());
            }

            Shape::Rectangle {
                bounds,
                fill,
                outline,
            } => {
                check_bounds(bounds)?;
                if let Some(stroke) = outline {
                    check_width(stroke.width)?;
                }
                self.draw_rectangle(bounds, *fill, *outline);
            }

            Shape::Polygon {
                points,
                fill,
                outline,
            } => {
                let ring = open_ring(points);
                if ring.len() < 3 {
                    return Err(RasterError::TooFewPoints(points.len()));
                }
                if let Some(stroke) = outline {
                    check_width(stroke.width)?;
                }
                self.draw_polygon(ring, *fill, *outline);
            }

            Shape::Line {
                from,
                to,
                colour,
                width,
            } => {
                check_width(*width)?;
                self.draw_line(*from, *to, (*colour).into(), *width);
            }

            Shape::Arc {
                bounds,
                start,
                end,
                colour,
                width,
            } => {
                check_bounds(bounds)?;
                check_width(*width)?;
                self.draw_arc(bounds, *start, *end, (*colour).into(), *width);
            }

            Shape::Text {
                origin,
                text,
                colour,
            } => self.draw_text(*origin, text, (*colour).into())?,
        }

        Ok(())
    }

    /// Hand the finished pixels over as a sprite.
    pub fn finish(self, name: impl Into<String>) -> RenderedSprite {
        RenderedSprite::from_image(name, &self.image)
    }

    fn fill_rect(&mut self, bounds: &Rect, colour: Rgba<u8>) {
        draw_filled_rect_mut(&mut self.image, area(bounds), colour);
    }

    /// The midpoint ellipse is centred on a whole pixel. Boxes with an odd
    /// span get two centres per axis so the union reaches both edges.
    fn fill_ellipse(&mut self, bounds: &Rect, colour: Rgba<u8>) {
        let rx = (bounds.x1 - bounds.x0) / 2;
        let ry = (bounds.y1 - bounds.y0) / 2;

        // One or two pixels across: nothing left to round.
        if rx == 0 || ry == 0 {
            self.fill_rect(bounds, colour);
            return;
        }

        for cy in (bounds.y0 + ry)..=(bounds.y1 - ry) {
            for cx in (bounds.x0 + rx)..=(bounds.x1 - rx) {
                draw_filled_ellipse_mut(&mut self.image, (cx, cy), rx, ry, colour);
            }
        }
    }

    fn draw_rectangle(&mut self, bounds: &Rect, fill: Option<Colour>, outline: Option<Stroke>) {
        if let Some(colour) = fill {
            self.fill_rect(bounds, colour.into());
        }

        // Outline grows inward from the box edge.
        if let Some(stroke) = outline {
            for inset in 0..stroke.width as i32 {
                let ring = bounds.inflate(-inset);
                if !ring.is_valid() {
                    break;
                }
                draw_hollow_rect_mut(&mut self.image, area(&ring), stroke.colour.into());
            }
        }
    }

    fn draw_polygon(&mut self, ring: &[Point], fill: Option<Colour>, outline: Option<Stroke>) {
        if let Some(colour) = fill {
            let vertices: Vec<Vertex<i32>> = ring.iter().map(|p| Vertex::new(p.x, p.y)).collect();
            draw_polygon_mut(&mut self.image, &vertices, colour.into());
        }

        if let Some(stroke) = outline {
            for (i, &from) in ring.iter().enumerate() {
                let to = ring[(i + 1) % ring.len()];
                self.draw_line(from, to, stroke.colour.into(), stroke.width);
            }
        }
    }

    /// Hairlines are Bresenham segments. Wider strokes are filled as a
    /// quad reaching `width / 2` either side of the segment.
    fn draw_line(&mut self, from: Point, to: Point, colour: Rgba<u8>, width: u32) {
        if width == 1 {
            draw_line_segment_mut(&mut self.image, position(from), position(to), colour);
            return;
        }

        if from == to {
            let dot = Rect::new(from.x, from.y, from.x, from.y).inflate(width as i32 / 2);
            self.fill_rect(&dot, colour);
            return;
        }

        let (dx, dy) = ((to.x - from.x) as f32, (to.y - from.y) as f32);
        let scale = width as f32 / 2.0 / dx.hypot(dy);
        let (nx, ny) = (-dy * scale, dx * scale);

        let corner = |p: Point, sign: f32| {
            Vertex::new(
                (p.x as f32 + sign * nx).round() as i32,
                (p.y as f32 + sign * ny).round() as i32,
            )
        };
        let quad = [
            corner(from, 1.0),
            corner(to, 1.0),
            corner(to, -1.0),
            corner(from, -1.0),
        ];
        draw_polygon_mut(&mut self.image, &quad, colour);
    }

    /// Sweep from `start` to `end` (degrees, clockwise from 3 o'clock) and
    /// join the samples with hairlines. Each extra unit of width adds one
    /// ring inside the last.
    fn draw_arc(&mut self, bounds: &Rect, start: f32, end: f32, colour: Rgba<u8>, width: u32) {
        let cx = (bounds.x0 + bounds.x1) as f32 / 2.0;
        let cy = (bounds.y0 + bounds.y1) as f32 / 2.0;
        let span = if end - start >= 360.0 {
            360.0
        } else {
            (end - start).rem_euclid(360.0)
        };
        let steps = ((span * ARC_SAMPLES).ceil() as u32).max(1);

        for ring in 0..width {
            let rx = (bounds.x1 - bounds.x0) as f32 / 2.0 - ring as f32;
            let ry = (bounds.y1 - bounds.y0) as f32 / 2.0 - ring as f32;
            if rx < 0.0 || ry < 0.0 {
                break;
            }

            let mut last: Option<(f32, f32)> = None;
            for step in 0..=steps {
                let angle = (start + span * step as f32 / steps as f32).to_radians();
                let here = (
                    (cx + rx * angle.cos()).round(),
                    (cy + ry * angle.sin()).round(),
                );
                draw_line_segment_mut(&mut self.image, last.unwrap_or(here), here, colour);
                last = Some(here);
            }
        }
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        colour: Rgba<u8>,
    ) -> Result<(), RasterError> {
        let glyphs = text
            .chars()
            .map(|c| font::glyph(c).ok_or(RasterError::MissingGlyph(c)))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, glyph) in glyphs.into_iter().enumerate() {
            let left = origin.x + (i as u32 * font::ADVANCE) as i32;
            for (gx, gy) in font::ink(glyph) {
                let dot = Area::at(left + gx as i32, origin.y + gy as i32).of_size(1, 1);
                draw_filled_rect_mut(&mut self.image, dot, colour);
            }
        }

        Ok(())
    }
}

fn check_bounds(bounds: &Rect) -> Result<(), RasterError> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(RasterError::InvertedBounds(*bounds))
    }
}

fn check_width(width: u32) -> Result<(), RasterError> {
    if width == 0 {
        Err(RasterError::ZeroWidth)
    } else {
        Ok(())
    }
}

/// Drop closing points that repeat the first one; `imageproc` closes the
/// ring itself and rejects an explicit closing edge.
fn open_ring(points: &[Point]) -> &[Point] {
    let mut ring = points;
    while let [first, .., last] = ring {
        if first != last {
            break;
        }
        ring = &ring[..ring.len() - 1];
    }
    ring
}

/// Inclusive box as an `imageproc` rectangle. The box must be valid.
fn area(bounds: &Rect) -> Area {
    Area::at(bounds.x0, bounds.y0).of_size(
        (bounds.x1 - bounds.x0 + 1) as u32,
        (bounds.y1 - bounds.y0 + 1) as u32,
    )
}

fn position(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}
