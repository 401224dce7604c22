//! Shape primitives used as sprite layers.
//!
//! A shape is a single drawing instruction. Shapes carry their geometry and
//! colours but no pixels; a [`Canvas`](crate::render::Canvas) rasterizes them.

use super::Colour;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An inclusive bounding box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Check that the box is not inverted.
    pub fn is_valid(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }

    /// Check if a point lies within the box (edges included).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check if another box lies entirely within this one.
    pub fn encloses(&self, other: &Rect) -> bool {
        self.contains(other.x0, other.y0) && self.contains(other.x1, other.y1)
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Grow the box by `amount` on every side.
    pub fn inflate(&self, amount: i32) -> Rect {
        Rect::new(
            self.x0 - amount,
            self.y0 - amount,
            self.x1 + amount,
            self.y1 + amount,
        )
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

/// Outline colour and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub colour: Colour,
    pub width: u32,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect, fill: Colour },

    /// Axis-aligned rectangle with optional fill and inner outline.
    Rectangle {
        bounds: Rect,
        fill: Option<Colour>,
        outline: Option<Stroke>,
    },

    /// Closed polygon with optional fill and outline.
    Polygon {
        points: Vec<Point>,
        fill: Option<Colour>,
        outline: Option<Stroke>,
    },

    /// Straight segment.
    Line {
        from: Point,
        to: Point,
        colour: Colour,
        width: u32,
    },

    /// Part of an ellipse outline between two angles in degrees,
    /// measured clockwise from 3 o'clock.
    Arc {
        bounds: Rect,
        start: f32,
        end: f32,
        colour: Colour,
        width: u32,
    },

    /// Text in the built-in bitmap font, top-left anchored.
    Text {
        origin: Point,
        text: String,
        colour: Colour,
    },
}

impl Shape {
    pub fn ellipse(bounds: impl Into<Rect>, fill: impl Into<Colour>) -> Self {
        Shape::Ellipse {
            bounds: bounds.into(),
            fill: fill.into(),
        }
    }

    pub fn rectangle(bounds: impl Into<Rect>, fill: impl Into<Colour>) -> Self {
        Shape::Rectangle {
            bounds: bounds.into(),
            fill: Some(fill.into()),
            outline: None,
        }
    }

    pub fn polygon(points: &[(i32, i32)], fill: impl Into<Colour>) -> Self {
        Shape::Polygon {
            points: points.iter().copied().map(Point::from).collect(),
            fill: Some(fill.into()),
            outline: None,
        }
    }

    pub fn line(coords: [i32; 4], colour: impl Into<Colour>, width: u32) -> Self {
        let [x0, y0, x1, y1] = coords;
        Shape::Line {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            colour: colour.into(),
            width,
        }
    }

    pub fn arc(
        bounds: impl Into<Rect>,
        start: f32,
        end: f32,
        colour: impl Into<Colour>,
        width: u32,
    ) -> Self {
        Shape::Arc {
            bounds: bounds.into(),
            start,
            end,
            colour: colour.into(),
            width,
        }
    }

    pub fn text(origin: (i32, i32), text: impl Into<String>, colour: impl Into<Colour>) -> Self {
        Shape::Text {
            origin: origin.into(),
            text: text.into(),
            colour: colour.into(),
        }
    }

    /// Add an outline to a rectangle or polygon. Other shapes are returned unchanged.
    pub fn outlined(self, colour: impl Into<Colour>, width: u32) -> Self {
        let stroke = Some(Stroke {
            colour: colour.into(),
            width,
        });
        match self {
            Shape::Rectangle { bounds, fill, .. } => Shape::Rectangle {
                bounds,
                fill,
                outline: stroke,
            },
            Shape::Polygon { points, fill, .. } => Shape::Polygon {
                points,
                fill,
                outline: stroke,
            },
            other => other,
        }
    }

    /// Approximate area the shape may touch, before clipping.
    ///
    /// Returns `None` for polygons without points.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Ellipse { bounds, .. } | Shape::Rectangle { bounds, .. } => Some(*bounds),
            Shape::Arc { bounds, width, .. } => Some(bounds.inflate(*width as i32 / 2)),
            Shape::Polygon { points, outline, .. } => {
                let first = points.first()?;
                let rect = points.iter().fold(
                    Rect::new(first.x, first.y, first.x, first.y),
                    |acc, p| acc.union(&Rect::new(p.x, p.y, p.x, p.y)),
                );
                let grow = outline.map_or(0, |s| stroke_reach(s.width));
                Some(rect.inflate(grow))
            }
            Shape::Line { from, to, width, .. } => Some(
                Rect::new(
                    from.x.min(to.x),
                    from.y.min(to.y),
                    from.x.max(to.x),
                    from.y.max(to.y),
                )
                .inflate(stroke_reach(*width)),
            ),
            Shape::Text { origin, text, .. } => {
                let (w, h) = crate::render::font::text_size(text);
                Some(Rect::new(
                    origin.x,
                    origin.y,
                    origin.x + w as i32 - 1,
                    origin.y + h as i32 - 1,
                ))
            }
        }
    }
}

/// How far a stroke of `width` can spill past its centre line.
fn stroke_reach(width: u32) -> i32 {
    if width <= 1 {
        0
    } else {
        (width as i32 + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_valid() {
        assert!(Rect::new(0, 0, 0, 0).is_valid());
        assert!(Rect::new(20, 35, 44, 55).is_valid());
        assert!(!Rect::new(10, 0, 5, 5).is_valid());
        assert!(!Rect::new(0, 10, 5, 5).is_valid());
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(2, 2, 4, 4);
        assert!(r.contains(2, 2));
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 4));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_outlined_rectangle() {
        let shape = Shape::rectangle([0, 0, 9, 9], Colour::WHITE).outlined(Colour::BLACK, 2);
        match shape {
            Shape::Rectangle { fill, outline, .. } => {
                assert_eq!(fill, Some(Colour::WHITE));
                assert_eq!(
                    outline,
                    Some(Stroke {
                        colour: Colour::BLACK,
                        width: 2
                    })
                );
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_outlined_ignores_lines() {
        let line = Shape::line([0, 0, 5, 5], Colour::BLACK, 1);
        assert_eq!(line.clone().outlined(Colour::WHITE, 3), line);
    }

    #[test]
    fn test_line_bounds_normalised() {
        let line = Shape::line([42, 34, 48, 33], Colour::WHITE, 1);
        assert_eq!(line.bounds(), Some(Rect::new(42, 33, 48, 34)));
    }

    #[test]
    fn test_wide_line_bounds_cover_stroke() {
        let streak = Shape::line([4, 18, 6, 20], Colour::BLACK, 2);
        assert_eq!(streak.bounds(), Some(Rect::new(3, 17, 7, 21)));

        let thick = Shape::line([0, 0, 10, 0], Colour::BLACK, 3);
        assert_eq!(thick.bounds(), Some(Rect::new(-2, -2, 12, 2)));
    }

    #[test]
    fn test_polygon_bounds() {
        let ear = Shape::polygon(&[(24, 22), (28, 16), (32, 22)], Colour::BLACK);
        assert_eq!(ear.bounds(), Some(Rect::new(24, 16, 32, 22)));

        let empty = Shape::Polygon {
            points: vec![],
            fill: None,
            outline: None,
        };
        assert_eq!(empty.bounds(), None);
    }
}
