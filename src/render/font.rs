//! Built-in 5x7 bitmap font.
//!
//! Only covers the glyphs the sprites actually use. `#` is ink.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal distance between glyph origins.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

const QUESTION: Glyph = [
    ".###.",
    "#...#",
    "....#",
    "...#.",
    "..#..",
    ".....",
    "..#..",
];

const UPPER_Z: Glyph = [
    "#####",
    "....#",
    "...#.",
    "..#..",
    ".#...",
    "#....",
    "#####",
];

const SPACE: Glyph = [
    ".....", ".....", ".....", ".....", ".....", ".....", ".....",
];

/// Look up a glyph bitmap.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '?' => Some(&QUESTION),
        'Z' => Some(&UPPER_Z),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Size in pixels of a single line of text.
pub fn text_size(text: &str) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    (count * ADVANCE - 1, GLYPH_HEIGHT)
}

/// Iterate the inked pixel offsets of a glyph.
pub fn ink(glyph: &Glyph) -> impl Iterator<Item = (u32, u32)> + '_ {
    glyph.iter().enumerate().flat_map(|(y, row)| {
        row.chars()
            .enumerate()
            .filter(|(_, c)| *c == '#')
            .map(move |(x, _)| (x as u32, y as u32))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_are_uniform() {
        for c in ['?', 'Z', ' '] {
            let g = glyph(c).unwrap();
            for row in g.iter() {
                assert_eq!(row.len(), GLYPH_WIDTH as usize, "glyph {:?}", c);
            }
        }
    }

    #[test]
    fn test_unknown_glyph() {
        assert!(glyph('@').is_none());
        assert!(glyph('z').is_none());
    }

    #[test]
    fn test_text_size() {
        assert_eq!(text_size(""), (0, 0));
        assert_eq!(text_size("?"), (5, 7));
        assert_eq!(text_size("ZZ"), (11, 7));
    }

    #[test]
    fn test_space_has_no_ink() {
        assert_eq!(ink(glyph(' ').unwrap()).count(), 0);
        assert!(ink(glyph('Z').unwrap()).count() > 0);
    }
}
