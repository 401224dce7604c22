//! Collectible props: laundry basket, martini glass and ice cream cone.

use std::ops::RangeInclusive;

use rand::{Rng, RngCore};

use crate::error::Result;
use crate::types::{keys, Colour, Composition, Palette, Shape};

use super::{Composer, LARGE, SMALL};

/// A wicker basket of warm clothes, still steaming from the dryer.
pub struct LaundryBasket;

impl Composer for LaundryBasket {
    fn name(&self) -> &'static str {
        "laundry_basket"
    }

    fn size(&self) -> u32 {
        LARGE
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let [wicker, edge, weave, steam] =
            palette.colours([keys::WICKER, keys::WICKER_EDGE, keys::WEAVE, keys::STEAM])?;
        let clothes = palette.colours(keys::CLOTHES)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::rectangle([30, 60, 98, 110], wicker).outlined(edge, 2));
        for y in (65..105).step_by(5) {
            for x in (35..95).step_by(5) {
                comp.push(Shape::line([x, y, x + 3, y], weave, 1));
            }
        }

        // Clothes piled up and to the right.
        for (i, colour) in clothes.into_iter().enumerate() {
            let i = i as i32;
            let (x, y) = (40 + i * 18, 50 - i * 5);
            comp.push(Shape::ellipse([x, y, x + 20, y + 20], colour));
        }

        // Zig-zag steam columns.
        for i in 0..5 {
            let x = 45 + i * 12;
            for j in 0..3 {
                let y = 30 - j * 8;
                let (from, to) = (x + (j % 2) * 2, x + ((j + 1) % 2) * 2);
                comp.push(Shape::line([from, y, to, y - 6], steam, 2));
            }
        }

        Ok(comp)
    }
}

/// A martini glass cat toy with an olive.
pub struct MartiniGlass;

impl Composer for MartiniGlass {
    fn name(&self) -> &'static str {
        "martini_glass"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let [glass, edge, stem, olive, toothpick, sparkle] = palette.colours([
            keys::GLASS,
            keys::GLASS_EDGE,
            keys::GLASS_STEM,
            keys::OLIVE,
            keys::TOOTHPICK,
            keys::SPARKLE,
        ])?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::polygon(&[(20, 40), (32, 16), (44, 40)], glass).outlined(edge, 2));
        comp.push(Shape::rectangle([30, 40, 34, 52], stem));
        comp.push(Shape::ellipse([26, 50, 38, 56], stem));
        comp.push(Shape::ellipse([28, 26, 36, 34], olive));
        comp.push(Shape::line([32, 20, 32, 28], toothpick, 1));
        comp.push(Shape::polygon(&[(16, 20), (18, 22), (20, 20), (18, 18)], sparkle));

        Ok(comp)
    }
}

/// A three-scoop cone with sprinkles and a cherry.
pub struct IceCreamCone;

impl IceCreamCone {
    pub const SPRINKLE_COUNT: usize = 8;

    /// Sprinkle offsets from the top-left of the scoops.
    const SPRINKLE_X: RangeInclusive<i32> = 0..=10;
    const SPRINKLE_Y: RangeInclusive<i32> = 0..=12;
}

impl Composer for IceCreamCone {
    fn name(&self) -> &'static str {
        "ice_cream_cone"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn randomized(&self) -> bool {
        true
    }

    fn compose(&self, palette: &Palette, rng: &mut dyn RngCore) -> Result<Composition> {
        let [cone, waffle, cherry, cherry_stem] =
            palette.colours([keys::CONE, keys::WAFFLE, keys::CHERRY, keys::CHERRY_STEM])?;
        let scoops = palette.colours([keys::STRAWBERRY, keys::VANILLA, keys::CHOCOLATE])?;
        let sprinkles: [Colour; 4] = palette.colours(keys::SPRINKLES)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::polygon(&[(24, 50), (32, 20), (40, 50)], cone));
        for i in 0..5 {
            let y = 25 + i * 6;
            comp.push(Shape::line([26 + i, y, 38 - i, y], waffle, 1));
        }

        // Bottom to top.
        let [strawberry, vanilla, chocolate] = scoops;
        comp.extend([
            Shape::ellipse([22, 18, 42, 38], strawberry),
            Shape::ellipse([24, 10, 40, 26], vanilla),
            Shape::ellipse([26, 4, 38, 16], chocolate),
        ]);

        for _ in 0..Self::SPRINKLE_COUNT {
            let x = 26 + rng.gen_range(Self::SPRINKLE_X);
            let y = 8 + rng.gen_range(Self::SPRINKLE_Y);
            let colour = sprinkles[rng.gen_range(0..sprinkles.len())];
            comp.push_jittered(Shape::line([x, y, x + 2, y + 1], colour, 2));
        }

        comp.push(Shape::ellipse([30, 2, 34, 6], cherry));
        comp.push(Shape::line([32, 2, 32, 0], cherry_stem, 1));

        Ok(comp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn colour(key: &str) -> Option<Colour> {
        Palette::tabby().get(key)
    }

    #[test]
    fn test_basket_outline_and_fill() {
        let sprite = LaundryBasket
            .render(&Palette::tabby(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(sprite.get(30, 80), colour(keys::WICKER_EDGE));
        assert_eq!(sprite.get(33, 82), colour(keys::WICKER));
        // Weave strokes cross the basket body.
        assert_eq!(sprite.get(35, 65), colour(keys::WEAVE));
    }

    #[test]
    fn test_basket_steam_is_translucent() {
        let sprite = LaundryBasket
            .render(&Palette::tabby(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(sprite.get(45, 30), colour(keys::STEAM));
    }

    #[test]
    fn test_martini_olive_inside_glass() {
        let sprite = MartiniGlass
            .render(&Palette::tabby(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(sprite.get(32, 32), colour(keys::OLIVE));
        assert_eq!(sprite.get(32, 38), colour(keys::GLASS));
        // Toothpick pokes through the olive.
        assert_eq!(sprite.get(32, 27), colour(keys::TOOTHPICK));
    }

    #[test]
    fn test_cone_sprinkles_bounded() {
        let palette = Palette::tabby();
        let sprinkles = palette.colours(keys::SPRINKLES).unwrap();
        let allowed = Rect::new(25, 7, 39, 22);

        for seed in 0..20 {
            let comp = IceCreamCone
                .compose(&palette, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(comp.jittered_layers().count(), IceCreamCone::SPRINKLE_COUNT);

            for layer in comp.jittered_layers() {
                let Shape::Line { colour, .. } = &layer.shape else {
                    panic!("sprinkle is not a line: {:?}", layer.shape);
                };
                assert!(sprinkles.contains(colour));
                assert!(allowed.encloses(&layer.shape.bounds().unwrap()));
            }
        }
    }

    #[test]
    fn test_cone_cherry_drawn_last() {
        let comp = IceCreamCone
            .compose(&Palette::tabby(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        let last_two: Vec<_> = comp.layers().iter().rev().take(2).collect();
        assert!(!last_two[0].jittered && !last_two[1].jittered);

        let sprite = crate::render::render(&comp).unwrap();
        assert_eq!(sprite.get(32, 1), colour(keys::CHERRY_STEM));
        assert_eq!(sprite.get(32, 4), colour(keys::CHERRY));
    }

    #[test]
    fn test_props_follow_the_palette() {
        let blue = Colour::rgb(0, 0, 255);
        let base = Palette::tabby();
        let recoloured = Palette::new(
            "recoloured",
            keys::ALL.iter().map(|&key| {
                let colour = if key == keys::OLIVE { blue } else { base.get(key).unwrap() };
                (key, colour)
            }),
        );

        let sprite = MartiniGlass
            .render(&recoloured, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(sprite.get(32, 32), Some(blue));
    }

    #[test]
    fn test_cone_same_seed_same_sprite() {
        let palette = Palette::tabby();
        let a = IceCreamCone
            .render(&palette, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = IceCreamCone
            .render(&palette, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
    }
}
