//! Smudge the tabby in four poses.
//!
//! All poses share the same vocabulary: an elliptical body with tabby
//! stripes, a round head with pointed ears, green eyes with black pupils,
//! a small pink nose and white whiskers.

use std::ops::RangeInclusive;

use rand::{Rng, RngCore};

use crate::error::Result;
use crate::types::{keys, Colour, Composition, Palette, Shape};

use super::{Composer, SMALL};

/// Horizontal jitter applied to each running streak.
const STREAK_JITTER: RangeInclusive<i32> = 0..=2;

/// Fur colours resolved from the palette.
struct Tabby {
    base: Colour,
    stripe: Colour,
    light: Colour,
    eyes: Colour,
    pupil: Colour,
    nose: Colour,
    whisker: Colour,
    motion: Colour,
    streak: Colour,
    wonder: Colour,
}

impl Tabby {
    fn from_palette(palette: &Palette) -> Result<Self> {
        Ok(Self {
            base: palette.colour(keys::FUR_BASE)?,
            stripe: palette.colour(keys::FUR_STRIPE)?,
            light: palette.colour(keys::FUR_LIGHT)?,
            eyes: palette.colour(keys::EYES)?,
            pupil: palette.colour(keys::PUPIL)?,
            nose: palette.colour(keys::NOSE)?,
            whisker: palette.colour(keys::WHISKER)?,
            motion: palette.colour(keys::MOTION)?,
            streak: palette.colour(keys::STREAK)?,
            wonder: palette.colour(keys::WONDER)?,
        })
    }

    fn ears(&self, comp: &mut Composition, left: [(i32, i32); 3], right: [(i32, i32); 3]) {
        comp.push(Shape::polygon(&left, self.base));
        comp.push(Shape::polygon(&right, self.base));
    }

    /// Eye whites then pupils, so the pupils sit on top.
    fn eyes(&self, comp: &mut Composition, eyes: [[i32; 4]; 2], pupils: [[i32; 4]; 2]) {
        for eye in eyes {
            comp.push(Shape::ellipse(eye, self.eyes));
        }
        for pupil in pupils {
            comp.push(Shape::ellipse(pupil, self.pupil));
        }
    }

    fn nose(&self, comp: &mut Composition, tip: (i32, i32), half_width: i32, depth: i32) {
        let (x, y) = tip;
        comp.push(Shape::polygon(
            &[(x, y), (x - half_width, y + depth), (x + half_width, y + depth)],
            self.nose,
        ));
    }

    /// Two whiskers either side of the muzzle, the upper pair tilted up.
    fn whiskers(
        &self,
        comp: &mut Composition,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
        len: i32,
    ) {
        comp.extend([
            Shape::line([left, top, left - len, top - 1], self.whisker, 1),
            Shape::line([left, bottom, left - len, bottom], self.whisker, 1),
            Shape::line([right, top, right + len, top - 1], self.whisker, 1),
            Shape::line([right, bottom, right + len, bottom], self.whisker, 1),
        ]);
    }

    /// Round tail with a single stripe across it.
    fn tail(&self, comp: &mut Composition, bounds: [i32; 4], stripe: [i32; 4], width: u32) {
        comp.push(Shape::ellipse(bounds, self.base));
        comp.push(Shape::line(stripe, self.stripe, width));
    }
}

/// Sitting, facing the viewer.
pub struct SmudgeIdle;

impl Composer for SmudgeIdle {
    fn name(&self) -> &'static str {
        "smudge_idle"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let fur = Tabby::from_palette(palette)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::ellipse([20, 35, 44, 55], fur.base));
        for y in [37, 42, 47, 52] {
            comp.push(Shape::line([22, y, 42, y], fur.stripe, 1));
        }
        fur.tail(&mut comp, [14, 40, 24, 50], [16, 44, 20, 46], 1);

        comp.push(Shape::ellipse([22, 20, 42, 40], fur.base));
        fur.ears(&mut comp, [(24, 22), (28, 16), (32, 22)], [(32, 22), (36, 16), (40, 22)]);
        // Ear tufts
        comp.push(Shape::line([28, 16, 28, 14], fur.light, 1));
        comp.push(Shape::line([36, 16, 36, 14], fur.light, 1));
        // Chest ruff
        comp.push(Shape::ellipse([28, 38, 36, 44], fur.light));

        fur.eyes(
            &mut comp,
            [[26, 28, 30, 32], [34, 28, 38, 32]],
            [[27, 29, 29, 31], [35, 29, 37, 31]],
        );
        fur.nose(&mut comp, (32, 34), 2, 2);
        fur.whiskers(&mut comp, 22, 42, 34, 36, 6);

        Ok(comp)
    }
}

/// Mid-leap, stretched out and facing right.
pub struct SmudgeJumping;

impl Composer for SmudgeJumping {
    fn name(&self) -> &'static str {
        "smudge_jumping"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let fur = Tabby::from_palette(palette)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::ellipse([18, 20, 46, 40], fur.base));
        for x in [22, 28, 34, 40] {
            comp.push(Shape::line([x, 22, x, 38], fur.stripe, 1));
        }

        // Back legs tucked, front legs reaching forward.
        comp.push(Shape::ellipse([20, 32, 26, 42], fur.base));
        comp.push(Shape::ellipse([40, 36, 46, 48], fur.base));
        comp.push(Shape::line([41, 40, 43, 44], fur.stripe, 1));
        fur.tail(&mut comp, [8, 24, 20, 32], [10, 26, 14, 28], 2);

        comp.push(Shape::ellipse([38, 18, 52, 32], fur.base));
        fur.ears(&mut comp, [(40, 20), (43, 14), (46, 20)], [(46, 20), (49, 14), (52, 20)]);
        fur.eyes(
            &mut comp,
            [[42, 24, 45, 27], [47, 24, 50, 27]],
            [[43, 25, 44, 26], [48, 25, 49, 26]],
        );
        fur.nose(&mut comp, (45, 28), 1, 1);
        fur.whiskers(&mut comp, 41, 49, 29, 30, 4);

        for i in 0..3 {
            comp.push(Shape::line([12 + i * 4, 16, 14 + i * 4, 18], fur.motion, 1));
        }

        Ok(comp)
    }
}

/// Crouched low with the nose to the ground, wondering where it went.
pub struct SmudgeSearching;

impl Composer for SmudgeSearching {
    fn name(&self) -> &'static str {
        "smudge_searching"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let fur = Tabby::from_palette(palette)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::ellipse([16, 32, 44, 50], fur.base));
        for y in [34, 39, 44] {
            comp.push(Shape::line([18, y, 42, y], fur.stripe, 1));
        }
        // Front paws
        comp.push(Shape::ellipse([38, 48, 44, 54], fur.light));

        comp.push(Shape::ellipse([30, 24, 52, 44], fur.base));
        fur.ears(&mut comp, [(32, 26), (35, 20), (38, 26)], [(42, 26), (45, 20), (48, 26)]);
        // Pupils sit low: looking at the floor.
        fur.eyes(
            &mut comp,
            [[36, 32, 40, 36], [44, 32, 48, 36]],
            [[37, 34, 39, 35], [45, 34, 47, 35]],
        );
        fur.nose(&mut comp, (42, 38), 2, 2);
        fur.whiskers(&mut comp, 36, 48, 38, 40, 6);

        comp.push(Shape::text((12, 16), "?", fur.wonder));

        Ok(comp)
    }
}

/// Full-speed zoomies with streaks trailing behind.
pub struct SmudgeRunning;

impl Composer for SmudgeRunning {
    fn name(&self) -> &'static str {
        "smudge_running"
    }

    fn size(&self) -> u32 {
        SMALL
    }

    fn randomized(&self) -> bool {
        true
    }

    fn compose(&self, palette: &Palette, rng: &mut dyn RngCore) -> Result<Composition> {
        let fur = Tabby::from_palette(palette)?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::ellipse([10, 24, 48, 42], fur.base));
        for (i, x) in [14, 22, 30, 38].into_iter().enumerate() {
            let i = i as i32;
            comp.push(Shape::line([x, 26 + i, x, 40 - i], fur.stripe, 1));
        }

        // Legs alternate between planted and lifted.
        for (i, x) in [16, 24, 32, 40].into_iter().enumerate() {
            let y = if i % 2 == 0 { 38 } else { 42 };
            comp.push(Shape::ellipse([x, y, x + 6, y + 8], fur.base));
        }
        fur.tail(&mut comp, [4, 26, 16, 36], [6, 28, 10, 32], 2);

        comp.push(Shape::ellipse([42, 20, 58, 36], fur.base));
        // Ears swept back by the wind.
        fur.ears(&mut comp, [(44, 24), (46, 20), (48, 26)], [(52, 24), (54, 20), (56, 26)]);
        fur.eyes(
            &mut comp,
            [[46, 26, 49, 29], [51, 26, 54, 29]],
            [[47, 27, 48, 28], [52, 27, 53, 28]],
        );
        fur.nose(&mut comp, (49, 30), 1, 1);
        fur.whiskers(&mut comp, 45, 55, 31, 32, 4);

        for i in 0..4 {
            for y in [18, 44] {
                let x = 4 + i * 6 + rng.gen_range(STREAK_JITTER);
                comp.push_jittered(Shape::line([x, y, x + 2, y + 2], fur.streak, 2));
            }
        }

        Ok(comp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_idle_pupils_cover_eyes() {
        let palette = Palette::tabby();
        let sprite = SmudgeIdle.render(&palette, &mut rng(0)).unwrap();

        let pupil = palette.get(keys::PUPIL).unwrap();
        let eyes = palette.get(keys::EYES).unwrap();
        assert_eq!(sprite.get(28, 30), Some(pupil));
        assert_eq!(sprite.get(36, 30), Some(pupil));
        // Eye rim still visible around the pupil.
        assert_eq!(sprite.get(26, 30), Some(eyes));
    }

    #[test]
    fn test_idle_head_covers_body() {
        let palette = Palette::tabby();
        let sprite = SmudgeIdle.render(&palette, &mut rng(0)).unwrap();

        // The top body stripe at y=37 runs under the head.
        assert_eq!(sprite.get(32, 37), palette.get(keys::FUR_BASE));
        // Below the head it shows.
        assert_eq!(sprite.get(32, 47), palette.get(keys::FUR_STRIPE));
    }

    #[test]
    fn test_idle_whiskers_on_top() {
        let palette = Palette::tabby();
        let sprite = SmudgeIdle.render(&palette, &mut rng(0)).unwrap();
        assert_eq!(sprite.get(16, 36), palette.get(keys::WHISKER));
        assert_eq!(sprite.get(48, 36), palette.get(keys::WHISKER));
    }

    #[test]
    fn test_searching_has_question_mark() {
        let palette = Palette::tabby();
        let sprite = SmudgeSearching.render(&palette, &mut rng(0)).unwrap();
        // Bottom dot of the glyph.
        assert_eq!(sprite.get(14, 22), palette.get(keys::WONDER));
    }

    #[test]
    fn test_jumping_is_deterministic() {
        let palette = Palette::tabby();
        let a = SmudgeJumping.render(&palette, &mut rng(1)).unwrap();
        let b = SmudgeJumping.render(&palette, &mut rng(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_running_streaks_stay_in_range() {
        let palette = Palette::tabby();
        let allowed = Rect::new(3, 17, 27, 47);

        for seed in 0..20 {
            let comp = SmudgeRunning.compose(&palette, &mut rng(seed)).unwrap();
            assert_eq!(comp.jittered_layers().count(), 8);
            for layer in comp.jittered_layers() {
                let bounds = layer.shape.bounds().unwrap();
                assert!(allowed.encloses(&bounds), "{:?} outside {:?}", bounds, allowed);
            }
        }
    }

    #[test]
    fn test_running_body_ignores_entropy() {
        let palette = Palette::tabby();
        let a = SmudgeRunning.compose(&palette, &mut rng(3)).unwrap();
        let b = SmudgeRunning.compose(&palette, &mut rng(4)).unwrap();

        let fixed_a: Vec<_> = a.fixed_layers().collect();
        let fixed_b: Vec<_> = b.fixed_layers().collect();
        assert_eq!(fixed_a, fixed_b);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_poses_share_size() {
        let poses: [&dyn Composer; 4] =
            [&SmudgeIdle, &SmudgeJumping, &SmudgeSearching, &SmudgeRunning];
        for composer in poses {
            let sprite = composer.render(&Palette::tabby(), &mut rng(0)).unwrap();
            assert_eq!(sprite.size(), (64, 64));
        }
    }
}
