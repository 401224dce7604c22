//! Sprite composers.
//!
//! Each composer builds the layer stack for one sprite. Composers are
//! independent of each other: they read the shared palette, optionally draw
//! from the entropy source, and return a fresh composition.

mod props;
mod scenes;
mod tabby;

use rand::RngCore;

use crate::error::Result;
use crate::render::{self, RenderedSprite};
use crate::types::{Composition, Palette};

pub use props::{IceCreamCone, LaundryBasket, MartiniGlass};
pub use scenes::{MomDadBed, NeighborhoodMap};
pub use tabby::{SmudgeIdle, SmudgeJumping, SmudgeRunning, SmudgeSearching};

/// Canvas size for character poses and small props.
pub const SMALL: u32 = 64;

/// Canvas size for composite scenes.
pub const LARGE: u32 = 128;

/// Canvas size for the neighbourhood map.
pub const MAP: u32 = 256;

/// Something that can draw one sprite.
pub trait Composer: Send + Sync {
    /// Sprite name, also the output file stem.
    fn name(&self) -> &'static str;

    /// Width and height of the square canvas.
    fn size(&self) -> u32;

    /// Whether the composer draws from the entropy source.
    fn randomized(&self) -> bool {
        false
    }

    /// Build the ordered layer stack.
    fn compose(&self, palette: &Palette, rng: &mut dyn RngCore) -> Result<Composition>;

    /// Build and paint the sprite.
    fn render(&self, palette: &Palette, rng: &mut dyn RngCore) -> Result<RenderedSprite> {
        render::render(&self.compose(palette, rng)?)
    }

    /// Output file name for the sprite.
    fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }
}

/// The set of sprites the generator knows how to draw, in output order.
pub struct SpriteRegistry {
    composers: Vec<Box<dyn Composer>>,
}

impl SpriteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            composers: Vec::new(),
        }
    }

    /// Every Find Smudge sprite.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(SmudgeIdle)
            .register(SmudgeJumping)
            .register(SmudgeSearching)
            .register(SmudgeRunning)
            .register(LaundryBasket)
            .register(MartiniGlass)
            .register(NeighborhoodMap)
            .register(IceCreamCone)
            .register(MomDadBed);
        registry
    }

    /// Add a composer. A composer with the same name replaces the old one.
    pub fn register(&mut self, composer: impl Composer + 'static) -> &mut Self {
        let composer: Box<dyn Composer> = Box::new(composer);
        match self.composers.iter().position(|c| c.name() == composer.name()) {
            Some(index) => self.composers[index] = composer,
            None => self.composers.push(composer),
        }
        self
    }

    /// Look up a composer by sprite name.
    pub fn get(&self, name: &str) -> Option<&dyn Composer> {
        self.composers
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref() as &dyn Composer)
    }

    /// Iterate composers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Composer> {
        self.composers.iter().map(|c| c.as_ref() as &dyn Composer)
    }

    /// Sprite names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.composers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composers.is_empty()
    }

    /// Render every sprite, stopping at the first fault.
    pub fn render_all(
        &self,
        palette: &Palette,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<RenderedSprite>> {
        self.iter().map(|c| c.render(palette, rng)).collect()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpriteError;
    use crate::types::{Colour, Shape};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Broken;

    impl Composer for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn size(&self) -> u32 {
            8
        }

        fn compose(&self, _palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
            let mut comp = Composition::new(self.name(), self.size());
            comp.push(Shape::polygon(&[(0, 0), (1, 1)], Colour::BLACK));
            Ok(comp)
        }
    }

    #[test]
    fn test_builtin_has_nine_sprites() {
        let registry = SpriteRegistry::builtin();
        assert_eq!(registry.len(), 9);
        assert_eq!(
            registry.names(),
            vec![
                "smudge_idle",
                "smudge_jumping",
                "smudge_searching",
                "smudge_running",
                "laundry_basket",
                "martini_glass",
                "neighborhood_map",
                "ice_cream_cone",
                "mom_dad_bed",
            ]
        );
    }

    #[test]
    fn test_get_by_name() {
        let registry = SpriteRegistry::builtin();
        let composer = registry.get("mom_dad_bed").unwrap();
        assert_eq!(composer.size(), LARGE);
        assert_eq!(composer.file_name(), "mom_dad_bed.png");
        assert!(registry.get("dog").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = SpriteRegistry::new();
        registry.register(SmudgeIdle).register(SmudgeIdle);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_only_decorated_sprites_are_randomized() {
        let registry = SpriteRegistry::builtin();
        let randomized: Vec<_> = registry
            .iter()
            .filter(|c| c.randomized())
            .map(|c| c.name())
            .collect();
        assert_eq!(randomized, vec!["smudge_running", "ice_cream_cone"]);
    }

    #[test]
    fn test_render_all() {
        let registry = SpriteRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let sprites = registry.render_all(&Palette::tabby(), &mut rng).unwrap();
        assert_eq!(sprites.len(), 9);
        for (sprite, composer) in sprites.iter().zip(registry.iter()) {
            assert_eq!(sprite.name, composer.name());
            let size = composer.size() as usize;
            assert_eq!(sprite.size(), (size, size));
        }
    }

    #[test]
    fn test_render_all_reports_failing_sprite() {
        let mut registry = SpriteRegistry::builtin();
        registry.register(Broken);
        let mut rng = StdRng::seed_from_u64(7);

        match registry.render_all(&Palette::tabby(), &mut rng) {
            Err(SpriteError::Raster { sprite, .. }) => assert_eq!(sprite, "broken"),
            other => panic!("expected raster fault, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn test_every_composer_resolves_its_colours() {
        let registry = SpriteRegistry::builtin();
        let palette = Palette::tabby();
        let mut rng = StdRng::seed_from_u64(1);
        for composer in registry.iter() {
            let comp = composer.compose(&palette, &mut rng).unwrap();
            assert_eq!(comp.name, composer.name());
            assert!(!comp.is_empty());
        }
    }

    #[test]
    fn test_missing_palette_colour_fails() {
        let palette = Palette::new("bare", Vec::<(&'static str, Colour)>::new());
        let mut rng = StdRng::seed_from_u64(1);
        let err = SmudgeIdle.compose(&palette, &mut rng).unwrap_err();
        assert!(matches!(err, SpriteError::Palette { .. }));
    }
}
