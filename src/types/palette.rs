//! Palette type for named colour collections.

use std::collections::HashMap;

use crate::error::{Result, SpriteError};

use super::Colour;

/// Semantic colour names shared by every composer.
pub mod keys {
    pub const BACKGROUND: &str = "bg";

    // Smudge
    pub const FUR_BASE: &str = "fur_base";
    pub const FUR_STRIPE: &str = "fur_stripe";
    pub const FUR_LIGHT: &str = "fur_light";
    pub const EYES: &str = "eyes";
    pub const PUPIL: &str = "pupil";
    pub const NOSE: &str = "nose";
    pub const WHISKER: &str = "whisker";
    pub const MOTION: &str = "motion";
    pub const STREAK: &str = "streak";
    pub const WONDER: &str = "wonder";

    // Laundry basket
    pub const WICKER: &str = "wicker";
    pub const WICKER_EDGE: &str = "wicker_edge";
    pub const WEAVE: &str = "weave";
    pub const STEAM: &str = "steam";
    pub const CLOTHES_BLUE: &str = "clothes_blue";
    pub const CLOTHES_PINK: &str = "clothes_pink";
    pub const CLOTHES_GREEN: &str = "clothes_green";
    pub const CLOTHES: [&str; 3] = [CLOTHES_BLUE, CLOTHES_PINK, CLOTHES_GREEN];

    // Martini glass
    pub const GLASS: &str = "glass";
    pub const GLASS_EDGE: &str = "glass_edge";
    pub const GLASS_STEM: &str = "glass_stem";
    pub const OLIVE: &str = "olive";
    pub const TOOTHPICK: &str = "toothpick";
    pub const SPARKLE: &str = "sparkle";

    // Ice cream cone
    pub const CONE: &str = "cone";
    pub const WAFFLE: &str = "waffle";
    pub const STRAWBERRY: &str = "strawberry";
    pub const VANILLA: &str = "vanilla";
    pub const CHOCOLATE: &str = "chocolate";
    pub const CHERRY: &str = "cherry";
    pub const CHERRY_STEM: &str = "cherry_stem";
    pub const SPRINKLE_RED: &str = "sprinkle_red";
    pub const SPRINKLE_BLUE: &str = "sprinkle_blue";
    pub const SPRINKLE_YELLOW: &str = "sprinkle_yellow";
    pub const SPRINKLE_GREEN: &str = "sprinkle_green";
    pub const SPRINKLES: [&str; 4] =
        [SPRINKLE_RED, SPRINKLE_BLUE, SPRINKLE_YELLOW, SPRINKLE_GREEN];

    // Neighbourhood map
    pub const GRASS: &str = "grass";
    pub const ROAD: &str = "road";
    pub const ROOF: &str = "roof";
    pub const DOOR: &str = "door";
    pub const HOUSE_EDGE: &str = "house_edge";
    pub const HOUSE_HOME: &str = "house_home";
    pub const HOUSE_EAST: &str = "house_east";
    pub const HOUSE_SOUTH: &str = "house_south";
    pub const HOUSE_CORNER: &str = "house_corner";
    pub const HOUSES: [&str; 4] = [HOUSE_HOME, HOUSE_EAST, HOUSE_SOUTH, HOUSE_CORNER];

    // Mom and dad in bed
    pub const BED_FRAME: &str = "bed_frame";
    pub const BED_FRAME_EDGE: &str = "bed_frame_edge";
    pub const BLANKET: &str = "blanket";
    pub const LASH: &str = "lash";
    pub const SNORE: &str = "snore";
    pub const DAD_HAIR: &str = "dad_hair";
    pub const DAD_SKIN: &str = "dad_skin";
    pub const DAD_SMILE: &str = "dad_smile";
    pub const MOM_HAIR: &str = "mom_hair";
    pub const MOM_SKIN: &str = "mom_skin";
    pub const MOM_EYE_WHITE: &str = "mom_eye_white";
    pub const MOM_IRIS: &str = "mom_iris";
    pub const MOM_NOSE: &str = "mom_nose";
    pub const MOM_SMILE: &str = "mom_smile";

    /// Every key the built-in palette defines.
    pub const ALL: &[&str] = &[
        BACKGROUND,
        FUR_BASE,
        FUR_STRIPE,
        FUR_LIGHT,
        EYES,
        PUPIL,
        NOSE,
        WHISKER,
        MOTION,
        STREAK,
        WONDER,
        WICKER,
        WICKER_EDGE,
        WEAVE,
        STEAM,
        CLOTHES_BLUE,
        CLOTHES_PINK,
        CLOTHES_GREEN,
        GLASS,
        GLASS_EDGE,
        GLASS_STEM,
        OLIVE,
        TOOTHPICK,
        SPARKLE,
        CONE,
        WAFFLE,
        STRAWBERRY,
        VANILLA,
        CHOCOLATE,
        CHERRY,
        CHERRY_STEM,
        SPRINKLE_RED,
        SPRINKLE_BLUE,
        SPRINKLE_YELLOW,
        SPRINKLE_GREEN,
        GRASS,
        ROAD,
        ROOF,
        DOOR,
        HOUSE_EDGE,
        HOUSE_HOME,
        HOUSE_EAST,
        HOUSE_SOUTH,
        HOUSE_CORNER,
        BED_FRAME,
        BED_FRAME_EDGE,
        BLANKET,
        LASH,
        SNORE,
        DAD_HAIR,
        DAD_SKIN,
        DAD_SMILE,
        MOM_HAIR,
        MOM_SKIN,
        MOM_EYE_WHITE,
        MOM_IRIS,
        MOM_NOSE,
        MOM_SMILE,
    ];
}

/// An immutable collection of named colours.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Palette name
    pub name: String,

    colours: HashMap<String, Colour>,
}

impl Palette {
    /// Create a palette from `(name, colour)` pairs.
    pub fn new(
        name: impl Into<String>,
        colours: impl IntoIterator<Item = (&'static str, Colour)>,
    ) -> Self {
        Self {
            name: name.into(),
            colours: colours
                .into_iter()
                .map(|(key, colour)| (key.to_string(), colour))
                .collect(),
        }
    }

    /// The palette every Find Smudge sprite is drawn with.
    pub fn tabby() -> Self {
        Self::new(
            "tabby",
            [
                (keys::BACKGROUND, Colour::TRANSPARENT),
                (keys::FUR_BASE, Colour::rgb(210, 150, 100)),
                (keys::FUR_STRIPE, Colour::rgb(140, 90, 60)),
                (keys::FUR_LIGHT, Colour::rgb(240, 200, 160)),
                (keys::EYES, Colour::rgb(120, 180, 100)),
                (keys::PUPIL, Colour::BLACK),
                (keys::NOSE, Colour::rgb(200, 120, 120)),
                (keys::WHISKER, Colour::rgb(240, 240, 240)),
                (keys::MOTION, Colour::rgb(200, 200, 200)),
                (keys::STREAK, Colour::new(200, 150, 100, 150)),
                (keys::WONDER, Colour::rgb(255, 200, 100)),
                (keys::WICKER, Colour::rgb(160, 120, 80)),
                (keys::WICKER_EDGE, Colour::rgb(120, 90, 60)),
                (keys::WEAVE, Colour::rgb(140, 100, 70)),
                (keys::STEAM, Colour::new(220, 220, 255, 180)),
                (keys::CLOTHES_BLUE, Colour::rgb(180, 200, 220)),
                (keys::CLOTHES_PINK, Colour::rgb(220, 180, 200)),
                (keys::CLOTHES_GREEN, Colour::rgb(200, 220, 180)),
                (keys::GLASS, Colour::new(200, 240, 255, 200)),
                (keys::GLASS_EDGE, Colour::rgb(150, 180, 200)),
                (keys::GLASS_STEM, Colour::rgb(180, 180, 180)),
                (keys::OLIVE, Colour::rgb(100, 150, 80)),
                (keys::TOOTHPICK, Colour::rgb(200, 180, 150)),
                (keys::SPARKLE, Colour::WHITE),
                (keys::CONE, Colour::rgb(210, 160, 110)),
                (keys::WAFFLE, Colour::rgb(180, 130, 80)),
                (keys::STRAWBERRY, Colour::rgb(255, 180, 200)),
                (keys::VANILLA, Colour::rgb(255, 250, 220)),
                (keys::CHOCOLATE, Colour::rgb(150, 100, 70)),
                (keys::CHERRY, Colour::rgb(220, 50, 50)),
                (keys::CHERRY_STEM, Colour::rgb(100, 150, 80)),
                (keys::SPRINKLE_RED, Colour::rgb(255, 100, 100)),
                (keys::SPRINKLE_BLUE, Colour::rgb(100, 200, 255)),
                (keys::SPRINKLE_YELLOW, Colour::rgb(255, 255, 100)),
                (keys::SPRINKLE_GREEN, Colour::rgb(150, 255, 150)),
                (keys::GRASS, Colour::rgb(150, 200, 130)),
                (keys::ROAD, Colour::rgb(100, 100, 100)),
                (keys::ROOF, Colour::rgb(150, 100, 80)),
                (keys::DOOR, Colour::rgb(120, 80, 60)),
                (keys::HOUSE_EDGE, Colour::rgb(100, 80, 60)),
                (keys::HOUSE_HOME, Colour::rgb(255, 200, 150)),
                (keys::HOUSE_EAST, Colour::rgb(200, 220, 255)),
                (keys::HOUSE_SOUTH, Colour::rgb(255, 220, 200)),
                (keys::HOUSE_CORNER, Colour::rgb(220, 255, 220)),
                (keys::BED_FRAME, Colour::rgb(200, 180, 160)),
                (keys::BED_FRAME_EDGE, Colour::rgb(150, 130, 110)),
                (keys::BLANKET, Colour::rgb(180, 200, 220)),
                (keys::LASH, Colour::BLACK),
                (keys::SNORE, Colour::rgb(150, 150, 200)),
                (keys::DAD_HAIR, Colour::rgb(80, 60, 40)),
                (keys::DAD_SKIN, Colour::rgb(220, 190, 170)),
                (keys::DAD_SMILE, Colour::rgb(180, 150, 130)),
                (keys::MOM_HAIR, Colour::rgb(120, 80, 50)),
                (keys::MOM_SKIN, Colour::rgb(230, 200, 180)),
                (keys::MOM_EYE_WHITE, Colour::WHITE),
                (keys::MOM_IRIS, Colour::rgb(100, 150, 180)),
                (keys::MOM_NOSE, Colour::rgb(220, 180, 170)),
                (keys::MOM_SMILE, Colour::rgb(200, 150, 140)),
            ],
        )
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.colours.get(name).copied()
    }

    /// Get a colour by name, failing if the palette does not define it.
    pub fn colour(&self, name: &str) -> Result<Colour> {
        self.get(name).ok_or_else(|| SpriteError::Palette {
            name: name.to_string(),
        })
    }

    /// Look up a fixed set of colours at once, failing on the first missing
    /// name.
    pub fn colours<const N: usize>(&self, names: [&str; N]) -> Result<[Colour; N]> {
        let mut colours = [Colour::TRANSPARENT; N];
        for (slot, name) in colours.iter_mut().zip(names) {
            *slot = self.colour(name)?;
        }
        Ok(colours)
    }

    /// Get all colour names, sorted.
    pub fn colour_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colours.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tabby()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabby_defines_every_key() {
        let palette = Palette::tabby();
        for key in keys::ALL {
            assert!(palette.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(palette.len(), keys::ALL.len());

        for group in [&keys::CLOTHES[..], &keys::SPRINKLES[..], &keys::HOUSES[..]] {
            for key in group {
                assert!(keys::ALL.contains(key), "{} not listed", key);
            }
        }
    }

    #[test]
    fn test_colours_resolves_groups_in_order() {
        let palette = Palette::tabby();
        let sprinkles = palette.colours(keys::SPRINKLES).unwrap();
        assert_eq!(sprinkles[0], Colour::rgb(255, 100, 100));
        assert_eq!(sprinkles[3], Colour::rgb(150, 255, 150));

        let err = palette.colours([keys::ROAD, "plaid"]).unwrap_err();
        assert!(matches!(err, SpriteError::Palette { name } if name == "plaid"));
    }

    #[test]
    fn test_background_is_transparent() {
        let palette = Palette::tabby();
        assert!(palette.colour(keys::BACKGROUND).unwrap().is_transparent());
    }

    #[test]
    fn test_unknown_colour_is_an_error() {
        let palette = Palette::tabby();
        assert!(palette.get("plaid").is_none());
        assert!(matches!(
            palette.colour("plaid"),
            Err(SpriteError::Palette { name }) if name == "plaid"
        ));
    }

    #[test]
    fn test_colour_names_sorted() {
        let palette = Palette::tabby();
        let names = palette.colour_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
