//! Larger scene sprites: the neighbourhood map and mom & dad in bed.

use rand::RngCore;

use crate::error::Result;
use crate::types::{keys, Composition, Palette, Shape};

use super::{Composer, LARGE, MAP};

/// Top-down map of the four houses around the crossroads.
pub struct NeighborhoodMap;

impl NeighborhoodMap {
    /// Side length of each house plot.
    const HOUSE: i32 = 60;

    /// Top-left corner of each house: ours, then the neighbours. Wall colours
    /// come from `keys::HOUSES` in the same order.
    const PLOTS: [(i32, i32); 4] = [(40, 40), (180, 40), (40, 180), (180, 180)];
}

impl Composer for NeighborhoodMap {
    fn name(&self) -> &'static str {
        "neighborhood_map"
    }

    fn size(&self) -> u32 {
        MAP
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let [grass, road, roof, door, edge] = palette.colours([
            keys::GRASS,
            keys::ROAD,
            keys::ROOF,
            keys::DOOR,
            keys::HOUSE_EDGE,
        ])?;
        let walls = palette.colours(keys::HOUSES)?;
        let mut comp = Composition::new(self.name(), self.size());
        let far = self.size() as i32 - 1;

        comp.push(Shape::rectangle([0, 0, far, far], grass));
        comp.push(Shape::rectangle([0, 120, far, 136], road));
        comp.push(Shape::rectangle([120, 0, 136, far], road));

        let size = Self::HOUSE;
        for ((x, y), wall) in Self::PLOTS.into_iter().zip(walls) {
            comp.push(Shape::rectangle([x, y, x + size, y + size], wall).outlined(edge, 2));
            comp.push(Shape::polygon(
                &[(x - 5, y), (x + size / 2, y - 20), (x + size + 5, y)],
                roof,
            ));
            comp.push(Shape::rectangle([x + 22, y + 35, x + 38, y + 58], door));
        }

        Ok(comp)
    }
}

/// Dad asleep on the left, mom awake on the right.
pub struct MomDadBed;

impl Composer for MomDadBed {
    fn name(&self) -> &'static str {
        "mom_dad_bed"
    }

    fn size(&self) -> u32 {
        LARGE
    }

    fn compose(&self, palette: &Palette, _rng: &mut dyn RngCore) -> Result<Composition> {
        let [frame, frame_edge, blanket, lash, snore] = palette.colours([
            keys::BED_FRAME,
            keys::BED_FRAME_EDGE,
            keys::BLANKET,
            keys::LASH,
            keys::SNORE,
        ])?;
        let [dad_hair, dad_skin, dad_smile] =
            palette.colours([keys::DAD_HAIR, keys::DAD_SKIN, keys::DAD_SMILE])?;
        let [mom_hair, mom_skin, eye_white, iris, nose, mom_smile] = palette.colours([
            keys::MOM_HAIR,
            keys::MOM_SKIN,
            keys::MOM_EYE_WHITE,
            keys::MOM_IRIS,
            keys::MOM_NOSE,
            keys::MOM_SMILE,
        ])?;
        let mut comp = Composition::new(self.name(), self.size());

        comp.push(Shape::rectangle([10, 60, 118, 110], frame).outlined(frame_edge, 2));
        comp.push(Shape::rectangle([15, 70, 113, 105], blanket));

        // Dad
        comp.extend([
            Shape::ellipse([23, 62, 52, 78], dad_hair),
            Shape::ellipse([25, 65, 50, 90], dad_skin),
            Shape::ellipse([28, 85, 47, 98], dad_skin),
            // Closed eyes
            Shape::arc([30, 77, 36, 81], 0.0, 180.0, lash, 2),
            Shape::arc([40, 77, 46, 81], 0.0, 180.0, lash, 2),
            Shape::arc([32, 82, 43, 88], 0.0, 180.0, dad_smile, 1),
        ]);

        // Mom
        comp.extend([
            Shape::ellipse([71, 50, 83, 70], mom_hair),
            Shape::ellipse([98, 50, 110, 70], mom_hair),
            Shape::ellipse([75, 48, 106, 68], mom_hair),
            Shape::ellipse([78, 55, 103, 80], mom_skin),
            Shape::ellipse([81, 75, 100, 88], mom_skin),
            Shape::ellipse([81, 65, 87, 71], eye_white),
            Shape::ellipse([94, 65, 100, 71], eye_white),
            Shape::ellipse([83, 67, 85, 69], iris),
            Shape::ellipse([96, 67, 98, 69], iris),
            Shape::ellipse([89, 72, 92, 75], nose),
            Shape::arc([85, 72, 96, 78], 0.0, 180.0, mom_smile, 1),
        ]);

        // Dad's snores drift up and to the right.
        for i in 0..3 {
            comp.push(Shape::text((8 + i * 8, 58 - i * 8), "Z", snore));
        }

        Ok(comp)
    }
}
