// crates/calotrig-core/src/geometry.rs
//
// Fixed detector region handled by one invocation of the pipeline.

use crate::object::crystal::{Crystal, CrystalTile};
use crate::object::tower::Tower;

pub const TOWERS_IN_ETA: usize = 16;
pub const TOWERS_IN_PHI: usize = 2;
pub const TOWER_COUNT: usize = TOWERS_IN_ETA * TOWERS_IN_PHI;

/// Crystals per tower side.
pub const CRYSTALS_PER_SIDE: usize = 5;

/// Whole frame of crystal input, indexed `[phi][eta]`.
pub type CrystalFrame = [[CrystalTile; TOWERS_IN_ETA]; TOWERS_IN_PHI];

/// Stitched towers of a frame, indexed `[phi][eta]`.
pub type TowerGrid = [[Tower; TOWERS_IN_ETA]; TOWERS_IN_PHI];

/// One phi row of towers ordered by eta.
pub type TowerRow = [Tower; TOWERS_IN_ETA];

pub fn empty_frame() -> CrystalFrame {
    [[[[Crystal::ZERO; CRYSTALS_PER_SIDE]; CRYSTALS_PER_SIDE]; TOWERS_IN_ETA]; TOWERS_IN_PHI]
}

pub fn empty_grid() -> TowerGrid {
    [[Tower::ZERO; TOWERS_IN_ETA]; TOWERS_IN_PHI]
}

/// Tower position `(ieta, iphi)` fed by input link `link`.
#[inline]
pub const fn input_link_position(link: usize) -> (usize, usize) {
    (link / TOWERS_IN_PHI, link % TOWERS_IN_PHI)
}

/// Input link index feeding tower `(ieta, iphi)`.
#[inline]
pub const fn input_link_index(ieta: usize, iphi: usize) -> usize {
    ieta * TOWERS_IN_PHI + iphi
}
