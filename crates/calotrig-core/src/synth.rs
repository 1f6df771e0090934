// crates/calotrig-core/src/synth.rs
//
// Deterministic synthetic crystal frames for tools and tests. Not physics,
// just showers with a plausible shape that cross tower edges often enough
// to exercise stitching.

use crate::fixed::sat::{saturate, MAX_10BIT};
use crate::geometry::{empty_frame, CrystalFrame, CRYSTALS_PER_SIDE, TOWERS_IN_ETA, TOWERS_IN_PHI};

/// Crystal columns across the whole region.
pub const CRYSTALS_IN_ETA: usize = TOWERS_IN_ETA * CRYSTALS_PER_SIDE;
/// Crystal rows across the whole region.
pub const CRYSTALS_IN_PHI: usize = TOWERS_IN_PHI * CRYSTALS_PER_SIDE;

/// 64-bit LCG (deterministic, not crypto).
#[derive(Clone, Debug)]
pub struct Lcg(pub u64);

impl Lcg {
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// Uniform-ish value in `0..n` from the high bits.
    #[inline]
    pub fn below(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        ((self.next_u64() >> 32) * n) >> 32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deposit {
    /// Global crystal eta, 0..CRYSTALS_IN_ETA.
    pub eta: usize,
    /// Global crystal phi, 0..CRYSTALS_IN_PHI.
    pub phi: usize,
    pub energy: u32,
}

/// Add a shower centred on one crystal: 1/2 in the core, 1/8 to each edge
/// neighbour, 1/32 to each corner. Crystal energies saturate at 10 bits.
pub fn add_deposit(frame: &mut CrystalFrame, d: Deposit) {
    for de in -1i64..=1 {
        for dp in -1i64..=1 {
            let e = d.eta as i64 + de;
            let p = d.phi as i64 + dp;
            if e < 0 || p < 0 || e >= CRYSTALS_IN_ETA as i64 || p >= CRYSTALS_IN_PHI as i64 {
                continue;
            }
            let share = match (de == 0, dp == 0) {
                (true, true) => d.energy >> 1,
                (true, false) | (false, true) => d.energy >> 3,
                (false, false) => d.energy >> 5,
            };
            let (e, p) = (e as usize, p as usize);
            let c = &mut frame[p / CRYSTALS_PER_SIDE][e / CRYSTALS_PER_SIDE]
                [e % CRYSTALS_PER_SIDE][p % CRYSTALS_PER_SIDE];
            c.energy = saturate(c.energy as u32 + share, MAX_10BIT) as u16;
        }
    }
}

/// A frame with `deposits` random showers, random timing codes on hit
/// crystals and a rare spike flag on a shower core.
pub fn synth_frame(rng: &mut Lcg, deposits: usize) -> CrystalFrame {
    let mut frame = empty_frame();

    for _ in 0..deposits {
        let d = Deposit {
            eta: rng.below(CRYSTALS_IN_ETA as u64) as usize,
            phi: rng.below(CRYSTALS_IN_PHI as u64) as usize,
            energy: 20 + rng.below(1200) as u32,
        };
        add_deposit(&mut frame, d);

        let core = &mut frame[d.phi / CRYSTALS_PER_SIDE][d.eta / CRYSTALS_PER_SIDE]
            [d.eta % CRYSTALS_PER_SIDE][d.phi % CRYSTALS_PER_SIDE];
        core.timing = rng.below(8) as u8;
        if rng.below(64) == 0 {
            core.spike = true;
        }
    }

    frame
}
