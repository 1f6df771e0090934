// crates/calotrig-core/src/object/crystal.rs

use crate::fixed::sat::MAX_14BIT;

/// One ECAL crystal readout for the current bunch crossing.
///
/// Packed 14-bit word: bits[9:0]=energy, bits[12:10]=timing, bit[13]=spike.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Crystal {
    /// 10-bit energy, 0..=1023.
    pub energy: u16,
    /// 3-bit timing code.
    pub timing: u8,
    /// Anomalous-energy flag. Carried along, never acted on by clustering.
    pub spike: bool,
}

/// 5×5 crystal region of one tower, indexed `[eta][phi]`.
pub type CrystalTile = [[Crystal; 5]; 5];

impl Crystal {
    pub const ZERO: Crystal = Crystal {
        energy: 0,
        timing: 0,
        spike: false,
    };

    /// Decode a 14-bit crystal word. Bits above bit 13 are ignored.
    #[inline]
    pub fn from_word(word: u16) -> Self {
        let w = word as u32 & MAX_14BIT;
        Self {
            energy: (w & 0x3FF) as u16,
            timing: ((w >> 10) & 0x7) as u8,
            spike: (w >> 13) & 1 == 1,
        }
    }

    /// Decode the low 14 bits of a wider link register.
    #[inline]
    pub fn from_bits(raw: u64) -> Self {
        Self::from_word((raw & MAX_14BIT as u64) as u16)
    }

    #[inline]
    pub fn to_word(self) -> u16 {
        ((self.spike as u16) << 13) | (((self.timing & 0x7) as u16) << 10) | (self.energy & 0x3FF)
    }
}

/// Energies of a tile, the only crystal quantity clustering reads.
pub fn tile_energies(tile: &CrystalTile) -> [[u16; 5]; 5] {
    let mut out = [[0u16; 5]; 5];
    for (eta, row) in tile.iter().enumerate() {
        for (phi, c) in row.iter().enumerate() {
            out[eta][phi] = c.energy;
        }
    }
    out
}

/// Number of spike-flagged crystals in a tile.
pub fn tile_spikes(tile: &CrystalTile) -> u32 {
    tile.iter().flatten().filter(|c| c.spike).count() as u32
}
