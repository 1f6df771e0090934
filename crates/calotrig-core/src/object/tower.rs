// crates/calotrig-core/src/object/tower.rs

use std::fmt;

use crate::fixed::sat::{MAX_10BIT, MAX_3BIT};

/// Sentinel peak bin assigned to a merge loser ("no cluster here").
pub const PEAK_SENTINEL: u8 = 2;

/// Clustering result for one 5×5 crystal region.
///
/// Arithmetic happens on these unpacked fields; the 32-bit form only exists
/// at the link boundary (`pack` / `unpack`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tower {
    /// 10-bit, saturating.
    pub cluster_et: u16,
    /// 10-bit, saturating.
    pub tower_et: u16,
    /// 0..=4
    pub peak_phi: u8,
    /// 0..=4
    pub peak_eta: u8,
    /// Reserved, currently always 0.
    pub peak_time: u8,
    /// Reserved, currently always 0.
    pub hoe: u8,
}

/// Packed 32-bit tower word as it travels on output links.
pub type PackedTower = u32;

impl Tower {
    pub const ZERO: Tower = Tower {
        cluster_et: 0,
        tower_et: 0,
        peak_phi: 0,
        peak_eta: 0,
        peak_time: 0,
        hoe: 0,
    };

    /// Pack into the link layout:
    /// [9:0]=cluster_et [19:10]=tower_et [22:20]=peak_phi [25:23]=peak_eta
    /// [28:26]=peak_time [31:29]=hOe
    #[inline]
    pub fn pack(self) -> PackedTower {
        (self.cluster_et as u32 & MAX_10BIT)
            | ((self.tower_et as u32 & MAX_10BIT) << 10)
            | ((self.peak_phi as u32 & MAX_3BIT) << 20)
            | ((self.peak_eta as u32 & MAX_3BIT) << 23)
            | ((self.peak_time as u32 & MAX_3BIT) << 26)
            | ((self.hoe as u32 & MAX_3BIT) << 29)
    }

    #[inline]
    pub fn unpack(x: PackedTower) -> Self {
        Self {
            cluster_et: (x & MAX_10BIT) as u16,
            tower_et: ((x >> 10) & MAX_10BIT) as u16,
            peak_phi: ((x >> 20) & MAX_3BIT) as u8,
            peak_eta: ((x >> 23) & MAX_3BIT) as u8,
            peak_time: ((x >> 26) & MAX_3BIT) as u8,
            hoe: ((x >> 29) & MAX_3BIT) as u8,
        }
    }

    /// Same tower with its cluster identity removed: no energy, peak at the sentinel.
    /// Tower ET, time and hOe stay.
    #[inline]
    pub fn remnant(self) -> Self {
        Self {
            cluster_et: 0,
            peak_phi: PEAK_SENTINEL,
            peak_eta: PEAK_SENTINEL,
            ..self
        }
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tower [{}, ({}, {}), {}, {}, {}]",
            self.cluster_et, self.peak_phi, self.peak_eta, self.peak_time, self.hoe, self.tower_et
        )
    }
}
