// crates/calotrig-core/src/cluster/build.rs

use crate::cluster::peak::estimate_peak;
use crate::config::params::ClusterShape;
use crate::fixed::sat::{sat10, sat12, MAX_10BIT};
use crate::geometry::CRYSTALS_PER_SIDE;
use crate::object::crystal::{tile_energies, CrystalTile};
use crate::object::tower::Tower;

/// Strip profile of one tower.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Strips {
    /// `eta[e]` = Σ over phi of row `e`, saturated to 12 bits.
    pub eta: [u16; 5],
    /// `phi[p]` = Σ over eta of column `p`, saturated to 12 bits.
    pub phi: [u16; 5],
    /// Exact 25-crystal sum.
    pub total: u16,
}

/// Two independent 5-way reductions over the same 25 energies.
pub fn strip_sums(energies: &[[u16; 5]; 5]) -> Strips {
    let mut eta_raw = [0u32; CRYSTALS_PER_SIDE];
    let mut phi_raw = [0u32; CRYSTALS_PER_SIDE];

    for (eta, row) in energies.iter().enumerate() {
        for (phi, &e) in row.iter().enumerate() {
            let e = (e as u32) & MAX_10BIT;
            eta_raw[eta] += e;
            phi_raw[phi] += e;
        }
    }

    let total: u32 = eta_raw.iter().sum();

    Strips {
        eta: eta_raw.map(sat12),
        phi: phi_raw.map(sat12),
        total: total as u16,
    }
}

/// Cluster a 5×5 energy grid (indexed `[eta][phi]`) into a tower record.
pub fn build_tower(energies: &[[u16; 5]; 5], shape: ClusterShape) -> Tower {
    let strips = strip_sums(energies);

    let tower_et = sat10(strips.total as u32);
    let peak_eta = estimate_peak(&strips.eta, strips.total);
    let peak_phi = estimate_peak(&strips.phi, strips.total);

    let cluster_et = match shape {
        ClusterShape::EtaStrips3x5 => {
            let mut sum = 0u32;
            for eta in window(peak_eta) {
                sum += strips.eta[eta] as u32;
            }
            sat10(sum)
        }
        ClusterShape::Square3x3 => {
            let mut sum = 0u32;
            for eta in window(peak_eta) {
                for phi in window(peak_phi) {
                    sum += (energies[eta][phi] as u32) & MAX_10BIT;
                }
            }
            sat10(sum)
        }
    };

    Tower {
        cluster_et,
        tower_et,
        peak_phi,
        peak_eta,
        // not computed yet
        peak_time: 0,
        hoe: 0,
    }
}

/// `build_tower` on a crystal tile; timing and spike bits do not participate.
#[inline]
pub fn build_tower_from_tile(tile: &CrystalTile, shape: ClusterShape) -> Tower {
    build_tower(&tile_energies(tile), shape)
}

/// In-range bins of `peak-1..=peak+1`; out-of-range offsets contribute nothing.
#[inline]
fn window(peak: u8) -> impl Iterator<Item = usize> {
    let peak = peak as usize;
    peak.saturating_sub(1)..(peak + 2).min(CRYSTALS_PER_SIDE)
}
