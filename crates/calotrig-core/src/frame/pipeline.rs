// crates/calotrig-core/src/frame/pipeline.rs
//
// One frame, start to finish:
//   crystals -> TowerBuilder (every tile) -> EtaStitcher (each phi row)
//            -> PhiStitcher (the two rows) -> output links
// Nothing survives between frames.

use crate::cluster::build::build_tower_from_tile;
use crate::config::params::{AlgoMode, ClusterConfig};
use crate::error::{CaloError, Result};
use crate::fixed::sat::is_saturated10;
use crate::geometry::{
    empty_frame, empty_grid, input_link_index, input_link_position, CrystalFrame, TowerGrid,
    TOWERS_IN_ETA, TOWERS_IN_PHI,
};
use crate::link::input::{pack_input_link, unpack_input_link};
use crate::link::output::{pack_output_links, OutputLinks};
use crate::link::{N_INPUT_LINKS, N_OUTPUT_LINKS, N_WORDS_PER_FRAME};
use crate::object::crystal::tile_spikes;
use crate::stats::counters::FrameStats;
use crate::stitch::{stitch_eta, stitch_phi};

#[cfg(feature = "tracing")]
use tracing::instrument;

// The phi stitch handles exactly one boundary.
const _: () = assert!(TOWERS_IN_PHI == 2);

/// Output of one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameResult {
    pub links: OutputLinks,
    /// Stitched towers; `None` in passthrough mode.
    pub towers: Option<TowerGrid>,
    pub stats: FrameStats,
}

/// Cluster and stitch a whole frame of crystals.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn cluster_frame(config: &ClusterConfig, frame: &CrystalFrame) -> (TowerGrid, FrameStats) {
    let mut stats = FrameStats::default();
    let mut built = empty_grid();

    for (phi, row) in frame.iter().enumerate() {
        for (eta, tile) in row.iter().enumerate() {
            stats.spike_crystals += tile_spikes(tile);
            let tower = build_tower_from_tile(tile, config.shape);
            if is_saturated10(tower.tower_et) {
                stats.saturated_towers += 1;
            }
            built[phi][eta] = tower;
        }
    }

    let (row0, r0) = stitch_eta(&built[0], config.predicate);
    let (row1, r1) = stitch_eta(&built[1], config.predicate);
    stats.eta_merges_phase1 = r0.phase1_merges + r1.phase1_merges;
    stats.eta_merges_phase2 = r0.phase2_merges + r1.phase2_merges;

    let (row0, row1, phi_merges) = stitch_phi(&row0, &row1, config.predicate);
    stats.phi_merges = phi_merges;

    let grid: TowerGrid = [row0, row1];
    stats.saturated_clusters = grid
        .iter()
        .flatten()
        .filter(|t| is_saturated10(t.cluster_et))
        .count() as u32;

    (grid, stats)
}

/// Decode all input links of a frame.
/// Link `i` feeds tower `(i / TOWERS_IN_PHI, i % TOWERS_IN_PHI)`.
pub fn unpack_frame(links: &[Vec<u64>]) -> Result<CrystalFrame> {
    check_link_count(links)?;

    let mut frame = empty_frame();
    for (i, words) in links.iter().enumerate() {
        let (ieta, iphi) = input_link_position(i);
        frame[iphi][ieta] = unpack_input_link(words);
    }
    Ok(frame)
}

/// Encode a crystal frame into its input links.
pub fn pack_frame(frame: &CrystalFrame) -> Vec<Vec<u64>> {
    let mut links = vec![Vec::new(); N_INPUT_LINKS];
    for iphi in 0..TOWERS_IN_PHI {
        for ieta in 0..TOWERS_IN_ETA {
            links[input_link_index(ieta, iphi)] = pack_input_link(&frame[iphi][ieta]).to_vec();
        }
    }
    links
}

/// Run one frame of input links through the configured pipeline.
pub fn process_frame(config: &ClusterConfig, links: &[Vec<u64>]) -> Result<FrameResult> {
    match config.mode {
        AlgoMode::Cluster => {
            let frame = unpack_frame(links)?;
            let (grid, stats) = cluster_frame(config, &frame);
            Ok(FrameResult {
                links: pack_output_links(&grid),
                towers: Some(grid),
                stats,
            })
        }
        AlgoMode::Passthrough => {
            check_link_count(links)?;
            Ok(FrameResult {
                links: passthrough_links(links),
                towers: None,
                stats: FrameStats::default(),
            })
        }
    }
}

/// Output link `l` repeats input link `l`; links past the inputs repeat the last one.
/// Missing input words read as zero.
fn passthrough_links(links: &[Vec<u64>]) -> OutputLinks {
    let mut out: OutputLinks = [[0u64; N_WORDS_PER_FRAME]; N_OUTPUT_LINKS];
    for (l, dst) in out.iter_mut().enumerate() {
        let src = &links[l.min(N_INPUT_LINKS - 1)];
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *s;
        }
    }
    out
}

fn check_link_count(links: &[Vec<u64>]) -> Result<()> {
    if links.len() != N_INPUT_LINKS {
        return Err(CaloError::Validation(format!(
            "frame needs {} input links, got {}",
            N_INPUT_LINKS,
            links.len()
        )));
    }
    Ok(())
}
