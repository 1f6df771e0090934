// crates/calotrig-core/src/frame/processor.rs

use crate::config::params::ClusterConfig;
use crate::error::Result;
use crate::frame::pipeline::{cluster_frame, process_frame, FrameResult};
use crate::geometry::{CrystalFrame, TowerGrid};
use crate::stats::counters::Counters;
use crate::validate::validate_config;

/// Frame-synchronous front end: a validated config plus running counters.
///
/// Every call starts from fresh towers; only `stats` accumulates.
pub struct FrameProcessor {
    config: ClusterConfig,
    pub stats: Counters,
}

impl FrameProcessor {
    pub fn new(config: ClusterConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            config,
            stats: Counters::default(),
        })
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Cluster an already-unpacked crystal frame, regardless of mode.
    pub fn cluster(&mut self, frame: &CrystalFrame) -> TowerGrid {
        let (grid, stats) = cluster_frame(&self.config, frame);
        self.stats.observe(&stats);
        grid
    }

    /// One frame of `N_INPUT_LINKS` input links in, output links out.
    pub fn process_links(&mut self, links: &[Vec<u64>]) -> Result<FrameResult> {
        let result = process_frame(&self.config, links)?;
        tally(&mut self.stats, &result);
        Ok(result)
    }
}

pub(crate) fn tally(counters: &mut Counters, result: &FrameResult) {
    if result.towers.is_some() {
        counters.observe(&result.stats);
    } else {
        counters.observe_passthrough();
    }
}
