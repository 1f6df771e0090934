// crates/calotrig-core/src/frame/batch.rs

use crate::config::params::ClusterConfig;
use crate::error::Result;
use crate::frame::pipeline::{process_frame, FrameResult};
use crate::frame::processor::tally;
use crate::stats::counters::Counters;
use crate::validate::validate_config;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Process independent frames, in parallel with the `rayon` feature.
///
/// Frames share no state, so results and counters are identical to running
/// them one by one; results keep input order.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(frames = frames.len()))
)]
pub fn process_batch(
    config: &ClusterConfig,
    frames: &[Vec<Vec<u64>>],
) -> Result<(Vec<FrameResult>, Counters)> {
    validate_config(config)?;

    #[cfg(feature = "rayon")]
    let results: Vec<Result<FrameResult>> = frames
        .par_iter()
        .map(|links| process_frame(config, links))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let results: Vec<Result<FrameResult>> = frames
        .iter()
        .map(|links| process_frame(config, links))
        .collect();

    let mut counters = Counters::default();
    let mut out = Vec::with_capacity(results.len());
    for r in results {
        let r = r?;
        tally(&mut counters, &r);
        out.push(r);
    }

    Ok((out, counters))
}
