// crates/calotrig-core/src/stitch/phi.rs

use crate::config::params::StitchPredicate;
use crate::object::tower::Tower;
use crate::stitch::merge::{merge_neighbors, should_stitch, StitchAxis};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Stitch the single phi boundary between two eta-stitched rows.
///
/// Every eta column is an independent pair `(low[t], high[t])`; returns the
/// stitched rows and the number of merges.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn stitch_phi<const N: usize>(
    low: &[Tower; N],
    high: &[Tower; N],
    predicate: StitchPredicate,
) -> ([Tower; N], [Tower; N], u32) {
    let mut out_low = *low;
    let mut out_high = *high;
    let mut merges = 0u32;

    for t in 0..N {
        if should_stitch(&low[t], &high[t], StitchAxis::Phi, predicate) {
            (out_low[t], out_high[t]) = merge_neighbors(low[t], high[t], true);
            merges += 1;
        }
    }

    (out_low, out_high, merges)
}
