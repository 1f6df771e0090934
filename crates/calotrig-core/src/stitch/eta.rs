// crates/calotrig-core/src/stitch/eta.rs

use crate::config::params::StitchPredicate;
use crate::object::tower::Tower;
use crate::stitch::merge::{merge_neighbors, should_stitch, StitchAxis};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Merges performed by one eta stitch of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EtaStitchReport {
    /// Pairs (0,1), (2,3), ...
    pub phase1_merges: u32,
    /// Pairs (1,2), (3,4), ...
    pub phase2_merges: u32,
}

/// Stitch one phi row along eta in two fixed passes.
///
/// Phase 1 merges the even-offset pairs of `row`. Phase 2 merges the
/// odd-offset pairs of the phase-1 output, but decides eligibility from the
/// peaks of the unstitched `row`. Index 0 and, for even `N`, index `N-1` have
/// no phase-2 partner; for odd `N` the last index has no phase-1 partner.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn stitch_eta<const N: usize>(
    row: &[Tower; N],
    predicate: StitchPredicate,
) -> ([Tower; N], EtaStitchReport) {
    let mut report = EtaStitchReport::default();

    let mut step1 = *row;
    for i in (0..N.saturating_sub(1)).step_by(2) {
        if should_stitch(&row[i], &row[i + 1], StitchAxis::Eta, predicate) {
            (step1[i], step1[i + 1]) = merge_neighbors(row[i], row[i + 1], true);
            report.phase1_merges += 1;
        }
    }

    let mut out = step1;
    for i in (1..N.saturating_sub(1)).step_by(2) {
        if should_stitch(&row[i], &row[i + 1], StitchAxis::Eta, predicate) {
            (out[i], out[i + 1]) = merge_neighbors(step1[i], step1[i + 1], true);
            report.phase2_merges += 1;
        }
    }

    (out, report)
}
