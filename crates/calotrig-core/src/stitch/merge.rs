// crates/calotrig-core/src/stitch/merge.rs

use crate::cluster::peak::LAST_BIN;
use crate::config::params::StitchPredicate;
use crate::fixed::sat::sat10;
use crate::object::tower::Tower;

/// Tower boundary being stitched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StitchAxis {
    Eta,
    Phi,
}

/// Merge eligibility of `lo` and its higher-index neighbour `hi` across `axis`.
///
/// `lo` must peak in the outer bin and `hi` in the inner bin on that axis.
/// With `OrthogonalMatch` the peak coordinate on the other axis must also agree.
#[inline]
pub fn should_stitch(lo: &Tower, hi: &Tower, axis: StitchAxis, predicate: StitchPredicate) -> bool {
    let (lo_edge, hi_edge, lo_other, hi_other) = match axis {
        StitchAxis::Eta => (lo.peak_eta, hi.peak_eta, lo.peak_phi, hi.peak_phi),
        StitchAxis::Phi => (lo.peak_phi, hi.peak_phi, lo.peak_eta, hi.peak_eta),
    };
    let on_boundary = lo_edge == LAST_BIN && hi_edge == 0;
    match predicate {
        StitchPredicate::BoundaryOnly => on_boundary,
        StitchPredicate::OrthogonalMatch => on_boundary && lo_other == hi_other,
    }
}

/// Merge-to-max of two neighbouring towers.
///
/// Without `should_merge` both pass through. Otherwise the tower with the
/// strictly larger `cluster_et` takes the saturated sum and keeps its peak;
/// the other becomes a remnant at the sentinel peak. Equal energies go to `b`.
/// Tower ET, peak time and hOe never change.
pub fn merge_neighbors(a: Tower, b: Tower, should_merge: bool) -> (Tower, Tower) {
    if !should_merge {
        return (a, b);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        a_phi = a.peak_phi,
        a_eta = a.peak_eta,
        a_et = a.cluster_et,
        b_phi = b.peak_phi,
        b_eta = b.peak_eta,
        b_et = b.cluster_et,
        "stitching clusters"
    );

    let sum = sat10(a.cluster_et as u32 + b.cluster_et as u32);

    if a.cluster_et > b.cluster_et {
        (Tower { cluster_et: sum, ..a }, b.remnant())
    } else {
        (a.remnant(), Tower { cluster_et: sum, ..b })
    }
}
