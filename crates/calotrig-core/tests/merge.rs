use calotrig_core::config::params::StitchPredicate;
use calotrig_core::object::tower::PEAK_SENTINEL;
use calotrig_core::stitch::{merge_neighbors, should_stitch, StitchAxis};
use calotrig_core::Tower;

fn tower(cluster_et: u16, tower_et: u16, peak_eta: u8, peak_phi: u8) -> Tower {
    Tower {
        cluster_et,
        tower_et,
        peak_phi,
        peak_eta,
        peak_time: 0,
        hoe: 0,
    }
}

#[test]
fn no_merge_passes_through() {
    let a = tower(500, 600, 4, 1);
    let b = tower(300, 310, 0, 1);
    assert_eq!(merge_neighbors(a, b, false), (a, b));
}

#[test]
fn larger_cluster_absorbs_neighbour() {
    let a = tower(500, 600, 4, 1);
    let b = tower(300, 310, 0, 1);
    let (ao, bo) = merge_neighbors(a, b, true);

    assert_eq!(ao, tower(800, 600, 4, 1));
    assert_eq!(bo.cluster_et, 0);
    assert_eq!((bo.peak_eta, bo.peak_phi), (PEAK_SENTINEL, PEAK_SENTINEL));
    assert_eq!(bo.tower_et, 310);
}

#[test]
fn b_wins_when_strictly_larger() {
    let a = tower(120, 130, 4, 3);
    let b = tower(121, 500, 0, 3);
    let (ao, bo) = merge_neighbors(a, b, true);

    assert_eq!(ao, tower(0, 130, 2, 2));
    assert_eq!(bo, tower(241, 500, 0, 3));
}

#[test]
fn tie_goes_to_b() {
    let a = tower(200, 210, 4, 0);
    let b = tower(200, 220, 0, 0);
    let (ao, bo) = merge_neighbors(a, b, true);

    assert_eq!(ao, tower(0, 210, 2, 2));
    assert_eq!(bo, tower(400, 220, 0, 0));
}

#[test]
fn merged_energy_saturates() {
    let a = tower(900, 1023, 4, 2);
    let b = tower(400, 400, 0, 2);
    let (ao, bo) = merge_neighbors(a, b, true);
    assert_eq!(ao.cluster_et, 1023);
    assert_eq!(bo.cluster_et, 0);
}

#[test]
fn energy_is_conserved_below_saturation() {
    for (x, y) in [(0u16, 0u16), (1, 0), (0, 1), (511, 512), (1000, 23), (7, 700)] {
        let (ao, bo) = merge_neighbors(tower(x, 0, 4, 0), tower(y, 0, 0, 0), true);
        assert_eq!(ao.cluster_et + bo.cluster_et, x + y);
        assert!(ao.cluster_et == 0 || bo.cluster_et == 0);
    }
}

#[test]
fn reserved_fields_survive_merge() {
    let a = Tower { peak_time: 5, hoe: 3, ..tower(50, 60, 4, 1) };
    let b = Tower { peak_time: 1, hoe: 7, ..tower(90, 95, 0, 1) };
    let (ao, bo) = merge_neighbors(a, b, true);
    assert_eq!((ao.peak_time, ao.hoe, ao.tower_et), (5, 3, 60));
    assert_eq!((bo.peak_time, bo.hoe, bo.tower_et), (1, 7, 95));
}

#[test]
fn eta_predicate() {
    let lo = tower(1, 1, 4, 2);
    let hi = tower(1, 1, 0, 2);
    let hi_other_phi = tower(1, 1, 0, 3);

    assert!(should_stitch(&lo, &hi, StitchAxis::Eta, StitchPredicate::OrthogonalMatch));
    assert!(!should_stitch(&lo, &hi_other_phi, StitchAxis::Eta, StitchPredicate::OrthogonalMatch));
    assert!(should_stitch(&lo, &hi_other_phi, StitchAxis::Eta, StitchPredicate::BoundaryOnly));

    // wrong orientation
    assert!(!should_stitch(&hi, &lo, StitchAxis::Eta, StitchPredicate::BoundaryOnly));
    // not on the edge
    let mid = tower(1, 1, 3, 2);
    assert!(!should_stitch(&mid, &hi, StitchAxis::Eta, StitchPredicate::BoundaryOnly));
}

#[test]
fn phi_predicate() {
    let lo = tower(1, 1, 1, 4);
    let hi = tower(1, 1, 1, 0);
    let hi_other_eta = tower(1, 1, 2, 0);

    assert!(should_stitch(&lo, &hi, StitchAxis::Phi, StitchPredicate::OrthogonalMatch));
    assert!(!should_stitch(&lo, &hi_other_eta, StitchAxis::Phi, StitchPredicate::OrthogonalMatch));
    assert!(should_stitch(&lo, &hi_other_eta, StitchAxis::Phi, StitchPredicate::BoundaryOnly));
    assert!(!should_stitch(&lo, &hi, StitchAxis::Eta, StitchPredicate::BoundaryOnly));
}
