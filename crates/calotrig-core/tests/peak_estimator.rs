use calotrig_core::cluster::peak::estimate_peak;

#[test]
fn empty_strips_peak_at_zero() {
    assert_eq!(estimate_peak(&[0, 0, 0, 0, 0], 0), 0);
}

#[test]
fn single_edge_strips() {
    assert_eq!(estimate_peak(&[1023, 0, 0, 0, 0], 1023), 0);
    assert_eq!(estimate_peak(&[0, 0, 0, 0, 1023], 1023), 4);
}

#[test]
fn uniform_profile_peaks_in_centre() {
    for s in [1u16, 2, 3, 7, 100, 511, 1023, 4095] {
        let total = s * 5;
        assert_eq!(estimate_peak(&[s; 5], total), 2, "s={s}");
    }
}

#[test]
fn single_strip_sweep_is_monotonic() {
    for k in 0..5 {
        let mut strips = [0u16; 5];
        strips[k] = 1000;
        assert_eq!(estimate_peak(&strips, 1000), k as u8);
    }
}

#[test]
fn exact_threshold_resolves_to_lower_bin() {
    // weighted = (2>>1) + (2>>1) + 2 = 4 == total
    assert_eq!(estimate_peak(&[2, 2, 0, 0, 0], 4), 0);
    // weighted = 1 + 2 = 3, between total and 2*total
    assert_eq!(estimate_peak(&[0, 2, 0, 0, 0], 2), 1);
}

#[test]
fn large_totals_do_not_truncate_thresholds() {
    // 4*total exceeds 16 bits; comparison must still be exact.
    let strips = [4095, 4095, 4095, 4095, 4095];
    assert_eq!(estimate_peak(&strips, 20475), 2);
    let strips = [0, 0, 0, 4095, 4095];
    // weighted = (16380 - 2047) + (16380 + 2047) = 32760, total 8190 -> 4*8190 = 32760
    assert_eq!(estimate_peak(&strips, 8190), 3);
}
