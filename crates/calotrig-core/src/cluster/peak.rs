// crates/calotrig-core/src/cluster/peak.rs

/// Highest peak bin of a 5-bin strip profile.
pub const LAST_BIN: u8 = 4;

/// Division-free estimate of the strip holding the energy-weighted centroid.
///
/// `weighted = Σ (k + 0.5)·strips[k]`, built from shifts and adds with the
/// `>> 1` terms floored, then compared against integer multiples of `total`:
/// the result is the smallest `k` in 0..=3 with `weighted <= total·(k+1)`,
/// otherwise 4. Ties resolve toward the lower bin; `total == 0` yields 0.
#[inline]
pub fn estimate_peak(strips: &[u16; 5], total: u16) -> u8 {
    let s: [u32; 5] = strips.map(u32::from);
    let weighted: u32 = (s[0] >> 1)                // 0.5
        + (s[1] >> 1) + s[1]                       // 1.5
        + (s[2] >> 1) + (s[2] << 1)                // 2.5
        + (s[3] << 2) - (s[3] >> 1)                // 3.5
        + (s[4] << 2) + (s[4] >> 1);               // 4.5

    let total = total as u32;
    if weighted <= total {
        0
    } else if weighted <= total << 1 {
        1
    } else if weighted <= total + (total << 1) {
        2
    } else if weighted <= total << 2 {
        3
    } else {
        LAST_BIN
    }
}
