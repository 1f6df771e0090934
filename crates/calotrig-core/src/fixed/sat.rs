// crates/calotrig-core/src/fixed/sat.rs
//
// Fixed-width unsigned fields used by the clustering pipeline.
// Every field is carried in the smallest native integer that holds it and
// every sum that lands in a narrower field goes through `saturate`.

/// Largest value of a 10-bit field (energies, cluster/tower ET).
pub const MAX_10BIT: u32 = 0x3FF;

/// Largest value of a 12-bit field (strip sums).
pub const MAX_12BIT: u32 = 0xFFF;

/// Largest value of a 3-bit field (peak bins, timing, hOe).
pub const MAX_3BIT: u32 = 0x7;

/// Largest value of a 14-bit field (packed crystal word).
pub const MAX_14BIT: u32 = 0x3FFF;

/// Clamp `value` to `max` instead of wrapping.
#[inline]
pub const fn saturate(value: u32, max: u32) -> u32 {
    if value > max {
        max
    } else {
        value
    }
}

/// Saturate into a 10-bit ET field.
#[inline]
pub const fn sat10(value: u32) -> u16 {
    saturate(value, MAX_10BIT) as u16
}

/// Saturate into a 12-bit strip field.
#[inline]
pub const fn sat12(value: u32) -> u16 {
    saturate(value, MAX_12BIT) as u16
}

#[inline]
pub const fn is_saturated10(value: u16) -> bool {
    value as u32 == MAX_10BIT
}
