// crates/calotrig-core/src/link/mod.rs
//
// Serial link framing around the clustering core. Every link carries one
// frame of `N_WORDS_PER_FRAME` 64-bit words per bunch crossing.

use crate::geometry::TOWER_COUNT;

pub mod input;
pub mod output;

/// 64-bit words per link per frame, input and output.
pub const N_WORDS_PER_FRAME: usize = 6;

/// One input link per tower.
pub const N_INPUT_LINKS: usize = TOWER_COUNT;

/// Two output links per phi row.
pub const N_OUTPUT_LINKS: usize = 4;

pub const N_OUTPUT_WORDS_PER_FRAME: usize = N_WORDS_PER_FRAME;

/// Eta index of the first tower carried by an odd output link.
pub const OUTPUT_ODD_LINK_ETA_OFFSET: usize = 10;
