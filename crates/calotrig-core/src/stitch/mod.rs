// crates/calotrig-core/src/stitch/mod.rs
//
// Boundary stitching: a cluster whose peak sits on the outer edge bin of one
// tower and the neighbour's inner edge bin is one deposit, so its energy is
// moved into a single tower.

pub mod eta;
pub mod merge;
pub mod phi;

pub use eta::{stitch_eta, EtaStitchReport};
pub use merge::{merge_neighbors, should_stitch, StitchAxis};
pub use phi::stitch_phi;
