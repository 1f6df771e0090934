//! Per-bunch-crossing ECAL clustering for a calorimeter trigger front end.
//!
//! Input links carry 5×5 crystal energies per tower; every tower is reduced
//! to a cluster around its energy peak, clusters straddling tower edges are
//! stitched in eta and then phi, and the resulting records are packed onto
//! output links. The pipeline is a pure function of one frame.
//!
//! # Features
//!
//! - `rayon` – [`frame::process_batch`] runs independent frames in parallel.
//!   Results are identical to the sequential path.
//! - `tracing` – debug spans on pipeline stages and an event per merge.

pub mod error;
pub mod validate;

pub mod capture;
pub mod cluster;
pub mod config;
pub mod fixed;
pub mod frame;
pub mod geometry;
pub mod link;
pub mod object;
pub mod stats;
pub mod stitch;
pub mod synth;

pub use crate::config::params::ClusterConfig;
pub use crate::frame::FrameProcessor;
pub use crate::object::crystal::{Crystal, CrystalTile};
pub use crate::object::tower::Tower;
