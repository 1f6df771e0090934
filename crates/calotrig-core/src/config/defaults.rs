// crates/calotrig-core/src/config/defaults.rs

use crate::config::params::{AlgoMode, ClusterConfig, ClusterShape, StitchPredicate};

pub const CONFIG_VERSION: u16 = 1;

/// Canonical configuration: 3×5 eta-strip clusters, stitching guarded by the
/// orthogonal peak match.
pub fn default_config() -> ClusterConfig {
    ClusterConfig {
        version: CONFIG_VERSION,
        mode: AlgoMode::Cluster,
        shape: ClusterShape::EtaStrips3x5,
        predicate: StitchPredicate::OrthogonalMatch,
    }
}
