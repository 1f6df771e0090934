use crate::config::defaults::CONFIG_VERSION;
use crate::config::params::{AlgoMode, ClusterConfig, ClusterShape, StitchPredicate};
use crate::error::{CaloError, Result};

pub fn validate_config(c: &ClusterConfig) -> Result<()> {
    if c.version == 0 || c.version > CONFIG_VERSION {
        return Err(CaloError::Validation(format!(
            "unsupported config version {} (max {})",
            c.version, CONFIG_VERSION
        )));
    }

    match c.mode {
        AlgoMode::Cluster | AlgoMode::Passthrough => {}
    }

    match c.shape {
        ClusterShape::EtaStrips3x5 | ClusterShape::Square3x3 => {}
    }

    match c.predicate {
        StitchPredicate::BoundaryOnly | StitchPredicate::OrthogonalMatch => {}
    }

    Ok(())
}
