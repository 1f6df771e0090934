// crates/calotrig-core/src/config/params.rs

/// What the frame pipeline does with its input links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgoMode {
    /// Unpack, cluster, stitch, repack.
    Cluster,
    /// Firmware test mode: input words are copied onto output links untouched.
    Passthrough,
}

/// Crystal window summed into `cluster_et` around the peak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterShape {
    /// Three eta strips centred on `peak_eta`, full phi width.
    EtaStrips3x5,
    /// 3×3 crystals centred on `(peak_eta, peak_phi)`.
    Square3x3,
}

/// Merge eligibility across a tower boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StitchPredicate {
    /// Edge bins only: outer bin 4 on the low side, inner bin 0 on the high side.
    BoundaryOnly,
    /// Edge bins and equal peak coordinate on the orthogonal axis.
    OrthogonalMatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClusterConfig {
    pub version: u16,
    pub mode: AlgoMode,
    pub shape: ClusterShape,
    pub predicate: StitchPredicate,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        crate::config::defaults::default_config()
    }
}
