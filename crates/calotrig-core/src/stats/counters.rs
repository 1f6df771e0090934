// crates/calotrig-core/src/stats/counters.rs

/// Per-frame diagnostics. Never fed back into clustering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Spike-flagged crystals in the input.
    pub spike_crystals: u32,
    /// Towers whose `tower_et` hit the 10-bit ceiling.
    pub saturated_towers: u32,
    /// Towers whose `cluster_et` hit the 10-bit ceiling after stitching.
    pub saturated_clusters: u32,
    pub eta_merges_phase1: u32,
    pub eta_merges_phase2: u32,
    pub phi_merges: u32,
}

impl FrameStats {
    pub fn merges(&self) -> u32 {
        self.eta_merges_phase1 + self.eta_merges_phase2 + self.phi_merges
    }
}

/// Running totals over many frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub frames: u64,
    pub passthrough_frames: u64,
    pub spike_crystals: u64,
    pub saturated_towers: u64,
    pub saturated_clusters: u64,
    pub eta_merges_phase1: u64,
    pub eta_merges_phase2: u64,
    pub phi_merges: u64,
}

impl Counters {
    pub fn observe(&mut self, s: &FrameStats) {
        self.frames += 1;
        self.spike_crystals += s.spike_crystals as u64;
        self.saturated_towers += s.saturated_towers as u64;
        self.saturated_clusters += s.saturated_clusters as u64;
        self.eta_merges_phase1 += s.eta_merges_phase1 as u64;
        self.eta_merges_phase2 += s.eta_merges_phase2 as u64;
        self.phi_merges += s.phi_merges as u64;
    }

    pub fn observe_passthrough(&mut self) {
        self.frames += 1;
        self.passthrough_frames += 1;
    }

    pub fn absorb(&mut self, other: &Counters) {
        self.frames += other.frames;
        self.passthrough_frames += other.passthrough_frames;
        self.spike_crystals += other.spike_crystals;
        self.saturated_towers += other.saturated_towers;
        self.saturated_clusters += other.saturated_clusters;
        self.eta_merges_phase1 += other.eta_merges_phase1;
        self.eta_merges_phase2 += other.eta_merges_phase2;
        self.phi_merges += other.phi_merges;
    }

    pub fn merges(&self) -> u64 {
        self.eta_merges_phase1 + self.eta_merges_phase2 + self.phi_merges
    }
}
