// crates/calotrig-cli/src/io/jsonl.rs

use anyhow::Context;
use calotrig_core::geometry::TowerGrid;

/// Append one line per tower of a stitched frame.
/// Format: {"frame":F,"phi":P,"eta":E,"cluster_et":N,"tower_et":N,"peak_phi":N,"peak_eta":N}
pub fn push_towers(out: &mut String, frame: usize, grid: &TowerGrid) {
    for (phi, row) in grid.iter().enumerate() {
        for (eta, t) in row.iter().enumerate() {
            out.push_str(&format!(
                "{{\"frame\":{},\"phi\":{},\"eta\":{},\"cluster_et\":{},\"tower_et\":{},\"peak_phi\":{},\"peak_eta\":{}}}\n",
                frame, phi, eta, t.cluster_et, t.tower_et, t.peak_phi, t.peak_eta
            ));
        }
    }
}

pub fn write_file(path: &str, s: &str) -> anyhow::Result<()> {
    std::fs::write(path, s).with_context(|| format!("write towers jsonl: {path}"))?;
    Ok(())
}
