// crates/calotrig-core/src/cluster/mod.rs

pub mod build;
pub mod peak;
