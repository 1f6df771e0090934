// crates/calotrig-core/src/object/mod.rs

pub mod crystal;
pub mod tower;
