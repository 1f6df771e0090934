// crates/calotrig-core/src/config/mod.rs

pub mod checksum;
pub mod defaults;
pub mod format;
pub mod params;
