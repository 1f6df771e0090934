// crates/calotrig-cli/src/io/mod.rs

pub mod capture_file;
pub mod config_file;
pub mod jsonl;
