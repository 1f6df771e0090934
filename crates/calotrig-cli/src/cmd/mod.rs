// crates/calotrig-cli/src/cmd/mod.rs

pub mod config;
pub mod gen;
pub mod inspect;
pub mod run;
