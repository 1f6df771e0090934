// crates/calotrig-core/src/frame/mod.rs

pub mod batch;
pub mod pipeline;
pub mod processor;

pub use batch::process_batch;
pub use pipeline::{cluster_frame, pack_frame, process_frame, unpack_frame, FrameResult};
pub use processor::FrameProcessor;
