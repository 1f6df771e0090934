// crates/calotrig-cli/src/io/capture_file.rs

use anyhow::Context;
use calotrig_core::capture::Capture;

/// Leading bytes of a zstd frame.
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Load a .ctf capture, raw or zstd-wrapped.
pub fn load_capture(path: &str) -> anyhow::Result<Capture> {
    let bytes = std::fs::read(path).with_context(|| format!("read capture {path}"))?;
    let raw = if bytes.starts_with(&ZSTD_MAGIC) {
        zstd::decode_all(bytes.as_slice()).with_context(|| format!("zstd decompress {path}"))?
    } else {
        bytes
    };
    let cap = Capture::decode(&raw).with_context(|| format!("decode capture {path}"))?;
    Ok(cap)
}

/// Save a capture. `zstd_level == 0` writes the raw container.
pub fn save_capture(path: &str, cap: &Capture, zstd_level: i32) -> anyhow::Result<usize> {
    let raw = cap.encode();
    let bytes = if zstd_level > 0 {
        zstd::encode_all(raw.as_slice(), zstd_level)
            .with_context(|| format!("zstd compress {path}"))?
    } else {
        raw
    };
    std::fs::write(path, &bytes).with_context(|| format!("write capture {path}"))?;
    Ok(bytes.len())
}
