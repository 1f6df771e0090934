// crates/calotrig-core/src/config/format.rs

use crate::config::checksum::{blake3_16, crc32, hex16};
use crate::config::params::*;
use crate::error::{CaloError, Result};

const MAGIC: &[u8; 4] = b"CTC1";

/// Encoded size: magic + version + flags + crc32 + blake3_16.
pub const ENCODED_LEN: usize = 4 + 2 + 2 + 4 + 16;

const FLAG_KNOWN_BITS: u16 = 0x0333;

/// Binary-stable config format.
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          bits[1:0] mode, bits[5:4] shape, bits[9:8] predicate
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(c: &ClusterConfig) -> Vec<u8> {
    let mut b = Vec::with_capacity(ENCODED_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&c.version.to_le_bytes());
    b.extend_from_slice(&pack_flags(c).to_le_bytes());

    let crc = crc32(&b);
    b.extend_from_slice(&crc.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<ClusterConfig> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(CaloError::ConfigFormat("bad magic".into()));
    }
    let mut i = 4usize;

    let version = read_u16(bytes, &mut i)?;
    let flags = read_u16(bytes, &mut i)?;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(CaloError::ConfigFormat("crc32 mismatch".into()));
    }

    need(bytes, i, 16)?;
    let h_actual = blake3_16(&bytes[0..i]);
    if bytes[i..i + 16] != h_actual {
        return Err(CaloError::ConfigFormat("blake3 mismatch".into()));
    }

    let (mode, shape, predicate) = unpack_flags(flags)?;

    Ok(ClusterConfig {
        version,
        mode,
        shape,
        predicate,
    })
}

/// Stable config identifier: the trailing blake3_16 that `encode()` appends.
pub fn config_id_16(c: &ClusterConfig) -> [u8; 16] {
    let enc = encode(c);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn config_id_hex(c: &ClusterConfig) -> String {
    hex16(&config_id_16(c))
}

fn pack_flags(c: &ClusterConfig) -> u16 {
    let m = match c.mode {
        AlgoMode::Cluster => 0u16,
        AlgoMode::Passthrough => 1u16,
    };
    let s = match c.shape {
        ClusterShape::EtaStrips3x5 => 0u16,
        ClusterShape::Square3x3 => 1u16,
    };
    let p = match c.predicate {
        StitchPredicate::OrthogonalMatch => 0u16,
        StitchPredicate::BoundaryOnly => 1u16,
    };
    m | (s << 4) | (p << 8)
}

fn unpack_flags(flags: u16) -> Result<(AlgoMode, ClusterShape, StitchPredicate)> {
    if flags & !FLAG_KNOWN_BITS != 0 {
        return Err(CaloError::ConfigFormat(format!(
            "unknown flag bits: 0x{:04x}",
            flags & !FLAG_KNOWN_BITS
        )));
    }
    let mode = match flags & 0x3 {
        0 => AlgoMode::Cluster,
        1 => AlgoMode::Passthrough,
        _ => return Err(CaloError::ConfigFormat("unknown mode".into())),
    };
    let shape = match (flags >> 4) & 0x3 {
        0 => ClusterShape::EtaStrips3x5,
        1 => ClusterShape::Square3x3,
        _ => return Err(CaloError::ConfigFormat("unknown cluster shape".into())),
    };
    let predicate = match (flags >> 8) & 0x3 {
        0 => StitchPredicate::OrthogonalMatch,
        1 => StitchPredicate::BoundaryOnly,
        _ => return Err(CaloError::ConfigFormat("unknown stitch predicate".into())),
    };
    Ok((mode, shape, predicate))
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(CaloError::ConfigFormat("unexpected eof".into()));
    }
    Ok(())
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let v = u32::from_le_bytes([bytes[*i], bytes[*i + 1], bytes[*i + 2], bytes[*i + 3]]);
    *i += 4;
    Ok(v)
}
