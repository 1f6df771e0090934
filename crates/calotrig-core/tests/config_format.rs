use calotrig_core::config::checksum::{blake3_16, crc32};
use calotrig_core::config::defaults::{default_config, CONFIG_VERSION};
use calotrig_core::config::format::{config_id_16, config_id_hex, decode, encode, ENCODED_LEN};
use calotrig_core::config::params::{AlgoMode, ClusterConfig, ClusterShape, StitchPredicate};
use calotrig_core::error::CaloError;
use calotrig_core::validate::validate_config;

/// Raw record with valid checksums around arbitrary version/flags.
fn raw_record(version: u16, flags: u16) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(b"CTC1");
    b.extend_from_slice(&version.to_le_bytes());
    b.extend_from_slice(&flags.to_le_bytes());
    let crc = crc32(&b);
    b.extend_from_slice(&crc.to_le_bytes());
    let h = blake3_16(&b);
    b.extend_from_slice(&h);
    b
}

fn all_configs() -> Vec<ClusterConfig> {
    let mut out = Vec::new();
    for mode in [AlgoMode::Cluster, AlgoMode::Passthrough] {
        for shape in [ClusterShape::EtaStrips3x5, ClusterShape::Square3x3] {
            for predicate in [StitchPredicate::OrthogonalMatch, StitchPredicate::BoundaryOnly] {
                out.push(ClusterConfig {
                    version: CONFIG_VERSION,
                    mode,
                    shape,
                    predicate,
                });
            }
        }
    }
    out
}

#[test]
fn default_is_canonical() {
    let c = ClusterConfig::default();
    assert_eq!(c, default_config());
    assert_eq!(c.mode, AlgoMode::Cluster);
    assert_eq!(c.shape, ClusterShape::EtaStrips3x5);
    assert_eq!(c.predicate, StitchPredicate::OrthogonalMatch);
    validate_config(&c).expect("default validates");
}

#[test]
fn every_variant_roundtrips() {
    for c in all_configs() {
        let bytes = encode(&c);
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(decode(&bytes).expect("decode"), c);
    }
}

#[test]
fn default_flags_are_zero() {
    assert_eq!(encode(&default_config()), raw_record(CONFIG_VERSION, 0));
}

#[test]
fn config_ids_are_stable_and_distinct() {
    let configs = all_configs();
    for (i, a) in configs.iter().enumerate() {
        assert_eq!(config_id_16(a), config_id_16(&decode(&encode(a)).expect("decode")));
        assert_eq!(config_id_hex(a).len(), 32);
        for b in &configs[i + 1..] {
            assert_ne!(config_id_16(a), config_id_16(b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn bad_magic_rejected() {
    let mut bytes = encode(&default_config());
    bytes[0] = b'X';
    assert!(matches!(decode(&bytes), Err(CaloError::ConfigFormat(_))));
    assert!(decode(b"CT").is_err());
}

#[test]
fn corruption_detected() {
    let good = encode(&default_config());

    // payload byte: crc catches it
    let mut bytes = good.clone();
    bytes[6] ^= 0x10;
    let err = decode(&bytes).expect_err("crc");
    assert!(err.to_string().contains("crc32"), "{err}");

    // trailing hash byte
    let mut bytes = good.clone();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    let err = decode(&bytes).expect_err("blake3");
    assert!(err.to_string().contains("blake3"), "{err}");

    // truncated
    assert!(decode(&good[..ENCODED_LEN - 3]).is_err());
}

#[test]
fn unknown_flags_rejected() {
    assert!(decode(&raw_record(1, 0x0400)).is_err());
    assert!(decode(&raw_record(1, 0x0002)).is_err());
    assert!(decode(&raw_record(1, 0x0020)).is_err());
    assert!(decode(&raw_record(1, 0x0200)).is_err());
    assert!(decode(&raw_record(1, 0x0111)).is_ok());
}

#[test]
fn version_is_decoded_then_validated() {
    let c = decode(&raw_record(CONFIG_VERSION + 1, 0)).expect("decodes");
    assert!(validate_config(&c).is_err());

    let c = decode(&raw_record(0, 0)).expect("decodes");
    assert!(matches!(validate_config(&c), Err(CaloError::Validation(_))));
}
