// crates/calotrig-core/src/link/input.rs
//
// Input link layout: 25 crystals of 14 bits in 6 words. Crystals that do not
// fit at the top of a word start in its top byte and finish in the low 6 bits
// of the next word; the top byte of every word is latched as `carry` for that.
//
//   word0: c[0][0..3] @ 0,14,28,42         top byte: c[0][4] low 8
//   word1: c[0][4] high 6 @ 0, c[1][0..3] @ 6,20,34,48
//   word2: c[1][4] @ 0, c[2][0..2] @ 14,28,42    top byte: c[2][3] low 8
//   word3: c[2][3] high 6 @ 0, c[2][4] @ 6, c[3][0..2] @ 20,34,48
//   word4: c[3][3..4] @ 0,14, c[4][0..1] @ 28,42 top byte: c[4][2] low 8
//   word5: c[4][2] high 6 @ 0, c[4][3..4] @ 6,20, CRC slot @ 48..63

use crate::link::N_WORDS_PER_FRAME;
use crate::object::crystal::{Crystal, CrystalTile};

/// Bit offset of the reserved 16-bit CRC slot in the last word.
pub const CRC_SLOT_SHIFT: u32 = 48;

/// Decode one tower's link frame.
///
/// A short frame (empty read) leaves the remaining crystals zero and does not
/// touch the carry. Words past the sixth are ignored.
pub fn unpack_input_link(words: &[u64]) -> CrystalTile {
    let mut tile = [[Crystal::ZERO; 5]; 5];
    let mut carry: u64 = 0;

    for i in 0..N_WORDS_PER_FRAME {
        let Some(&data) = words.get(i) else {
            continue;
        };
        let spanning = Crystal::from_bits((data << 8) | carry);

        match i {
            0 => {
                for k in 0..4 {
                    tile[0][k] = Crystal::from_bits(data >> (k * 14));
                }
            }
            1 => {
                tile[0][4] = spanning;
                for k in 0..4 {
                    tile[1][k] = Crystal::from_bits(data >> (k * 14 + 6));
                }
            }
            2 => {
                tile[1][4] = Crystal::from_bits(data);
                for k in 0..3 {
                    tile[2][k] = Crystal::from_bits(data >> (k * 14 + 14));
                }
            }
            3 => {
                tile[2][3] = spanning;
                tile[2][4] = Crystal::from_bits(data >> 6);
                for k in 0..3 {
                    tile[3][k] = Crystal::from_bits(data >> (k * 14 + 20));
                }
            }
            4 => {
                for k in 0..2 {
                    tile[3][k + 3] = Crystal::from_bits(data >> (k * 14));
                }
                for k in 0..2 {
                    tile[4][k] = Crystal::from_bits(data >> (k * 14 + 28));
                }
            }
            5 => {
                tile[4][2] = spanning;
                for k in 0..2 {
                    tile[4][k + 3] = Crystal::from_bits(data >> (k * 14 + 6));
                }
            }
            _ => {}
        }

        carry = data >> 56;
    }

    tile
}

/// Encode one tower's crystals into a link frame; unused bits and the CRC slot are zero.
pub fn pack_input_link(tile: &CrystalTile) -> [u64; N_WORDS_PER_FRAME] {
    let w = |eta: usize, phi: usize| tile[eta][phi].to_word() as u64;

    [
        w(0, 0) | (w(0, 1) << 14) | (w(0, 2) << 28) | (w(0, 3) << 42) | ((w(0, 4) & 0xFF) << 56),
        (w(0, 4) >> 8) | (w(1, 0) << 6) | (w(1, 1) << 20) | (w(1, 2) << 34) | (w(1, 3) << 48),
        w(1, 4) | (w(2, 0) << 14) | (w(2, 1) << 28) | (w(2, 2) << 42) | ((w(2, 3) & 0xFF) << 56),
        (w(2, 3) >> 8) | (w(2, 4) << 6) | (w(3, 0) << 20) | (w(3, 1) << 34) | (w(3, 2) << 48),
        w(3, 3) | (w(3, 4) << 14) | (w(4, 0) << 28) | (w(4, 1) << 42) | ((w(4, 2) & 0xFF) << 56),
        (w(4, 2) >> 8) | (w(4, 3) << 6) | (w(4, 4) << 20),
    ]
}

/// Reserved CRC slot of a link frame. Never interpreted by the pipeline.
pub fn link_crc_slot(words: &[u64]) -> u16 {
    words
        .get(N_WORDS_PER_FRAME - 1)
        .map(|w| (w >> CRC_SLOT_SHIFT) as u16)
        .unwrap_or(0)
}
