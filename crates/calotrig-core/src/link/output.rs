// crates/calotrig-core/src/link/output.rs

use crate::error::{CaloError, Result};
use crate::geometry::{empty_grid, TowerGrid, TowerRow, TOWERS_IN_ETA, TOWERS_IN_PHI};
use crate::link::{N_OUTPUT_LINKS, N_OUTPUT_WORDS_PER_FRAME, OUTPUT_ODD_LINK_ETA_OFFSET};
use crate::object::tower::Tower;

pub type OutputLink = [u64; N_OUTPUT_WORDS_PER_FRAME];
pub type OutputLinks = [OutputLink; N_OUTPUT_LINKS];

/// Payload words per output link; the last word is the CRC placeholder.
pub const OUTPUT_PAYLOAD_WORDS: usize = N_OUTPUT_WORDS_PER_FRAME - 1;

/// `(phi, eta)` of the lower tower carried by payload word `word` of output link `link`.
#[inline]
pub const fn output_word_position(link: usize, word: usize) -> (usize, usize) {
    (link / 2, word * 2 + (link % 2) * OUTPUT_ODD_LINK_ETA_OFFSET)
}

/// Pack stitched towers onto the output links.
///
/// Each payload word holds two eta-adjacent towers of one phi row, the
/// lower eta in the low half. A trailing lone tower (odd eta count) fills
/// only the low half; positions past the row are zero, as is the final CRC
/// word of every link.
pub fn pack_output_links(grid: &TowerGrid) -> OutputLinks {
    let mut out = [[0u64; N_OUTPUT_WORDS_PER_FRAME]; N_OUTPUT_LINKS];

    for (i, link) in out.iter_mut().enumerate() {
        for (j, word) in link.iter_mut().take(OUTPUT_PAYLOAD_WORDS).enumerate() {
            let (phi, eta) = output_word_position(i, j);
            if let Some(row) = grid.get(phi) {
                *word = pack_pair(row, eta);
            }
        }
    }

    out
}

fn pack_pair(row: &TowerRow, eta: usize) -> u64 {
    if eta + 1 < TOWERS_IN_ETA {
        ((row[eta + 1].pack() as u64) << 32) | row[eta].pack() as u64
    } else if eta + 1 == TOWERS_IN_ETA {
        row[eta].pack() as u64
    } else {
        0
    }
}

/// Recover the tower grid from output links. Positions no link carries stay zero.
pub fn unpack_output_links(links: &OutputLinks) -> TowerGrid {
    let mut grid = empty_grid();

    for (i, link) in links.iter().enumerate() {
        for (j, &word) in link.iter().take(OUTPUT_PAYLOAD_WORDS).enumerate() {
            let (phi, eta) = output_word_position(i, j);
            if phi >= TOWERS_IN_PHI {
                continue;
            }
            if eta < TOWERS_IN_ETA {
                grid[phi][eta] = Tower::unpack(word as u32);
            }
            if eta + 1 < TOWERS_IN_ETA {
                grid[phi][eta + 1] = Tower::unpack((word >> 32) as u32);
            }
        }
    }

    grid
}

/// Output links from captured words; every link must be full length.
pub fn output_links_from_words(links: &[Vec<u64>]) -> Result<OutputLinks> {
    if links.len() != N_OUTPUT_LINKS {
        return Err(CaloError::LinkFormat(format!(
            "expected {} output links, got {}",
            N_OUTPUT_LINKS,
            links.len()
        )));
    }
    let mut out = [[0u64; N_OUTPUT_WORDS_PER_FRAME]; N_OUTPUT_LINKS];
    for (i, (dst, src)) in out.iter_mut().zip(links).enumerate() {
        if src.len() != N_OUTPUT_WORDS_PER_FRAME {
            return Err(CaloError::LinkFormat(format!(
                "output link {} has {} words, expected {}",
                i,
                src.len(),
                N_OUTPUT_WORDS_PER_FRAME
            )));
        }
        dst.copy_from_slice(src);
    }
    Ok(out)
}
