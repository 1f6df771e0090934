// crates/calotrig-core/src/capture.rs
//
// Capture container: a dump of link words for consecutive frames.

use crate::config::checksum::crc32;
use crate::error::{CaloError, Result};
use crate::link::output::OutputLinks;
use crate::link::{N_INPUT_LINKS, N_OUTPUT_LINKS, N_OUTPUT_WORDS_PER_FRAME, N_WORDS_PER_FRAME};

pub const MAGIC_CTF1: [u8; 4] = *b"CTF1";
pub const CTF1_VERSION: u8 = 1;

const HEADER_LEN: usize = 4 + 1 + 2 + 2 + 4;

/// Frames of link words, stored frame-major then link-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    n_links: u16,
    words_per_link: u16,
    words: Vec<u64>,
}

impl Capture {
    pub fn new(n_links: usize, words_per_link: usize) -> Result<Self> {
        if n_links == 0 || n_links > u16::MAX as usize {
            return Err(CaloError::Validation(format!("capture n_links out of range: {n_links}")));
        }
        if words_per_link == 0 || words_per_link > u16::MAX as usize {
            return Err(CaloError::Validation(format!(
                "capture words_per_link out of range: {words_per_link}"
            )));
        }
        Ok(Self {
            n_links: n_links as u16,
            words_per_link: words_per_link as u16,
            words: Vec::new(),
        })
    }

    /// Empty capture shaped like the pipeline's input links.
    pub fn input() -> Self {
        Self {
            n_links: N_INPUT_LINKS as u16,
            words_per_link: N_WORDS_PER_FRAME as u16,
            words: Vec::new(),
        }
    }

    /// Empty capture shaped like the pipeline's output links.
    pub fn output() -> Self {
        Self {
            n_links: N_OUTPUT_LINKS as u16,
            words_per_link: N_OUTPUT_WORDS_PER_FRAME as u16,
            words: Vec::new(),
        }
    }

    pub fn n_links(&self) -> usize {
        self.n_links as usize
    }

    pub fn words_per_link(&self) -> usize {
        self.words_per_link as usize
    }

    fn frame_len(&self) -> usize {
        self.n_links() * self.words_per_link()
    }

    pub fn frames(&self) -> usize {
        self.words.len() / self.frame_len()
    }

    pub fn is_input_shaped(&self) -> bool {
        self.n_links() == N_INPUT_LINKS && self.words_per_link() == N_WORDS_PER_FRAME
    }

    pub fn is_output_shaped(&self) -> bool {
        self.n_links() == N_OUTPUT_LINKS && self.words_per_link() == N_OUTPUT_WORDS_PER_FRAME
    }

    /// Append one frame; every link must carry exactly `words_per_link` words.
    pub fn push_frame(&mut self, links: &[Vec<u64>]) -> Result<()> {
        if links.len() != self.n_links() {
            return Err(CaloError::Validation(format!(
                "frame has {} links, capture expects {}",
                links.len(),
                self.n_links()
            )));
        }
        if let Some((i, l)) = links
            .iter()
            .enumerate()
            .find(|(_, l)| l.len() != self.words_per_link())
        {
            return Err(CaloError::Validation(format!(
                "link {} has {} words, capture expects {}",
                i,
                l.len(),
                self.words_per_link()
            )));
        }
        for l in links {
            self.words.extend_from_slice(l);
        }
        Ok(())
    }

    pub fn push_output(&mut self, links: &OutputLinks) -> Result<()> {
        let links: Vec<Vec<u64>> = links.iter().map(|l| l.to_vec()).collect();
        self.push_frame(&links)
    }

    pub fn link_words(&self, frame: usize, link: usize) -> Option<&[u64]> {
        if frame >= self.frames() || link >= self.n_links() {
            return None;
        }
        let start = frame * self.frame_len() + link * self.words_per_link();
        Some(&self.words[start..start + self.words_per_link()])
    }

    pub fn frame_links(&self, frame: usize) -> Result<Vec<Vec<u64>>> {
        if frame >= self.frames() {
            return Err(CaloError::Validation(format!(
                "frame {} out of range (capture holds {})",
                frame,
                self.frames()
            )));
        }
        let start = frame * self.frame_len();
        Ok(self.words[start..start + self.frame_len()]
            .chunks(self.words_per_link())
            .map(|c| c.to_vec())
            .collect())
    }

    pub fn all_frames(&self) -> Vec<Vec<Vec<u64>>> {
        self.words
            .chunks(self.frame_len())
            .map(|f| f.chunks(self.words_per_link()).map(|c| c.to_vec()).collect())
            .collect()
    }

    /// Layout (little-endian):
    /// MAGIC[4] "CTF1"
    /// version:u8
    /// n_links:u16
    /// words_per_link:u16
    /// n_frames:u32
    /// words: n_frames * n_links * words_per_link x u64
    /// crc32:u32          (over everything before crc32)
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.words.len() * 8 + 4);
        out.extend_from_slice(&MAGIC_CTF1);
        out.push(CTF1_VERSION);
        out.extend_from_slice(&self.n_links.to_le_bytes());
        out.extend_from_slice(&self.words_per_link.to_le_bytes());
        out.extend_from_slice(&(self.frames() as u32).to_le_bytes());
        for w in &self.words {
            out.extend_from_slice(&w.to_le_bytes());
        }
        let crc = crc32(&out);
        out.extend_from_slice(&crc.to_le_bytes());
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN + 4 {
            return Err(CaloError::CaptureFormat("capture too small".into()));
        }
        if bytes[0..4] != MAGIC_CTF1 {
            return Err(CaloError::CaptureFormat("bad magic".into()));
        }
        if bytes[4] != CTF1_VERSION {
            return Err(CaloError::CaptureFormat(format!(
                "unsupported version {}",
                bytes[4]
            )));
        }

        let crc_off = bytes.len() - 4;
        let crc_expected = u32::from_le_bytes([
            bytes[crc_off],
            bytes[crc_off + 1],
            bytes[crc_off + 2],
            bytes[crc_off + 3],
        ]);
        if crc_expected != crc32(&bytes[..crc_off]) {
            return Err(CaloError::CaptureFormat("crc32 mismatch".into()));
        }

        let n_links = u16::from_le_bytes([bytes[5], bytes[6]]);
        let words_per_link = u16::from_le_bytes([bytes[7], bytes[8]]);
        let n_frames = u32::from_le_bytes([bytes[9], bytes[10], bytes[11], bytes[12]]) as usize;
        if n_links == 0 || words_per_link == 0 {
            return Err(CaloError::CaptureFormat("empty link geometry".into()));
        }

        let n_bytes = n_frames
            .checked_mul(n_links as usize * words_per_link as usize)
            .and_then(|n| n.checked_mul(8))
            .ok_or_else(|| CaloError::CaptureFormat("word count overflow".into()))?;
        let n_words = n_bytes / 8;
        let body = &bytes[HEADER_LEN..crc_off];
        if body.len() != n_bytes {
            return Err(CaloError::CaptureFormat(format!(
                "payload length mismatch: header says {} words, found {} bytes",
                n_words,
                body.len()
            )));
        }

        let words = body
            .chunks_exact(8)
            .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
            .collect();

        Ok(Self {
            n_links,
            words_per_link,
            words,
        })
    }
}
