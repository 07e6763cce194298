//! Reading frames and codon extraction.
//!
//! Forward frames read left to right starting at offset 0, 1 or 2. Reverse
//! frames read the same strand right to left, skipping 0, 1 or 2 bases at the
//! end. Reverse frames do not complement bases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codon::Codon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingFrame {
    Forward0,
    Forward1,
    Forward2,
    Reverse0,
    Reverse1,
    Reverse2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// How a frame walks the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameParams {
    /// Bases skipped at the start (forward) or at the end (reverse)
    pub offset: usize,
    pub direction: Direction,
}

// Indexed by `ReadingFrame as usize`
const FRAME_PARAMS: [FrameParams; 6] = [
    FrameParams { offset: 0, direction: Direction::Forward },
    FrameParams { offset: 1, direction: Direction::Forward },
    FrameParams { offset: 2, direction: Direction::Forward },
    FrameParams { offset: 0, direction: Direction::Reverse },
    FrameParams { offset: 1, direction: Direction::Reverse },
    FrameParams { offset: 2, direction: Direction::Reverse },
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown reading frame: {0:?}")]
pub struct FrameParseError(pub String);

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 6] = [
        ReadingFrame::Forward0,
        ReadingFrame::Forward1,
        ReadingFrame::Forward2,
        ReadingFrame::Reverse0,
        ReadingFrame::Reverse1,
        ReadingFrame::Reverse2,
    ];

    pub fn params(self) -> FrameParams {
        FRAME_PARAMS[self as usize]
    }

    pub fn offset(self) -> usize {
        self.params().offset
    }

    /// Number of whole codons this frame yields for a sequence of `len` bases
    pub fn codon_count(self, len: usize) -> usize {
        len.saturating_sub(self.offset()) / 3
    }

    /// Numbered frame names (`frame1` .. `frame6`) as sent by upload forms
    pub fn from_legacy_name(name: &str) -> Option<Self> {
        match name {
            "frame1" => Some(ReadingFrame::Forward0),
            "frame2" => Some(ReadingFrame::Forward1),
            "frame3" => Some(ReadingFrame::Forward2),
            "frame4" => Some(ReadingFrame::Reverse2),
            "frame5" => Some(ReadingFrame::Reverse1),
            "frame6" => Some(ReadingFrame::Reverse0),
            _ => None,
        }
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadingFrame::Forward0 => "forward0",
            ReadingFrame::Forward1 => "forward1",
            ReadingFrame::Forward2 => "forward2",
            ReadingFrame::Reverse0 => "reverse0",
            ReadingFrame::Reverse1 => "reverse1",
            ReadingFrame::Reverse2 => "reverse2",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ReadingFrame {
    type Err = FrameParseError;

    /// Accepts `forward0`..`reverse2`, `+1`..`-3` and the legacy `frame1`..`frame6`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Some(frame) = Self::from_legacy_name(&lower) {
            return Ok(frame);
        }
        let frame = match lower.as_str() {
            "forward0" | "+1" => ReadingFrame::Forward0,
            "forward1" | "+2" => ReadingFrame::Forward1,
            "forward2" | "+3" => ReadingFrame::Forward2,
            "reverse0" | "-1" => ReadingFrame::Reverse0,
            "reverse1" | "-2" => ReadingFrame::Reverse1,
            "reverse2" | "-3" => ReadingFrame::Reverse2,
            _ => return Err(FrameParseError(s.to_string())),
        };
        Ok(frame)
    }
}

/// Split a sequence into codons under the given frame.
///
/// Partial codons at either end are dropped, so every codon has exactly three
/// bases and the count equals `frame.codon_count(sequence.len())`.
pub fn extract_codons(sequence: &str, frame: ReadingFrame) -> Vec<Codon> {
    let bases = sequence.as_bytes();
    let FrameParams { offset, direction } = frame.params();
    let mut codons = Vec::with_capacity(frame.codon_count(bases.len()));

    match direction {
        Direction::Forward => {
            let start = offset.min(bases.len());
            for chunk in bases[start..].chunks_exact(3) {
                codons.push(Codon::new([chunk[0], chunk[1], chunk[2]]));
            }
        }
        Direction::Reverse => {
            let end = bases.len().saturating_sub(offset);
            for chunk in bases[..end].rchunks_exact(3) {
                codons.push(Codon::new([chunk[2], chunk[1], chunk[0]]));
            }
        }
    }

    codons
}
