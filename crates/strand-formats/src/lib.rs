pub mod detect;
pub mod fasta;

use std::path::Path;

use strand_core::Records;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Sequence without header at line {line}")]
    SequenceWithoutHeader { line: usize },
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Read a FASTA file and parse its records
pub fn parse_file(path: impl AsRef<Path>) -> Result<Records, ParseError> {
    let content = fasta::read_fasta_file(path)?;
    fasta::parse(&content)
}
