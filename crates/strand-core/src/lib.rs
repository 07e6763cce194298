pub mod analysis;
pub mod codon;
pub mod frame;
pub mod operations;
pub mod sequence;

pub use analysis::*;
pub use frame::{extract_codons, ReadingFrame};
pub use sequence::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Cannot compute base composition of an empty sequence")]
    EmptySequence,
    #[error("Record {header}")]
    Record {
        header: String,
        #[source]
        source: Box<AnalysisError>,
    },
}
