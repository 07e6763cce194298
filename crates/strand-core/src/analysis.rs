//! Whole-file analysis: validate every record, then translate and summarize each one.

use log::{debug, info, warn};
use serde::Serialize;

use crate::frame::ReadingFrame;
use crate::operations::{
    amino_acid_counts, composition, format_protein, translate_frame, AminoAcidCounts,
    Composition,
};
use crate::sequence::{Record, Records};
use crate::AnalysisError;

/// Statistics for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub percentage: Composition,
    pub aa_count: AminoAcidCounts,
    pub protein: String,
}

/// Per-header results of one analysis run, in record order
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub frame: ReadingFrame,
    results: Vec<(String, AnalysisResult)>,
}

impl Analysis {
    pub fn get(&self, header: &str) -> Option<&AnalysisResult> {
        self.results
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnalysisResult)> {
        self.results.iter().map(|(h, r)| (h.as_str(), r))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|(h, _)| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// First record whose sequence is not nucleotide, if any
pub fn find_non_nucleotide(records: &Records) -> Option<&Record> {
    records.iter().find(|r| !r.is_nucleotide())
}

/// Translate and summarize a single record
pub fn analyze_record(
    record: &Record,
    frame: ReadingFrame,
) -> Result<AnalysisResult, AnalysisError> {
    let percentage = composition(&record.sequence).map_err(|e| AnalysisError::Record {
        header: record.header.clone(),
        source: Box::new(e),
    })?;
    let protein = translate_frame(&record.sequence, frame);
    debug!(
        "{}: {} bases -> {} residues in {}",
        record.header,
        record.len(),
        protein.len(),
        frame
    );

    Ok(AnalysisResult {
        percentage,
        aa_count: amino_acid_counts(&protein),
        protein: format_protein(&record.header, &protein),
    })
}

/// Analyze every record under `frame`.
///
/// Returns `Ok(None)` when any record is not a nucleotide sequence; no record
/// is translated in that case.
pub fn analyze(
    records: &Records,
    frame: ReadingFrame,
) -> Result<Option<Analysis>, AnalysisError> {
    if let Some(rejected) = find_non_nucleotide(records) {
        warn!(
            "{} is not a nucleotide sequence, skipping analysis of {} records",
            rejected.header,
            records.len()
        );
        return Ok(None);
    }

    let results = records
        .iter()
        .map(|r| Ok((r.header.clone(), analyze_record(r, frame)?)))
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    info!("analyzed {} records in {}", results.len(), frame);
    Ok(Some(Analysis { frame, results }))
}
