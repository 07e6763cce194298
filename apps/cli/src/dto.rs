//! Flat, JSON-friendly DTOs for command output.

use serde::Serialize;
use strand_core::operations::{AminoAcidCounts, Composition};
use strand_core::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderDto {
    pub id: String,
    pub header: String,
}

/// Which result payloads a caller asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Payloads {
    pub percentage: bool,
    pub aa_count: bool,
    pub protein: bool,
}

impl Payloads {
    pub fn all() -> Self {
        Self {
            percentage: true,
            aa_count: true,
            protein: true,
        }
    }

    pub fn any(&self) -> bool {
        self.percentage || self.aa_count || self.protein
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDto {
    pub id: String,
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Composition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aa_count: Option<AminoAcidCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
}

impl ResultDto {
    pub fn new(id: usize, header: &str, result: &AnalysisResult, payloads: Payloads) -> Self {
        ResultDto {
            id: id.to_string(),
            header: header.to_string(),
            percentage: payloads.percentage.then_some(result.percentage),
            aa_count: payloads.aa_count.then(|| result.aa_count.clone()),
            protein: payloads.protein.then(|| result.protein.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResponse {
    Ok {
        frame: String,
        results: Vec<ResultDto>,
    },
    /// At least one record is not a nucleotide sequence
    ProteinSequence,
}

impl AnalysisResponse {
    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        let results = match self {
            AnalysisResponse::ProteinSequence => {
                return "Protein sequence detected: translation needs nucleotide input\n"
                    .to_string()
            }
            AnalysisResponse::Ok { results, .. } => results,
        };

        let mut out = String::new();
        for result in results {
            out.push_str(&format!("[{}] {}\n", result.id, result.header));
            if let Some(percentage) = &result.percentage {
                for (label, value) in percentage.entries() {
                    out.push_str(&format!("  {:<10}{:>7.2}%\n", label, value));
                }
            }
            if let Some(counts) = &result.aa_count {
                let line: Vec<String> = counts
                    .iter()
                    .map(|(aa, n)| format!("{}:{}", aa, n))
                    .collect();
                out.push_str(&format!("  {}\n", line.join(" ")));
            }
            if let Some(protein) = &result.protein {
                out.push_str(protein);
            }
        }
        out
    }
}
