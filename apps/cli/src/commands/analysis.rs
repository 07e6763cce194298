use std::path::Path;

use log::info;
use regex::Regex;
use strand_core::{analyze, ReadingFrame};
use strand_formats::fasta;

use crate::commands::file::open_fasta_file;
use crate::dto::{AnalysisResponse, Payloads, ResultDto};
use crate::CliError;

/// What to report and for which headers
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub payloads: Payloads,
    /// Exact headers, with or without the leading `>`
    pub headers: Vec<String>,
    /// Regex matched against each header
    pub pattern: Option<String>,
    pub all_headers: bool,
}

struct HeaderFilter {
    headers: Vec<String>,
    pattern: Option<Regex>,
    all: bool,
}

impl HeaderFilter {
    fn matches(&self, header: &str) -> bool {
        self.all
            || self.headers.iter().any(|h| h == header)
            || self.pattern.as_ref().is_some_and(|re| re.is_match(header))
    }
}

impl AnalysisOptions {
    fn header_filter(&self) -> Result<HeaderFilter, CliError> {
        if !self.all_headers && self.headers.is_empty() && self.pattern.is_none() {
            return Err(CliError::NoHeadersSelected);
        }

        let headers = self
            .headers
            .iter()
            .map(|h| {
                let h = h.trim();
                if h.starts_with('>') {
                    h.to_string()
                } else {
                    format!(">{}", h)
                }
            })
            .collect();
        let pattern = self.pattern.as_deref().map(Regex::new).transpose()?;

        Ok(HeaderFilter {
            headers,
            pattern,
            all: self.all_headers,
        })
    }
}

/// Analyze FASTA text and keep the selected headers and payloads
pub fn analyze_content(
    content: &str,
    frame: ReadingFrame,
    options: &AnalysisOptions,
) -> Result<AnalysisResponse, CliError> {
    if !options.payloads.any() {
        return Err(CliError::NoPayloadSelected);
    }
    let filter = options.header_filter()?;

    let records = fasta::parse(content)?;
    let Some(analysis) = analyze(&records, frame)? else {
        return Ok(AnalysisResponse::ProteinSequence);
    };

    let results: Vec<ResultDto> = analysis
        .iter()
        .filter(|(header, _)| filter.matches(header))
        .enumerate()
        .map(|(i, (header, result))| ResultDto::new(i + 1, header, result, options.payloads))
        .collect();

    info!(
        "reporting {} of {} records in {}",
        results.len(),
        analysis.len(),
        frame
    );
    Ok(AnalysisResponse::Ok {
        frame: frame.to_string(),
        results,
    })
}

pub fn analyze_file(
    path: &Path,
    frame: ReadingFrame,
    options: &AnalysisOptions,
) -> Result<AnalysisResponse, CliError> {
    let content = open_fasta_file(path)?;
    analyze_content(&content, frame, options)
}
