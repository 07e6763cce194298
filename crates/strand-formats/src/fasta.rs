use std::path::Path;

use log::{debug, warn};
use strand_core::sequence::{Record, Records};

use crate::ParseError;

/// Sequence line width used by `serialize`
pub const LINE_WIDTH: usize = 80;

/// Parse FASTA text into records keyed by header.
///
/// Headers keep their `>` marker. Sequence lines are trimmed and uppercased
/// but otherwise taken as-is; validating the alphabet is left to the caller.
pub fn parse(input: &str) -> Result<Records, ParseError> {
    let mut records = Records::new();
    let mut current_header: Option<&str> = None;
    let mut current_seq = String::new();

    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with('>') {
            // Save previous record, even when its sequence is empty
            if let Some(header) = current_header.replace(trimmed) {
                push_record(&mut records, header, std::mem::take(&mut current_seq));
            }
        } else if current_header.is_some() {
            current_seq.push_str(trimmed);
        } else if !trimmed.is_empty() {
            return Err(ParseError::SequenceWithoutHeader { line: idx + 1 });
        }
    }

    // Don't forget the last record
    match current_header {
        Some(header) => push_record(&mut records, header, current_seq),
        None => {
            return Err(ParseError::InvalidFormat(
                "No sequences found in FASTA input".to_string(),
            ))
        }
    }

    debug!("parsed {} FASTA records", records.len());
    Ok(records)
}

fn push_record(records: &mut Records, header: &str, sequence: String) {
    if records.insert(Record::new(header, sequence)).is_some() {
        warn!("duplicate header {}, keeping the later sequence", header);
    }
}

/// Every header line in file order, duplicates included
pub fn list_headers(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('>'))
        .map(str::to_string)
        .collect()
}

/// Serialize records to FASTA format
pub fn serialize(records: &Records) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str(&record.header);
        out.push('\n');

        // Wrap on char boundaries; the alphabet is not checked here
        let bases: Vec<char> = record.sequence.chars().collect();
        for chunk in bases.chunks(LINE_WIDTH) {
            out.extend(chunk);
            out.push('\n');
        }
    }

    out
}

/// Read a whole FASTA file; the handle is closed before this returns
pub fn read_fasta_file(path: impl AsRef<Path>) -> Result<String, ParseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_sequence() {
        let input = ">seq1 A test sequence\nATCGATCG\nggcctTAA\n";
        let recs = parse(input).unwrap();
        assert_eq!(recs.len(), 1);
        let rec = recs.get(">seq1 A test sequence").unwrap();
        assert_eq!(rec.sequence, "ATCGATCGGGCCTTAA");
    }

    #[test]
    fn test_parse_multi_sequence() {
        let input = ">seq1\nATCG\n>seq2\nGGCC\n>seq3\nTTAA\n";
        let recs = parse(input).unwrap();
        let seqs: Vec<&str> = recs.iter().map(|r| r.sequence.as_str()).collect();
        assert_eq!(seqs, vec!["ATCG", "GGCC", "TTAA"]);
    }

    #[test]
    fn test_header_and_lines_are_trimmed() {
        let input = "  >seq1 desc  \r\n  ACGT \r\n\tTTGG\r\n";
        let recs = parse(input).unwrap();
        assert_eq!(recs.get(">seq1 desc").unwrap().sequence, "ACGTTTGG");
    }

    #[test]
    fn test_empty_records_are_kept() {
        let recs = parse(">a\n>b\nACG\n>c\n").unwrap();
        let headers: Vec<&str> = recs.headers().collect();
        assert_eq!(headers, vec![">a", ">b", ">c"]);
        assert!(recs.get(">a").unwrap().is_empty());
        assert!(recs.get(">c").unwrap().is_empty());

        // a header-only duplicate still replaces the earlier sequence
        let recs = parse(">x\nAAA\n>x\n>y\nCCC").unwrap();
        assert!(recs.get(">x").unwrap().is_empty());
        assert_eq!(recs.get(">y").unwrap().sequence, "CCC");
    }

    #[test]
    fn test_duplicate_headers() {
        let recs = parse(">x\nAAA\n>y\nCCC\n>x\nGGG\n").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs.get(">x").unwrap().sequence, "GGG");
        assert_eq!(recs.headers().collect::<Vec<_>>(), vec![">x", ">y"]);
    }

    #[test]
    fn test_sequence_before_header() {
        let err = parse("\nACGT\n>seq1\nACGT\n").unwrap_err();
        assert!(matches!(err, ParseError::SequenceWithoutHeader { line: 2 }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse("\n\n"), Err(ParseError::InvalidFormat(_))));
        // a bare marker is still a header
        assert_eq!(parse("> \n").unwrap().headers().next(), Some(">"));
    }

    #[test]
    fn test_list_headers() {
        let input = ">a one\nACGT\n  >b\nTT\n>a one\nGG\n";
        assert_eq!(list_headers(input), vec![">a one", ">b", ">a one"]);
        assert!(list_headers("ACGT\n").is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let input = ">test A test\nATCGATCGATCGATCG\n>second\nNNNN\n";
        let recs = parse(input).unwrap();
        let serialized = serialize(&recs);
        assert_eq!(serialized, input);
        assert_eq!(parse(&serialized).unwrap(), recs);
    }
}
