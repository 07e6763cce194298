use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical bases followed by the IUPAC ambiguity codes
pub const NUCLEOTIDES: &[u8; 15] = b"ACGTNRYKMSWBDHV";

/// True when every character is a nucleotide letter. Empty sequences pass.
pub fn is_nucleotide(sequence: &str) -> bool {
    sequence.bytes().all(|b| NUCLEOTIDES.contains(&b))
}

/// One FASTA record. The header keeps its leading `>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub header: String,
    pub sequence: String,
}

impl Record {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into().to_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_nucleotide(&self) -> bool {
        is_nucleotide(&self.sequence)
    }
}

/// Records keyed by header, in first-seen order.
///
/// Inserting a header that is already present replaces its sequence but keeps
/// the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    entries: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the sequence it replaced if the header was seen before
    pub fn insert(&mut self, record: Record) -> Option<String> {
        match self.index.get(&record.header) {
            Some(&pos) => Some(std::mem::replace(
                &mut self.entries[pos].sequence,
                record.sequence,
            )),
            None => {
                self.index.insert(record.header.clone(), self.entries.len());
                self.entries.push(record);
                None
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&Record> {
        self.index.get(header).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.header.as_str())
    }
}

impl<'a> IntoIterator for &'a Records {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Record> for Records {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut records = Records::new();
        for record in iter {
            records.insert(record);
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nucleotide() {
        assert!(is_nucleotide("ACGTACGT"));
        assert!(is_nucleotide("NRYKMSWBDHV"));
        assert!(is_nucleotide(""));
        assert!(!is_nucleotide("ACGE"));
        assert!(!is_nucleotide("MKLV*"));
        assert!(!is_nucleotide("ACGU"));
        // validation runs on already uppercased input
        assert!(!is_nucleotide("acgt"));
    }

    #[test]
    fn test_new_record_uppercases() {
        let rec = Record::new(">seq1", "atgNnc");
        assert_eq!(rec.header, ">seq1");
        assert_eq!(rec.sequence, "ATGNNC");
        assert_eq!(rec.len(), 6);
        assert!(rec.is_nucleotide());
    }

    #[test]
    fn test_records_keep_order() {
        let records: Records = vec![
            Record::new(">b", "AAA"),
            Record::new(">a", "CCC"),
            Record::new(">c", "GGG"),
        ]
        .into_iter()
        .collect();
        let headers: Vec<&str> = records.headers().collect();
        assert_eq!(headers, vec![">b", ">a", ">c"]);
    }

    #[test]
    fn test_duplicate_header_last_write_wins() {
        let mut records = Records::new();
        assert_eq!(records.insert(Record::new(">x", "AAA")), None);
        records.insert(Record::new(">y", "TTT"));
        assert_eq!(
            records.insert(Record::new(">x", "GGG")),
            Some("AAA".to_string())
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records.get(">x").unwrap().sequence, "GGG");
        assert_eq!(records.headers().next(), Some(">x"));
    }
}
