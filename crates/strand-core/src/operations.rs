use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::codon::{Codon, CodonTable};
use crate::frame::{extract_codons, ReadingFrame};
use crate::AnalysisError;

/// Residues per line in formatted protein text
pub const PROTEIN_LINE_WIDTH: usize = 70;

/// Translate codons to amino acid symbols using the given codon table
pub fn translate(codons: &[Codon], table: &CodonTable) -> String {
    codons.iter().map(|&c| table.translate_codon(c)).collect()
}

/// Extract codons in `frame` and translate them with the standard table
pub fn translate_frame(seq: &str, frame: ReadingFrame) -> String {
    translate(&extract_codons(seq, frame), CodonTable::standard())
}

/// Base composition in percent. `ambiguous` covers everything that is not A, C, G or T.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub ambiguous: f64,
}

impl Composition {
    /// Labelled values in A, G, C, T, ambiguous order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("A", self.a),
            ("G", self.g),
            ("C", self.c),
            ("T", self.t),
            ("ambiguous", self.ambiguous),
        ]
    }

    pub fn total(&self) -> f64 {
        self.a + self.g + self.c + self.t + self.ambiguous
    }
}

/// Calculate base composition. Fails on an empty sequence instead of producing NaN.
pub fn composition(seq: &str) -> Result<Composition, AnalysisError> {
    if seq.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }

    let total = seq.len() as f64;
    let percent = |base: u8| seq.bytes().filter(|&b| b == base).count() as f64 / total * 100.0;

    let a = percent(b'A');
    let g = percent(b'G');
    let c = percent(b'C');
    let t = percent(b'T');

    Ok(Composition {
        a,
        g,
        c,
        t,
        ambiguous: 100.0 - (a + g + c + t),
    })
}

/// Amino acid symbol counts in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AminoAcidCounts {
    counts: Vec<(char, usize)>,
}

impl AminoAcidCounts {
    pub fn get(&self, symbol: char) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(0, |&(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the protein length
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for AminoAcidCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (symbol, count) in &self.counts {
            map.serialize_entry(symbol, count)?;
        }
        map.end()
    }
}

/// Count each symbol of a protein sequence
pub fn amino_acid_counts(protein: &str) -> AminoAcidCounts {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for symbol in protein.chars() {
        match counts.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, n)) => *n += 1,
            None => counts.push((symbol, 1)),
        }
    }
    AminoAcidCounts { counts }
}

/// Header line followed by the protein in lines of `PROTEIN_LINE_WIDTH` residues
pub fn format_protein(header: &str, protein: &str) -> String {
    let lines = protein.len().div_ceil(PROTEIN_LINE_WIDTH);
    let mut out = String::with_capacity(header.len() + protein.len() + lines + 1);

    out.push_str(header);
    out.push('\n');

    for chunk in protein.as_bytes().chunks(PROTEIN_LINE_WIDTH) {
        out.push_str(&String::from_utf8_lossy(chunk));
        out.push('\n');
    }

    out
}
