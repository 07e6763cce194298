use std::fmt;

/// Symbol emitted for stop codons
pub const STOP_SYMBOL: char = '_';

/// Symbol emitted for codons that contain an ambiguous base
pub const UNKNOWN_SYMBOL: char = 'X';

/// Three bases in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    pub fn new(bases: [u8; 3]) -> Self {
        Codon(bases)
    }

    /// Build a codon from a 3-character string, `None` for any other length
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[a, b, c] => Some(Codon([a, b, c])),
            _ => None,
        }
    }

    pub fn bases(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Codon to amino acid table, stored as 64 symbols in TCAG order
pub struct CodonTable {
    amino_acids: &'static [u8; 64],
}

/// Standard genetic code (NCBI table 1), stops written as `_`
static STANDARD: CodonTable = CodonTable {
    amino_acids: b"FFLLSSSSYY__CC_WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
};

const TABLE_BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

impl CodonTable {
    /// The shared standard table
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// Translate a single codon. Codons outside the table (ambiguous bases) become `X`.
    pub fn translate_codon(&self, codon: Codon) -> char {
        let [a, b, c] = codon.bases();
        match (base_index(a), base_index(b), base_index(c)) {
            (Some(i), Some(j), Some(k)) => self.amino_acids[i * 16 + j * 4 + k] as char,
            _ => UNKNOWN_SYMBOL,
        }
    }

    /// All 64 codons with their symbols, in table order
    pub fn entries(&self) -> impl Iterator<Item = (Codon, char)> + '_ {
        (0..64).map(move |idx| {
            let codon = Codon::new([
                TABLE_BASES[idx / 16],
                TABLE_BASES[(idx / 4) % 4],
                TABLE_BASES[idx % 4],
            ]);
            (codon, self.amino_acids[idx] as char)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        Codon::parse(s).unwrap()
    }

    #[test]
    fn test_standard_table() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon(codon("ATG")), 'M');
        assert_eq!(table.translate_codon(codon("TAA")), '_');
        assert_eq!(table.translate_codon(codon("GCT")), 'A');
        assert_eq!(table.translate_codon(codon("TGG")), 'W');
        assert_eq!(table.translate_codon(codon("AGA")), 'R');
    }

    #[test]
    fn test_ambiguous_codons() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon(codon("NNN")), 'X');
        assert_eq!(table.translate_codon(codon("ATN")), 'X');
        assert_eq!(table.translate_codon(codon("RYK")), 'X');
    }

    #[test]
    fn test_stop_codons() {
        let table = CodonTable::standard();
        for stop in ["TAA", "TAG", "TGA"] {
            assert_eq!(table.translate_codon(codon(stop)), STOP_SYMBOL);
        }
        assert_ne!(table.translate_codon(codon("TGG")), STOP_SYMBOL);
    }

    #[test]
    fn test_table_shape() {
        let table = CodonTable::standard();
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries.len(), 64);
        assert_eq!(entries[0], (codon("TTT"), 'F'));
        assert_eq!(entries[63], (codon("GGG"), 'G'));
        assert_eq!(entries.iter().filter(|(_, aa)| *aa == STOP_SYMBOL).count(), 3);
        for (c, aa) in entries {
            assert_eq!(table.translate_codon(c), aa);
        }
    }

    #[test]
    fn test_codon_parse_and_display() {
        assert_eq!(codon("ACG").to_string(), "ACG");
        assert!(Codon::parse("AC").is_none());
        assert!(Codon::parse("ACGT").is_none());
    }
}
