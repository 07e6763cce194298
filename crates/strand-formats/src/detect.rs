use std::path::Path;

/// File extensions accepted as FASTA uploads
pub const FASTA_EXTENSIONS: [&str; 5] = ["fasta", "fna", "ffn", "faa", "frn"];

/// Check the last extension of `path` against the FASTA allow-list (case-insensitive)
pub fn has_fasta_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            FASTA_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Content-based check: first non-blank line is a header
pub fn looks_like_fasta(content: &str) -> bool {
    content.trim_start().starts_with('>')
}
