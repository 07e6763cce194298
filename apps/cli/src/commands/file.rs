use std::path::Path;

use log::warn;
use strand_formats::{detect, fasta, ParseError};

use crate::dto::HeaderDto;
use crate::CliError;

/// Check the extension allow-list and read the whole file
pub fn open_fasta_file(path: &Path) -> Result<String, CliError> {
    if !detect::has_fasta_extension(path) {
        return Err(CliError::UnsupportedExtension(path.to_path_buf()));
    }

    let content = fasta::read_fasta_file(path).map_err(|e| match e {
        ParseError::Io(source) => CliError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
        other => CliError::Parse(other),
    })?;

    if !detect::looks_like_fasta(&content) {
        warn!("{} does not start with a FASTA header", path.display());
    }
    Ok(content)
}

/// Headers in file order with positional ids `header1`, `header2`, ...
pub fn header_list(content: &str) -> Vec<HeaderDto> {
    fasta::list_headers(content)
        .into_iter()
        .enumerate()
        .map(|(i, header)| HeaderDto {
            id: format!("header{}", i + 1),
            header,
        })
        .collect()
}

pub fn list_headers(path: &Path) -> Result<Vec<HeaderDto>, CliError> {
    Ok(header_list(&open_fasta_file(path)?))
}
