use std::path::PathBuf;

use strand_core::AnalysisError;
use strand_formats::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unsupported file type {}; expected one of: {}", .0.display(), strand_formats::detect::FASTA_EXTENSIONS.join(", "))]
    UnsupportedExtension(PathBuf),
    #[error("Failed to read file {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No headers selected; pass --header, --match or --all")]
    NoHeadersSelected,
    #[error("No results selected; pass at least one of --percentage, --aa-count, --protein")]
    NoPayloadSelected,
    #[error("Invalid header pattern")]
    InvalidPattern(#[from] regex::Error),
    #[error("Failed to parse file")]
    Parse(#[from] ParseError),
    #[error("Analysis failed")]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn chain(err: &dyn std::error::Error) -> Vec<String> {
        let mut messages = vec![err.to_string()];
        let mut cause = err.source();
        while let Some(e) = cause {
            messages.push(e.to_string());
            cause = e.source();
        }
        messages
    }

    #[test]
    fn test_wrapped_errors_print_once_per_link() {
        let err = CliError::from(ParseError::SequenceWithoutHeader { line: 1 });
        assert_eq!(err.to_string(), "Failed to parse file");
        assert!(err.source().is_some());

        let err = CliError::from(AnalysisError::Record {
            header: ">a".to_string(),
            source: Box::new(AnalysisError::EmptySequence),
        });
        let messages = chain(&err);
        assert_eq!(messages.len(), 3);
        for (i, msg) in messages.iter().enumerate() {
            for later in &messages[i + 1..] {
                assert!(!msg.contains(later.as_str()), "{msg:?} repeats {later:?}");
            }
        }
    }

    #[test]
    fn test_io_error_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::from(ParseError::from(io));
        assert_eq!(chain(&err), vec!["Failed to parse file", "IO error", "gone"]);
    }
}
