use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

use pr_structure::Sequence;
use pr_structure::StructureError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no sequence found on input")]
    EmptyInput,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Read all of `path`, or stdin if there is none.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// The first whitespace-delimited token is the sequence.
pub fn parse_sequence(input: &str) -> Result<Sequence, CliError> {
    let token = input.split_whitespace().next().ok_or(CliError::EmptyInput)?;
    Ok(Sequence::try_from(token)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token() {
        let seq = parse_sequence("  AUGC\nGGGG\n").unwrap();
        assert_eq!(seq.as_bytes(), b"AUGC");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_sequence(""), Err(CliError::EmptyInput)));
        assert!(matches!(parse_sequence(" \n\t"), Err(CliError::EmptyInput)));
    }

    #[test]
    fn test_too_long() {
        let long = "A".repeat(70_000);
        assert!(matches!(
            parse_sequence(&long),
            Err(CliError::Structure(StructureError::SequenceTooLong { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let missing = Path::new("/nonexistent/perfectrna/input.txt");
        assert!(matches!(read_input(Some(missing)), Err(CliError::Io(_))));
    }
}

