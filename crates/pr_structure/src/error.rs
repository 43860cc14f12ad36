
/// Errors raised when building sequence representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The sequence does not fit into `NAIDX` indices.
    #[error("sequence of length {length} exceeds the maximum length {max}")]
    SequenceTooLong { length: usize, max: usize },

    /// A byte is not one of the four bases.
    #[error("'{0}' is not a nucleotide (expected A, C, G or U)")]
    InvalidBase(char),
}

