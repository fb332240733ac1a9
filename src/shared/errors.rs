/// Errors raised when a sequence rejects an argument
use thiserror::Error;

/// Rejected arguments of [`mutate`](crate::sequence::Sequence::mutate).
/// The symbol is always checked before the position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid argument: '{symbol}' is not a valid {alphabet} symbol")]
    InvalidSymbol { alphabet: &'static str, symbol: char },

    #[error("invalid argument: position {position} is out of range for a sequence of length {length}")]
    InvalidPosition { position: usize, length: usize },
}
