#![warn(clippy::large_types_passed_by_value)]

pub mod polynomial;
pub mod sequence;
pub mod shared;

pub use crate::polynomial::Polynomial;
pub use crate::sequence::{
    Alphabet, DnaSequence, Nucleic, ProteinSequence, RnaSequence, Sequence,
};
pub use crate::shared::{SequenceError, TranslationParameters};
