//! Nucleic acid and protein sequences, and the transformations between them
pub mod alphabet;
pub mod nucleic;
pub mod sequence;
pub mod utils;

pub use alphabet::{Alphabet, Dna, Nucleic, Protein, Rna};
pub use sequence::{DnaSequence, ProteinSequence, RnaSequence, Sequence};
pub use utils::{codon_to_amino_acid, is_stop_codon, STOP_SYMBOL, UNKNOWN_AMINO_ACID};
