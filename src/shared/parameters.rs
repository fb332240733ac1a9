//! The structs used for specifying how sequences are transformed
use crate::sequence::UNKNOWN_AMINO_ACID;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranslationParameters {
    // Symbol appended for a triplet that is not a codon
    // (only happens when the RNA contains symbols outside ACGU)
    pub unknown_symbol: char,
    // If true (default) translation ends at the first stop codon and the
    // stop symbol is not emitted. If false, stop codons are emitted as '*'
    // and translation carries on.
    pub stop_at_stop_codon: bool,
}

impl Default for TranslationParameters {
    fn default() -> TranslationParameters {
        TranslationParameters {
            unknown_symbol: UNKNOWN_AMINO_ACID,
            stop_at_stop_codon: true,
        }
    }
}

impl TranslationParameters {
    pub fn new(unknown_symbol: char, stop_at_stop_codon: bool) -> Self {
        Self {
            unknown_symbol,
            stop_at_stop_codon,
        }
    }
}
