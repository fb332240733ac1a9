//! Fixed alphabets of the three sequence kinds
use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};

static DNA_LETTERS: phf::Set<char> = phf_set! { 'A', 'C', 'G', 'T' };

static RNA_LETTERS: phf::Set<char> = phf_set! { 'A', 'C', 'G', 'U' };

// The 20 standard amino-acids, no ambiguity codes and no stop symbol
static AMINO_ACID_LETTERS: phf::Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
};

static DNA_COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T', 'T' => 'A', 'G' => 'C', 'C' => 'G',
};

static RNA_COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'U', 'U' => 'A', 'G' => 'C', 'C' => 'G',
};

/// The set of symbols a sequence kind accepts.
pub trait Alphabet {
    /// Human readable name, used in error messages.
    const NAME: &'static str;

    fn letters() -> &'static phf::Set<char>;

    fn contains(symbol: char) -> bool {
        Self::letters().contains(&symbol)
    }
}

/// Alphabets with a base-pairing rule (DNA and RNA).
pub trait Nucleic: Alphabet {
    fn complement_map() -> &'static phf::Map<char, char>;

    /// Complement of a single symbol, symbols without a partner are
    /// returned unchanged.
    fn complement(symbol: char) -> char {
        Self::complement_map()
            .get(&symbol)
            .copied()
            .unwrap_or(symbol)
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dna;

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rna;

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Protein;

impl Alphabet for Dna {
    const NAME: &'static str = "DNA";
    fn letters() -> &'static phf::Set<char> {
        &DNA_LETTERS
    }
}

impl Alphabet for Rna {
    const NAME: &'static str = "RNA";
    fn letters() -> &'static phf::Set<char> {
        &RNA_LETTERS
    }
}

impl Alphabet for Protein {
    const NAME: &'static str = "amino-acid";
    fn letters() -> &'static phf::Set<char> {
        &AMINO_ACID_LETTERS
    }
}

impl Nucleic for Dna {
    fn complement_map() -> &'static phf::Map<char, char> {
        &DNA_COMPLEMENT
    }
}

impl Nucleic for Rna {
    fn complement_map() -> &'static phf::Map<char, char> {
        &RNA_COMPLEMENT
    }
}
