//! Standard genetic code for RNA codons
use phf::phf_map;

/// Symbol the codon table uses for UAA, UAG and UGA.
pub const STOP_SYMBOL: char = '*';

/// Symbol emitted for a triplet that is not a codon of the table.
pub const UNKNOWN_AMINO_ACID: char = '?';

static RNA_TO_AMINO: phf::Map<&'static str, char> = phf_map! {
    // U
    "UUU" => 'F', "UUC" => 'F', "UUA" => 'L', "UUG" => 'L',
    "UCU" => 'S', "UCC" => 'S', "UCA" => 'S', "UCG" => 'S',
    "UAU" => 'Y', "UAC" => 'Y', "UAA" => '*', "UAG" => '*',
    "UGU" => 'C', "UGC" => 'C', "UGA" => '*', "UGG" => 'W',
    // C
    "CUU" => 'L', "CUC" => 'L', "CUA" => 'L', "CUG" => 'L',
    "CCU" => 'P', "CCC" => 'P', "CCA" => 'P', "CCG" => 'P',
    "CAU" => 'H', "CAC" => 'H', "CAA" => 'Q', "CAG" => 'Q',
    "CGU" => 'R', "CGC" => 'R', "CGA" => 'R', "CGG" => 'R',
    // A
    "AUU" => 'I', "AUC" => 'I', "AUA" => 'I', "AUG" => 'M',
    "ACU" => 'T', "ACC" => 'T', "ACA" => 'T', "ACG" => 'T',
    "AAU" => 'N', "AAC" => 'N', "AAA" => 'K', "AAG" => 'K',
    "AGU" => 'S', "AGC" => 'S', "AGA" => 'R', "AGG" => 'R',
    // G
    "GUU" => 'V', "GUC" => 'V', "GUA" => 'V', "GUG" => 'V',
    "GCU" => 'A', "GCC" => 'A', "GCA" => 'A', "GCG" => 'A',
    "GAU" => 'D', "GAC" => 'D', "GAA" => 'E', "GAG" => 'E',
    "GGU" => 'G', "GGC" => 'G', "GGA" => 'G', "GGG" => 'G',
};

/// Look up an RNA codon in the standard genetic code.
/// Returns the amino-acid letter, [`STOP_SYMBOL`] for a stop codon, or
/// `None` if `codon` is not one of the 64 triplets over {A,C,G,U}.
///```
/// use centraldogma::sequence::codon_to_amino_acid;
/// assert_eq!(codon_to_amino_acid("AUG"), Some('M'));
/// assert_eq!(codon_to_amino_acid("UGA"), Some('*'));
/// assert_eq!(codon_to_amino_acid("ATG"), None);
///```
pub fn codon_to_amino_acid(codon: &str) -> Option<char> {
    RNA_TO_AMINO.get(codon).copied()
}

pub fn is_stop_codon(codon: &str) -> bool {
    codon_to_amino_acid(codon) == Some(STOP_SYMBOL)
}
