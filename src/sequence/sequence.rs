/// Contains the sequence type shared by DNA, RNA and proteins
use crate::sequence::alphabet::{Alphabet, Dna, Protein, Rna};
use crate::shared::errors::SequenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A labelled sequence over the alphabet `A`.
///
/// The data is not checked when the sequence is created, use
/// [`is_valid`](Sequence::is_valid) to know if every symbol belongs to the
/// alphabet. [`mutate`](Sequence::mutate) on the other hand refuses symbols
/// outside of it. Lengths and positions count characters, not bytes.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Sequence<A> {
    identifier: String,
    #[serde(with = "symbols")]
    pub(crate) seq: Vec<char>,
    #[serde(skip)]
    alphabet: PhantomData<A>,
}

pub type DnaSequence = Sequence<Dna>;
pub type RnaSequence = Sequence<Rna>;
pub type ProteinSequence = Sequence<Protein>;

// The symbols are written out as one string ("ACGT") rather than a list
mod symbols {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(seq: &[char], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&seq.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<char>, D::Error> {
        Ok(String::deserialize(deserializer)?.chars().collect())
    }
}

impl<A: Alphabet> Sequence<A> {
    pub fn new(identifier: impl Into<String>, data: &str) -> Self {
        Self::from_symbols(identifier, data.chars())
    }

    pub fn from_symbols(
        identifier: impl Into<String>,
        symbols: impl IntoIterator<Item = char>,
    ) -> Self {
        Sequence {
            identifier: identifier.into(),
            seq: symbols.into_iter().collect(),
            alphabet: PhantomData,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn symbols(&self) -> &[char] {
        &self.seq
    }

    pub fn get_string(&self) -> String {
        self.seq.iter().collect()
    }

    /// Number of symbols (characters) in the sequence
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// True if every symbol belongs to the alphabet (an empty sequence is valid)
    pub fn is_valid(&self) -> bool {
        self.seq.iter().all(|&x| A::contains(x))
    }

    /// Replace the symbol at `position` by `value`.
    ///
    /// # Errors
    /// [`SequenceError::InvalidSymbol`] if `value` is not part of the alphabet,
    /// then [`SequenceError::InvalidPosition`] if `position` is not in
    /// `0..self.len()`. The sequence is left unchanged on error.
    ///```
    /// use centraldogma::DnaSequence;
    /// let mut dna = DnaSequence::new("seq", "ATCG");
    /// dna.mutate(2, 'A').unwrap();
    /// assert_eq!(dna.get_string(), "ATAG");
    /// assert!(dna.mutate(2, 'U').is_err());
    /// assert!(dna.mutate(4, 'A').is_err());
    ///```
    pub fn mutate(&mut self, position: usize, value: char) -> Result<(), SequenceError> {
        if !A::contains(value) {
            log::debug!(
                "Rejected mutation of {} to '{}': not a {} symbol",
                self.identifier,
                value,
                A::NAME
            );
            return Err(SequenceError::InvalidSymbol {
                alphabet: A::NAME,
                symbol: value,
            });
        }
        match self.seq.get_mut(position) {
            Some(symbol) => {
                *symbol = value;
                Ok(())
            }
            None => {
                log::debug!(
                    "Rejected mutation of {} at position {} (length {})",
                    self.identifier,
                    position,
                    self.seq.len()
                );
                Err(SequenceError::InvalidPosition {
                    position,
                    length: self.seq.len(),
                })
            }
        }
    }

    /// Index of the first occurrence of `motif`, `None` if there is none.
    /// The empty motif is found at position 0.
    pub fn find_motif(&self, motif: &str) -> Option<usize> {
        let motif: Vec<char> = motif.chars().collect();
        if motif.is_empty() {
            return Some(0);
        }
        self.seq.windows(motif.len()).position(|w| w == motif.as_slice())
    }

    /// Number of occurrences of `motif`, overlapping ones included.
    pub fn count_motif(&self, motif: &str) -> usize {
        let motif: Vec<char> = motif.chars().collect();
        if motif.is_empty() {
            return 0;
        }
        self.seq.windows(motif.len()).filter(|w| *w == motif.as_slice()).count()
    }
}

impl<A> fmt::Display for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, ">{}", self.identifier)?;
        self.seq.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
