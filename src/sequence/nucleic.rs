//! DNA -> RNA -> protein transformations
use crate::sequence::alphabet::Nucleic;
use crate::sequence::sequence::{DnaSequence, ProteinSequence, RnaSequence, Sequence};
use crate::sequence::utils::{codon_to_amino_acid, STOP_SYMBOL};
use crate::shared::parameters::TranslationParameters;

impl<A: Nucleic> Sequence<A> {
    /// Base-paired strand, symbol by symbol. Symbols outside of the
    /// alphabet are copied unchanged.
    pub fn complement(&self) -> String {
        self.seq.iter().map(|&x| A::complement(x)).collect()
    }

    pub fn reverse_complement(&self) -> String {
        self.seq.iter().rev().map(|&x| A::complement(x)).collect()
    }
}

impl DnaSequence {
    /// Transcription: every T becomes U.
    ///```
    /// use centraldogma::DnaSequence;
    /// let dna = DnaSequence::new("DNA_Seq1", "ATCGGCTA");
    /// assert_eq!(dna.transcribe().get_string(), "AUCGGCUA");
    ///```
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence::from_symbols(
            self.identifier(),
            self.seq.iter().map(|&x| if x == 'T' { 'U' } else { x }),
        )
    }

    /// Transcribe then translate with the default parameters.
    pub fn translate(&self) -> ProteinSequence {
        self.transcribe().translate()
    }
}

impl RnaSequence {
    /// Translation with the standard genetic code.
    /// Stops at the first stop codon (not included), a trailing
    /// incomplete codon is ignored and unknown triplets become '?'.
    ///```
    /// use centraldogma::RnaSequence;
    /// let rna = RnaSequence::new("RNA_Seq1", "AUGGCAUAAGCA");
    /// assert_eq!(rna.translate().get_string(), "MA");
    ///```
    pub fn translate(&self) -> ProteinSequence {
        self.translate_with(&TranslationParameters::default())
    }

    /// Alias of [`translate`](RnaSequence::translate).
    pub fn transcribe(&self) -> ProteinSequence {
        self.translate()
    }

    pub fn translate_with(&self, params: &TranslationParameters) -> ProteinSequence {
        let mut amino_acids = String::with_capacity(self.len() / 3);

        // chunks_exact leaves the incomplete trailing codon aside
        for (index, codon) in self.seq.chunks_exact(3).enumerate() {
            let codon: String = codon.iter().collect();
            // only a real stop codon ends translation, whatever unknown_symbol is
            match codon_to_amino_acid(&codon) {
                Some(STOP_SYMBOL) if params.stop_at_stop_codon => {
                    log::debug!(
                        "{}: translation stopped at codon {}",
                        self.identifier(),
                        index
                    );
                    break;
                }
                Some(aa) => amino_acids.push(aa),
                None => {
                    log::debug!(
                        "{}: codon {} ({}) is not in the genetic code",
                        self.identifier(),
                        index,
                        codon
                    );
                    amino_acids.push(params.unknown_symbol);
                }
            }
        }

        ProteinSequence::new(self.identifier(), &amino_acids)
    }
}
