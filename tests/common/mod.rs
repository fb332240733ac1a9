use centraldogma::{DnaSequence, ProteinSequence, RnaSequence};

#[allow(dead_code)]
pub const DELTA: f64 = 1e-10;

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < DELTA,
        "expected {expected}, got {actual}"
    );
}

#[allow(dead_code)]
pub fn assert_coefficients(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} != {expected:?}");
    for (&a, &e) in actual.iter().zip(expected) {
        assert_close(a, e);
    }
}

#[allow(dead_code)]
pub fn simple_dna() -> DnaSequence {
    DnaSequence::new("DNA_Seq1", "ATCGGCTA")
}

#[allow(dead_code)]
pub fn simple_rna() -> RnaSequence {
    RnaSequence::new("RNA_Seq1", "AUGCGAACGUGA")
}

#[allow(dead_code)]
pub fn simple_protein() -> ProteinSequence {
    ProteinSequence::new("Protein_Seq1", "MFVAG")
}
