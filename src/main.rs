use anyhow::{Context, Result};
use centraldogma::{polynomial, DnaSequence, Polynomial, ProteinSequence, RnaSequence};

fn sequences() -> Result<()> {
    let mut dna = DnaSequence::new("DNA_Seq1", "ATCGGCTA");
    println!("DNA Sequence: \n{dna}");
    println!("DNA Length: {}", dna.len());
    println!("DNA Valid: {}", dna.is_valid());

    dna.mutate(2, 'A').context("DNA mutation")?;
    println!("\nDNA Sequence after mutation: \n{dna}");

    match dna.find_motif("GCTA") {
        Some(pos) => println!("\nMotif 'GCTA' found at position: {pos}"),
        None => println!("\nMotif 'GCTA' not found"),
    }
    println!("\nComplementary DNA sequence: {}", dna.complement());

    let rna = dna.transcribe();
    println!("\nTranscription to RNA: \n{rna}");
    println!("RNA Valid: {}", rna.is_valid());

    let mut rna2 = RnaSequence::new("RNA_Seq1", "AUGCGAACGUGA");
    println!("\nRNA Sequence: \n{rna2}");
    rna2.mutate(4, 'G').context("RNA mutation")?;
    println!("\nRNA Sequence after mutation: \n{rna2}");
    println!("\nComplementary RNA sequence: {}", rna2.complement());

    let protein = rna2.translate();
    println!("\nTranslation to Protein: \n{protein}");
    println!("Protein Valid: {}", protein.is_valid());

    let mut protein2 = ProteinSequence::new("Protein_Seq1", "MFVAG");
    println!("\nProtein Sequence: \n{protein2}");
    protein2.mutate(2, 'L').context("protein mutation")?;
    println!("\nProtein Sequence after mutation: \n{protein2}");
    match protein2.find_motif("AG") {
        Some(pos) => println!("\nMotif 'AG' found at position: {pos}"),
        None => println!("\nMotif 'AG' not found"),
    }
    Ok(())
}

fn polynomials() {
    let w1 = polynomial![1.0, 2.0];
    let w2 = polynomial![3.0, 0.0, 4.0];
    println!("W1: {w1}");
    println!("W2: {w2}");
    println!("Degree of W1: {}", w1.degree());
    println!("W1(2.0) = {}", w1.evaluate(2.0));
    println!("W1 + W2 = {}", &w1 + &w2);
    println!("W2 - W1 = {}", &w2 - &w1);
    println!("W1 * W2 = {}", &w1 * &w2);

    let mut w3 = polynomial![1.0, 1.0];
    println!("W3 before: {w3}");
    w3 += &w1;
    println!("W3 after += W1: {w3}");

    let mut w4 = polynomial![5.0, 2.0, 1.0];
    println!("W4 before: {w4}");
    w4 -= &w1;
    println!("W4 after -= W1: {w4}");

    let mut w5 = polynomial![1.0, 0.0, 1.0];
    println!("W5 before: {w5}");
    w5 *= &w1;
    println!("W5 after *= W1: {w5}");

    println!("Zero polynomial: {}", Polynomial::zero());
    println!("Trailing zeros: {}", polynomial![1.0, 2.0, 0.0, 0.0]);
}

fn main() -> Result<()> {
    sequences()?;
    println!();
    polynomials();
    Ok(())
}
