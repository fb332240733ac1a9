use anyhow::Result;
use centraldogma::{polynomial, Polynomial};

mod common;
use common::{assert_close, assert_coefficients};

#[test]
fn construction_from_vec_and_macro() {
    let from_vec = Polynomial::new(vec![1.0, 2.0, 3.0]);
    let from_macro = polynomial![1.0, 2.0, 3.0];
    let from_slice = Polynomial::from(&[1.0, 2.0, 3.0][..]);
    assert_coefficients(from_vec.coefficients(), &[1.0, 2.0, 3.0]);
    assert_eq!(from_vec, from_macro);
    assert_eq!(from_vec, from_slice);
    assert_eq!(polynomial![1, 2, 3], from_vec);
}

#[test]
fn trailing_zeros_are_removed() {
    assert_coefficients(polynomial![1.0, 2.0, 0.0, 0.0].coefficients(), &[1.0, 2.0]);
    assert_coefficients(polynomial![0.0].coefficients(), &[0.0]);
    assert_coefficients(polynomial![0.0, 0.0, 0.0].coefficients(), &[0.0]);
    assert_coefficients(Polynomial::new(vec![]).coefficients(), &[0.0]);
    // inner zeros stay
    assert_coefficients(polynomial![0.0, 0.0, 7.0].coefficients(), &[0.0, 0.0, 7.0]);
}

#[test]
fn degree() {
    assert_eq!(polynomial![1.0, 2.0, 3.0].degree(), 2);
    assert_eq!(polynomial![5.0].degree(), 0);
    assert_eq!(polynomial![0.0, 0.0, 7.0, 0.0].degree(), 2);
    assert_eq!(Polynomial::zero().degree(), 0);
}

#[test]
fn evaluate() {
    let w = polynomial![2.0, -3.0, 1.0];
    assert_close(w.evaluate(0.0), 2.0);
    assert_close(w.evaluate(1.0), 0.0);
    assert_close(w.evaluate(2.0), 0.0);
    assert_close(w.evaluate(3.0), 2.0);
    assert_close(w.evaluate(-1.0), 6.0);
    assert_close(polynomial![1.0, 2.0].evaluate(2.0), 5.0);
}

#[test]
fn addition() {
    let sum = polynomial![1.0, 2.0] + polynomial![3.0, 0.0, 4.0];
    assert_coefficients(sum.coefficients(), &[4.0, 2.0, 4.0]);
}

#[test]
fn subtraction() {
    let w1 = polynomial![1.0, 2.0];
    let w2 = polynomial![3.0, 0.0, 4.0];
    assert_coefficients((&w2 - &w1).coefficients(), &[2.0, -2.0, 4.0]);
    assert_coefficients((&w1 - &w2).coefficients(), &[-2.0, 2.0, -4.0]);
    assert_eq!(&w1 - &w1, Polynomial::zero());
}

#[test]
fn multiplication_is_a_convolution() {
    let w1 = polynomial![1.0, 2.0];
    let w2 = polynomial![3.0, 0.0, 4.0];
    let product = &w1 * &w2;
    assert_eq!(
        product.coefficients().len(),
        w1.coefficients().len() + w2.coefficients().len() - 1
    );
    assert_coefficients(product.coefficients(), &[3.0, 6.0, 4.0, 8.0]);
    assert_eq!(&w1 * &Polynomial::zero(), Polynomial::zero());
}

#[test]
fn operands_are_not_consumed_by_reference_ops() {
    let w1 = polynomial![1.0, 1.0];
    let w2 = polynomial![2.0, 3.0];
    let _ = &w1 + &w2;
    let _ = &w1 * &w2;
    assert_eq!(w1, polynomial![1.0, 1.0]);
    assert_eq!(w2, polynomial![2.0, 3.0]);
}

#[test]
fn compound_assignment() {
    let mut w = polynomial![1.0, 2.0];
    w += polynomial![3.0, 4.0];
    assert_coefficients(w.coefficients(), &[4.0, 6.0]);

    let mut w = polynomial![5.0, 3.0];
    w -= &polynomial![2.0, 1.0];
    assert_coefficients(w.coefficients(), &[3.0, 2.0]);

    let mut w = polynomial![1.0, 1.0];
    w *= polynomial![2.0, 3.0];
    assert_coefficients(w.coefficients(), &[2.0, 5.0, 3.0]);

    let mut w = polynomial![1.0, 0.0, 1.0];
    w -= polynomial![1.0, 0.0, 1.0];
    assert_eq!(w, Polynomial::zero());
}

#[test]
fn equality_is_structural() {
    let w1 = polynomial![1.0, 2.0, 3.0];
    assert_eq!(w1, polynomial![1.0, 2.0, 3.0]);
    assert_eq!(w1, polynomial![1.0, 2.0, 3.0, 0.0]);
    assert_ne!(w1, polynomial![1.0, 2.0, 0.0]);
    assert_ne!(w1, polynomial![0.0, 2.0, 3.0]);
}

#[test]
fn results_are_normalized() {
    let sum = polynomial![1.0, 0.0, 1.0] + polynomial![0.0, 0.0, -1.0];
    assert_coefficients(sum.coefficients(), &[1.0]);
    assert_eq!(sum.degree(), 0);
}

#[test]
fn display() {
    assert_eq!(Polynomial::zero().to_string(), "W(x) = 0");
    assert_eq!(polynomial![1.0, 2.0].to_string(), "W(x) = 2x + 1.0");
    assert_eq!(polynomial![3.0, 0.0, 4.0].to_string(), "W(x) = 4x^2 + 3.0");
    assert_eq!(polynomial![0.0, 1.0].to_string(), "W(x) = x");
    assert_eq!(polynomial![0.0, -1.0, 0.0, 1.0].to_string(), "W(x) = x^3 - x");
    assert_eq!(polynomial![-1.5, 0.0, -2.0].to_string(), "W(x) = -2x^2 - 1.5");
    assert_eq!(polynomial![1.0, 2.5].to_string(), "W(x) = 2.5x + 1.0");
    assert_eq!(polynomial![-1.0].to_string(), "W(x) = -1.0");
}

#[test]
fn display_of_large_and_tiny_coefficients() {
    assert_eq!(polynomial![1e16].to_string(), "W(x) = 1.0E16");
    assert_eq!(polynomial![0.0001, 1.0].to_string(), "W(x) = x + 1.0E-4");
    assert_eq!(
        polynomial![0.0, 3_000_000_000.0].to_string(),
        "W(x) = 3.0E9x"
    );
    assert_eq!(
        polynomial![0.0, 0.0, 2_000_000_000.0].to_string(),
        "W(x) = 2000000000x^2"
    );
}

#[test]
fn chained_operations() {
    let w1 = polynomial![1.0, 1.0];
    let w2 = polynomial![1.0, 0.0, 1.0];
    let w3 = polynomial![2.0, 2.0];
    let result = &(&w1 + &w2) - &w3;
    assert_coefficients(result.coefficients(), &[0.0, -1.0, 1.0]);
    assert_eq!(result.to_string(), "W(x) = x^2 - x");
}

#[test]
fn json_goes_through_normalization() -> Result<()> {
    let w = polynomial![1.0, 2.0];
    assert_eq!(serde_json::to_string(&w)?, "[1.0,2.0]");
    let parsed: Polynomial = serde_json::from_str("[1.0, 2.0, 0.0]")?;
    assert_eq!(parsed, w);
    let empty: Polynomial = serde_json::from_str("[]")?;
    assert_eq!(empty, Polynomial::zero());
    Ok(())
}
