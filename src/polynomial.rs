//! Dense polynomials of one real variable
//!
//! Coefficients are stored from the constant term upward and trailing zeros
//! are removed at construction, so two polynomials are equal exactly when
//! their coefficient vectors are.
//!```
//! use centraldogma::polynomial;
//! let p = polynomial![1.0, 2.0];      // 2x + 1
//! let q = polynomial![3.0, 0.0, 4.0]; // 4x^2 + 3
//! assert_eq!((&p * &q).coefficients(), &[3.0, 6.0, 4.0, 8.0]);
//! assert_eq!(p.evaluate(2.0), 5.0);
//! assert_eq!(q.to_string(), "W(x) = 4x^2 + 3.0");
//!```
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

/// Build a [`Polynomial`] from its coefficients, constant term first.
#[macro_export]
macro_rules! polynomial {
    ($($coefficient:expr),* $(,)?) => {
        $crate::polynomial::Polynomial::new(vec![$(f64::from($coefficient)),*])
    };
}

impl Polynomial {
    /// `coefficients[i]` is the coefficient of x^i. Trailing zeros are
    /// dropped, the zero polynomial is stored as `[0.0]`.
    pub fn new(mut coefficients: Vec<f64>) -> Polynomial {
        while coefficients.len() > 1 && coefficients.last() == Some(&0.0) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        Polynomial { coefficients }
    }

    pub fn zero() -> Polynomial {
        Polynomial::new(vec![0.0])
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0.0)
    }

    /// Value of the polynomial at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum()
    }

    fn combine(&self, other: &Polynomial, op: impl Fn(f64, f64) -> f64) -> Polynomial {
        Polynomial::new(
            self.coefficients
                .iter()
                .zip_longest(other.coefficients.iter())
                .map(|pair| match pair {
                    EitherOrBoth::Both(&a, &b) => op(a, b),
                    EitherOrBoth::Left(&a) => op(a, 0.0),
                    EitherOrBoth::Right(&b) => op(0.0, b),
                })
                .collect(),
        )
    }

    fn convolve(&self, other: &Polynomial) -> Polynomial {
        let mut product = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Polynomial::new(product)
    }
}

/// Float form of a coefficient: at least one decimal ("3.0"), and
/// scientific notation ("1.0E16", "2.5E-4") outside of [1e-3, 1e7).
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the ".0" of whole numbers and does not switch to
        // exponents in this range
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

/// Whole numbers that fit in an i32 are written without their fractional
/// part, anything else in float form.
fn format_coefficient(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        format!("{}", value as i32)
    } else {
        format_float(value)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "W(x) = ")?;
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, &coefficient) in self.coefficients.iter().enumerate().rev() {
            if coefficient == 0.0 {
                continue;
            }
            if !first {
                write!(f, "{}", if coefficient > 0.0 { " + " } else { " - " })?;
            } else if coefficient < 0.0 {
                write!(f, "-")?;
            }
            first = false;

            let magnitude = coefficient.abs();
            match power {
                // the constant term keeps its float form ("3.0")
                0 => write!(f, "{}", format_float(magnitude))?,
                1 if magnitude == 1.0 => write!(f, "x")?,
                1 => write!(f, "{}x", format_coefficient(magnitude))?,
                _ if magnitude == 1.0 => write!(f, "x^{power}")?,
                _ => write!(f, "{}x^{power}", format_coefficient(magnitude))?,
            }
        }
        Ok(())
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Polynomial::new(coefficients.to_vec())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, other: Self) -> Polynomial {
        self.combine(other, |a, b| a + b)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, other: Self) -> Polynomial {
        self.combine(other, |a, b| a - b)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, other: Self) -> Polynomial {
        self.convolve(other)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, other: Polynomial) -> Polynomial {
        &self - &other
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, other: Polynomial) -> Polynomial {
        &self * &other
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &Polynomial) {
        *self = &*self + other;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &Polynomial) {
        *self = &*self - other;
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, other: &Polynomial) {
        *self = &*self * other;
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, other: Polynomial) {
        *self += &other;
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, other: Polynomial) {
        *self -= &other;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, other: Polynomial) {
        *self *= &other;
    }
}
