//! The polynomial expression grammar.
//!
//! ```text
//! Expr        := Sign? Term (Sign Term)*
//! Term        := Coefficient? Var? ('^' Digits)?
//! Coefficient := Digits ('/' Digits)?
//! Sign        := '+' | '-'
//! ```
//!
//! Whitespace is insignificant. A term with a variable but no coefficient
//! implies coefficient 1; consecutive signs collapse by parity; degrees
//! repeated across terms are summed; empty input is the zero polynomial.

use std::collections::BTreeMap;

use num_traits::Zero;

use noether_integers::{Integer, Rational};
use noether_rings::AlgebraError;

/// Parses an expression into summed (degree, coefficient) terms.
///
/// Zero coefficients are kept; the caller drops them after coercion into
/// the target ring.
pub(crate) fn parse_terms(
    input: &str,
    variable: char,
) -> Result<BTreeMap<usize, Rational>, AlgebraError> {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut terms: BTreeMap<usize, Rational> = BTreeMap::new();
    let mut i = 0;
    let mut first_term = true;

    while i < chars.len() {
        // Sign run: "+-" and "-+" collapse by parity.
        let mut negative = false;
        let mut saw_sign = false;
        while i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            if chars[i] == '-' {
                negative = !negative;
            }
            saw_sign = true;
            i += 1;
        }
        if !first_term && !saw_sign {
            return Err(AlgebraError::UnexpectedCharacter(chars[i]));
        }
        first_term = false;

        let mut coefficient = match scan_digits(&chars, &mut i) {
            Some(numerator) => {
                if i < chars.len() && chars[i] == '/' {
                    i += 1;
                    let Some(denominator) = scan_digits(&chars, &mut i) else {
                        return Err(AlgebraError::UnexpectedCharacter('/'));
                    };
                    if denominator.is_zero() {
                        return Err(AlgebraError::DivisionByZero);
                    }
                    Rational::new(numerator, denominator)
                } else {
                    Rational::from_integer(numerator)
                }
            }
            None => Rational::from(1i64),
        };
        if negative {
            coefficient = -coefficient;
        }

        let degree = if i < chars.len() && chars[i] == variable {
            i += 1;
            if i < chars.len() && chars[i] == '^' {
                i += 1;
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == start {
                    return Err(AlgebraError::DanglingExponent);
                }
                scan_degree(&chars[start..i])?
            } else {
                1
            }
        } else {
            0
        };

        let entry = terms.entry(degree).or_insert_with(Rational::zero);
        *entry = entry.clone() + coefficient;
    }

    Ok(terms)
}

/// Scans a run of decimal digits into an `Integer`, or `None` if the
/// cursor is not on a digit.
fn scan_digits(chars: &[char], i: &mut usize) -> Option<Integer> {
    let start = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i == start {
        return None;
    }

    let mut value = Integer::new(0);
    for c in &chars[start..*i] {
        let digit = i64::from(c.to_digit(10).unwrap_or(0));
        value = value * Integer::new(10) + Integer::new(digit);
    }
    Some(value)
}

/// Converts exponent digits into a degree.
fn scan_degree(digits: &[char]) -> Result<usize, AlgebraError> {
    let mut degree: usize = 0;
    for c in digits {
        let d = c.to_digit(10).unwrap_or(0) as usize;
        degree = degree
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(AlgebraError::UnexpectedCharacter(*c))?;
    }
    Ok(degree)
}
