//! Verhoeff check-digit validation
//!
//! The Verhoeff scheme detects every single-digit substitution and every
//! adjacent transposition. It is pure arithmetic over three small tables.

use crate::core::models::Identifier;

/// Multiplication table of the dihedral group D5
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation table
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse of each element of D5
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Run the Verhoeff accumulator over `digits`, starting at permutation `offset`
fn accumulate(digits: &[u8], offset: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0, |c, (i, &v)| D[c as usize][P[(i + offset) % 8][v as usize] as usize])
}

/// Validate a digit sequence whose last digit is a Verhoeff check digit
///
/// Each element must be in `0..=9`.
#[must_use]
pub fn validate(digits: &[u8]) -> bool {
    debug_assert!(digits.iter().all(|&d| d < 10));
    accumulate(digits, 0) == 0
}

/// Compute the Verhoeff check digit to append to `payload`
#[must_use]
pub fn check_digit(payload: &[u8]) -> u8 {
    INV[accumulate(payload, 1) as usize]
}

/// Validate the check digit of a parsed identifier
#[must_use]
pub fn validate_identifier(id: &Identifier) -> bool {
    validate(&id.digits())
}
