use std::collections::HashMap;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

const BASE_TABLE: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Standalone digits in their own right, and the first half of every
/// two-character digit.
const PREFIX_MARKERS: [char; 15] = [
    '@', '#', '$', '%', '&', '*', '+', '=', '?', '^', '_', '~', '|', ':', ';',
];

/// 62 base characters, 15 markers, 15 * 62 marker combinations
pub const RADIX: usize = 62 + 15 + 15 * 62;

/// Longest string `decode` will look at, counted in characters
pub const MAX_ENCODED_LEN: usize = 1050;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("cannot decode an empty string")]
    EmptyInput,

    #[error("encoded string is {length} characters long, the limit is {max}")]
    TooLong { length: usize, max: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Positional numeral system with radix 1007.
///
/// Digits are either a single character (`0-9A-Za-z` or one of the prefix
/// markers) or a prefix marker followed by a base character. The table is
/// built once and never changes, so a converter can be shared freely between
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBaseConverter {
    digits: Vec<String>,
    index: HashMap<String, usize>,
}

impl Default for CustomBaseConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomBaseConverter {
    pub fn new() -> Self {
        let mut digits = Vec::with_capacity(RADIX);
        digits.extend(BASE_TABLE.chars().map(String::from));
        digits.extend(PREFIX_MARKERS.iter().map(|marker| marker.to_string()));
        for marker in PREFIX_MARKERS {
            digits.extend(BASE_TABLE.chars().map(|c| format!("{marker}{c}")));
        }

        let index = digits
            .iter()
            .enumerate()
            .map(|(value, digit)| (digit.clone(), value))
            .collect();

        CustomBaseConverter { digits, index }
    }

    pub fn radix(&self) -> usize {
        self.digits().len()
    }

    /// All digit symbols, ordered by value.
    pub fn digits(&self) -> &[String] {
        &self.digits
    }

    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    pub fn encode(&self, num: &BigInt) -> String {
        if num.is_zero() {
            return "0".to_owned();
        }

        let radix = BigUint::from(RADIX);
        let mut magnitude = num.magnitude().clone();
        let mut symbols = Vec::new();
        while !magnitude.is_zero() {
            let (quotient, remainder) = magnitude.div_rem(&radix);
            let value = remainder.to_usize().unwrap_or_default();
            symbols.push(self.digits[value].as_str());
            magnitude = quotient;
        }

        let mut encoded = String::with_capacity(symbols.len() * 2 + 1);
        if num.sign() == Sign::Minus {
            encoded.push('-');
        }
        encoded.extend(symbols.into_iter().rev());
        encoded
    }

    pub fn decode(&self, encoded: &str) -> Result<BigInt, DecodeError> {
        if encoded.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let length = encoded.chars().count();
        if length > MAX_ENCODED_LEN {
            return Err(DecodeError::TooLong {
                length,
                max: MAX_ENCODED_LEN,
            });
        }

        if encoded == "0" {
            return Ok(BigInt::zero());
        }

        let chars: Vec<char> = encoded.chars().collect();
        let (sign, start) = match chars[0] {
            '-' => (Sign::Minus, 1),
            _ => (Sign::Plus, 0),
        };
        if start == chars.len() {
            return Err(DecodeError::EmptyInput);
        }

        let radix = BigUint::from(RADIX);
        let mut num = BigUint::zero();
        let mut token = String::with_capacity(8);
        let mut i = start;
        while i < chars.len() {
            let (value, width) = self.digit_at(&chars[i..], &mut token).ok_or(
                DecodeError::InvalidCharacter {
                    character: chars[i],
                    position: i,
                },
            )?;
            num *= &radix;
            num += BigUint::from(value);
            i += width;
        }

        Ok(BigInt::from_biguint(sign, num))
    }

    /// Reads one digit from the front of `rest`, returning its value and how
    /// many characters it spans. A marker followed by a base character always
    /// wins over the marker on its own.
    fn digit_at(&self, rest: &[char], token: &mut String) -> Option<(usize, usize)> {
        if let [first, second, ..] = rest {
            if PREFIX_MARKERS.contains(first) {
                token.clear();
                token.push(*first);
                token.push(*second);
                if let Some(value) = self.index_of(token) {
                    return Some((value, 2));
                }
            }
        }

        let first = rest.first()?;
        token.clear();
        token.push(*first);
        self.index_of(token).map(|value| (value, 1))
    }
}
