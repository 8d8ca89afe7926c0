//! # Alphabets
//!
//! An alphabet is an ordered sequence of distinct symbols. The position of
//! a symbol in the sequence is its numeric value, so the length of the
//! alphabet is the base used when encoding and decoding.
//!
//! Symbols are Unicode scalar values (`char`), so a supplementary-plane
//! code point counts as a single symbol.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// The minimum number of symbols in a valid alphabet.
pub const MIN_SYMBOLS: usize = 2;

/// Canonical alphabet selected by base 2.
pub const BINARY: &str = "01";
/// Canonical alphabet selected by base 8.
pub const OCTAL: &str = "01234567";
/// Canonical alphabet selected by base 10. This is also the default.
pub const DECIMAL: &str = "0123456789";
/// Canonical alphabet selected by base 16. Letters are lowercase.
pub const HEXADECIMAL: &str = "0123456789abcdef";

/// A validated alphabet.
///
/// Construction always checks that the symbols are unique and that there
/// are at least [`MIN_SYMBOLS`] of them, so every value of this type can be
/// used as-is by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u64>,
}

#[allow(clippy::len_without_is_empty)]
impl Alphabet {
    /// Validate the given symbols and build an alphabet from them.
    ///
    /// Uniqueness is checked before the minimum size, so `"aa"` reports a
    /// duplicate while `"a"` reports that the alphabet is too short.
    pub fn new(symbols: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut index = HashMap::with_capacity(symbols.len());

        for (value, &symbol) in (0u64..).zip(symbols.iter()) {
            if index.insert(symbol, value).is_some() {
                return Err(Error::DuplicateSymbol(symbol));
            }
        }

        if symbols.len() < MIN_SYMBOLS {
            return Err(Error::AlphabetTooShort(symbols.len()));
        }

        Ok(Self { symbols, index })
    }

    /// Return the canonical alphabet for base 2, 8, 10 or 16.
    pub fn canonical(base: u32) -> Result<Self, Error> {
        let symbols = match base {
            2 => BINARY,
            8 => OCTAL,
            10 => DECIMAL,
            16 => HEXADECIMAL,
            _ => return Err(Error::UnsupportedBase(base)),
        };

        Self::new(symbols)
    }

    /// The base of this alphabet, which is the number of symbols in it.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The base as a `u64`, for use in arithmetic.
    pub(crate) fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// The symbols, ordered from the smallest value to the largest.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbol with the given value, if the value is below the base.
    pub fn symbol(&self, value: u64) -> Option<char> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| self.symbols.get(idx))
            .copied()
    }

    /// The value of the given symbol, if it belongs to this alphabet.
    pub fn value_of(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).copied()
    }

    /// The symbol with value zero.
    pub fn zero(&self) -> char {
        // Construction guarantees at least MIN_SYMBOLS symbols.
        self.symbols[0]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DECIMAL.chars().collect(),
            index: DECIMAL.chars().zip(0u64..).collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(value: Alphabet) -> Self {
        value.to_string()
    }
}
