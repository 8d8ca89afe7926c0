//! Top-level error type for the radix library
//!

/// Errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Only a handful of integers name a canonical alphabet. Anything else
    /// must be given as an explicit sequence of symbols.
    #[error("custom bases must be given as a string of symbols; {0} is not one of 2, 8, 10 or 16")]
    UnsupportedBase(u32),

    /// The same symbol appeared more than once in a custom alphabet.
    #[error("all symbols in the alphabet must be unique; {0:?} is repeated")]
    DuplicateSymbol(char),

    /// A custom alphabet had fewer than two symbols.
    #[error("the alphabet must have at least {min} distinct symbols, got {0}", min = crate::alphabet::MIN_SYMBOLS)]
    AlphabetTooShort(usize),

    /// The input to decode contained a symbol that is not part of the
    /// current alphabet.
    #[error("illegal symbol {symbol:?} at position {position}; valid symbols are: {alphabet}")]
    InvalidSymbol {
        /// The first offending symbol, scanning left to right.
        symbol: char,
        /// Zero-based position of the symbol, counted in symbols.
        position: usize,
        /// The alphabet that was in effect.
        alphabet: String,
    },

    /// The decoded value does not fit in a u64.
    #[error("the decoded value exceeds {}", u64::MAX)]
    Overflow,
}
