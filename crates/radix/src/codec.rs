//! # Positional Notation Codec
//!
//! Converts unsigned integers to and from strings over an [`Alphabet`].
//! The value of a string `s₀ s₁ … s_{k-1}` in base `n` is
//! `Σ value(sᵢ) · n^{k-1-i}`, with the most significant symbol first.
//!
//! ## Encoding Format
//!
//! - Zero encodes as the single symbol with value zero.
//! - Any other value encodes as the shortest string without a leading
//!   zero symbol.
//! - Decoding accepts leading zero symbols, and the empty string decodes
//!   to zero.
//!
//! For example, with the alphabet `"ab"` the value 5 (`101` in binary)
//! encodes as `"bab"`.

use crate::alphabet::Alphabet;
use crate::error::Error;

/// Encodes `num` using the given alphabet, appending to the provided buffer.
///
/// ## Parameters
/// * `num` - The integer to encode
/// * `alphabet` - The symbols to encode with
/// * `out` - The buffer to append the encoded symbols to
pub fn encode_into(mut num: u64, alphabet: &Alphabet, out: &mut String) {
    let radix = alphabet.radix();
    let symbols = alphabet.symbols();
    let mut digits = Vec::new();

    // Least significant symbol first. Running the body at least once is
    // what turns zero into the zero symbol.
    loop {
        digits.push(symbols[(num % radix) as usize]);
        num /= radix;

        if num == 0 {
            break;
        }
    }

    out.extend(digits.iter().rev());
}

/// Encodes `num` using the given alphabet.
pub fn encode(num: u64, alphabet: &Alphabet) -> String {
    let mut out = String::new();
    encode_into(num, alphabet, &mut out);
    out
}

/// Decodes a string of symbols from the given alphabet.
///
/// Symbols are scanned left to right and the first one that is not part
/// of the alphabet is reported, even when the digits before it already
/// overflow a u64.
///
/// ## Returns
/// * `Ok(value)` - The decoded integer
/// * `Err(Error::InvalidSymbol)` - If a symbol is not in the alphabet
/// * `Err(Error::Overflow)` - If the value does not fit in a u64
pub fn try_decode(s: &str, alphabet: &Alphabet) -> Result<u64, Error> {
    let radix = alphabet.radix();

    // `None` once the value has overflowed. Later symbols are still checked.
    let value = s
        .chars()
        .enumerate()
        .try_fold(Some(0u64), |acc, (position, symbol)| {
            let value = alphabet
                .value_of(symbol)
                .ok_or_else(|| Error::InvalidSymbol {
                    symbol,
                    position,
                    alphabet: alphabet.to_string(),
                })?;

            Ok::<_, Error>(acc
                .and_then(|acc| acc.checked_mul(radix))
                .and_then(|acc| acc.checked_add(value)))
        })?;

    value.ok_or(Error::Overflow)
}

/// Calculates the number of symbols `num` occupies when encoded with the
/// given alphabet, without performing the encoding.
pub fn calculate_size(mut num: u64, alphabet: &Alphabet) -> usize {
    let radix = alphabet.radix();
    let mut size = 1;
    while num >= radix {
        size += 1;
        num /= radix;
    }
    size
}
