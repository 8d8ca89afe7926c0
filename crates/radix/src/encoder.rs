//! The encoder owns the current alphabet and exposes the conversions
//! over it.

use serde::Deserialize;

use crate::alphabet::Alphabet;
use crate::codec;
use crate::error::Error;

/// Selects the alphabet for an [`Encoder`].
///
/// When deserialized, an integer maps to [`BaseSelector::Canonical`] and a
/// string maps to [`BaseSelector::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BaseSelector {
    /// One of the canonical bases 2, 8, 10 or 16.
    Canonical(u32),
    /// The symbols of a custom alphabet, ordered from the smallest value to
    /// the largest.
    Custom(String),
    /// An alphabet that has already been validated.
    #[serde(skip)]
    Validated(Alphabet),
}

impl BaseSelector {
    /// Validate the selector and return the alphabet it names.
    pub fn resolve(self) -> Result<Alphabet, Error> {
        match self {
            BaseSelector::Canonical(base) => Alphabet::canonical(base),
            BaseSelector::Custom(symbols) => Alphabet::new(&symbols),
            BaseSelector::Validated(alphabet) => Ok(alphabet),
        }
    }
}

impl From<u32> for BaseSelector {
    fn from(value: u32) -> Self {
        BaseSelector::Canonical(value)
    }
}

impl From<&str> for BaseSelector {
    fn from(value: &str) -> Self {
        BaseSelector::Custom(value.to_string())
    }
}

impl From<String> for BaseSelector {
    fn from(value: String) -> Self {
        BaseSelector::Custom(value)
    }
}

impl From<Alphabet> for BaseSelector {
    fn from(value: Alphabet) -> Self {
        BaseSelector::Validated(value)
    }
}

/// Converts integers to and from strings over its current alphabet.
///
/// A new encoder uses the decimal digits `0`-`9`. Every encoder owns its
/// alphabet, so changing one never affects another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    alphabet: Alphabet,
}

impl Encoder {
    /// Create an encoder with the decimal alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given alphabet.
    pub fn with_alphabet(base: impl Into<BaseSelector>) -> Result<Self, Error> {
        let alphabet = base.into().resolve()?;
        Ok(Self { alphabet })
    }

    /// Replace the alphabet used by [`Encoder::encode`] and
    /// [`Encoder::decode`].
    ///
    /// The argument is either one of the integers 2, 8, 10 or 16, which
    /// select `01`, `01234567`, `0123456789` and `0123456789abcdef`, or a
    /// string with the symbols of a custom alphabet ordered from the
    /// smallest value to the largest.
    ///
    /// If validation fails the current alphabet is left untouched.
    #[tracing::instrument(skip_all)]
    pub fn set_alphabet(&mut self, base: impl Into<BaseSelector>) -> Result<(), Error> {
        match base.into().resolve() {
            Ok(alphabet) => {
                tracing::debug!(base = alphabet.len(), %alphabet, "alphabet updated");
                self.alphabet = alphabet;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, current = %self.alphabet, "rejected alphabet");
                Err(error)
            }
        }
    }

    /// Encode the given integer over the current alphabet.
    pub fn encode(&self, num: u64) -> String {
        codec::encode(num, &self.alphabet)
    }

    /// Encode the given integer, appending the symbols to `out`.
    pub fn encode_into(&self, num: u64, out: &mut String) {
        codec::encode_into(num, &self.alphabet, out)
    }

    /// Decode the given string over the current alphabet.
    ///
    /// It is up to the caller to make sure that the alphabet is the one
    /// that was used to encode the string. The empty string decodes to
    /// zero.
    pub fn decode(&self, s: &str) -> Result<u64, Error> {
        codec::try_decode(s, &self.alphabet).inspect_err(|error| {
            tracing::debug!(%error, "could not decode input");
        })
    }

    /// The current alphabet as a string, ordered from the smallest value to
    /// the largest.
    pub fn alphabet(&self) -> String {
        self.alphabet.to_string()
    }

    /// The base of the current alphabet.
    pub fn base(&self) -> usize {
        self.alphabet.len()
    }
}

impl TryFrom<BaseSelector> for Encoder {
    type Error = Error;

    fn try_from(value: BaseSelector) -> Result<Self, Self::Error> {
        Self::with_alphabet(value)
    }
}
