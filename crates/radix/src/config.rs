//! Configuration for hosts that keep the encoder alphabet in their
//! settings.
//!
//! The library never reads files or the environment itself. The host
//! builds a [`Config`] from whatever sources it uses and hands it over,
//! and the settings are read from the `encoder` table:
//!
//! ```toml
//! [encoder]
//! # Either one of 2, 8, 10 or 16, or a string of symbols.
//! alphabet = "0123456789abcdefghijklmnopqrstuvwxyz"
//! ```
use config::Config;
use config::ConfigError;
use serde::Deserialize;

use crate::encoder::BaseSelector;
use crate::encoder::Encoder;
use crate::error::Error;

/// Settings used to build an [`Encoder`].
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EncoderSettings {
    /// The alphabet of the encoder. Defaults to the decimal digits.
    #[serde(default = "default_alphabet")]
    pub alphabet: BaseSelector,
}

fn default_alphabet() -> BaseSelector {
    BaseSelector::Canonical(10)
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self { alphabet: default_alphabet() }
    }
}

impl EncoderSettings {
    /// The table holding these settings.
    pub const KEY: &'static str = "encoder";

    /// Read and validate the settings from the given config. A missing
    /// `encoder` table yields the defaults.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let settings = match cfg.get::<Self>(Self::KEY) {
            Ok(settings) => settings,
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(error) => return Err(error),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        self.alphabet
            .clone()
            .resolve()
            .map(|_| ())
            .map_err(|err| ConfigError::Message(format!("{}.alphabet: {err}", Self::KEY)))
    }
}

impl TryFrom<&EncoderSettings> for Encoder {
    type Error = Error;

    fn try_from(settings: &EncoderSettings) -> Result<Self, Self::Error> {
        Encoder::with_alphabet(settings.alphabet.clone())
    }
}
