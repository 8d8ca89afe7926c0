#![deny(missing_docs)]

//! # Radix
//!
//! Converts unsigned integers to and from positional-notation strings over
//! a caller-chosen alphabet.
//!
//! ```
//! use radix::Encoder;
//!
//! let mut encoder = Encoder::new();
//! assert_eq!(encoder.encode(152), "152");
//!
//! encoder.set_alphabet("ab").unwrap();
//! assert_eq!(encoder.encode(5), "bab");
//! assert_eq!(encoder.decode("bba").unwrap(), 6);
//! ```

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;

pub use alphabet::Alphabet;
pub use encoder::BaseSelector;
pub use encoder::Encoder;
pub use error::Error;
