//! Versioned binary persistence for a flat two-field record.
//!
//! ```
//! use recser::{codec, Record};
//!
//! let record = Record::new(123, "Hello, World");
//! let bytes = codec::encode(&record)?;
//! assert_eq!(codec::decode(&bytes)?, record);
//! # Ok::<(), recser::CodecError>(())
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod io;
mod record;

#[cfg(test)]
mod proptest_tests;

pub use codec::{decode, encode};
pub use error::CodecError;
pub use record::Record;
