//! Hex Digest Library
//!
//! Proof-of-work header hashing where each of sixteen rounds runs a 512-bit
//! primitive chosen by the data itself.
//!
//! # Overview
//!
//! The chaining rule, the primitive registry and the C bindings live in
//! [`hexhash_core`], re-exported here as [`algorithm`]. This crate adds input
//! parsing shared by the `hexhash` command-line tool and builds the `cdylib`
//! that C/C++ nodes link against.
//!
//! # Example
//!
//! ```rust
//! use hexhash::algorithm::{first_algorithm, Algorithm};
//! use hexhash::input::parse_hex;
//!
//! // Byte 11 of the header is 0xa5: the first round runs Echo
//! let header = parse_hex("0x00000000 00000000 000000a5").unwrap();
//! assert_eq!(first_algorithm(&header).unwrap(), Algorithm::Echo);
//! ```

// Re-export the core algorithm
pub use hexhash_core as algorithm;

pub mod input;

// Convenience re-exports
pub use algorithm::{first_algorithm, hash, Algorithm, HexHash, Registry};
