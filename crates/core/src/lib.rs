//! # Hex Proof-of-Work Digest
//!
//! A header-hashing scheme where the hash primitive used in every round is
//! picked by the data itself rather than fixed in advance.
//!
//! ## Algorithm
//!
//! - 16 named 512-bit primitives (Blake, BMW, Groestl, JH, Keccak, Skein, Luffa,
//!   CubeHash, SHAvite, SIMD, Echo, Hamsi, Fugue, Shabal, Whirlpool, SHA-512)
//! - 16 rounds, always
//! - Round 0 hashes the whole input with the primitive named by the high nibble
//!   of input byte 11
//! - Every later round hashes the previous 64-byte digest with the primitive
//!   named by `digest[0] % 16`
//! - The result is the first 32 bytes of the last round's digest
//!
//! ```text
//! input ──► P[in[11] >> 4] ──► d0 ──► P[d0[0] % 16] ──► d1 ── … ──► d15[..32]
//! ```
//!
//! ## Primitives
//!
//! The sixteen hash functions are not part of this crate's algorithm. They are
//! plugged into a [`Registry`] through the [`Primitive`] capability. Six have
//! RustCrypto implementations built in behind features of the same crate name
//! (`sha3` Keccak-512, `skein`, `groestl`, `shabal`, `whirlpool`, `sha2`
//! SHA-512); any other RustCrypto
//! [`digest::Digest`] with a 64-byte output can be wrapped in a
//! [`DigestPrimitive`], and C implementations can be supplied through the FFI
//! table.
//!
//! ## Example
//!
//! ```rust
//! use hexhash_core::{HexHash, PrimitiveError, Registry};
//!
//! let mut builder = Registry::builder().with_builtins();
//! for algorithm in builder.missing() {
//!     // Stand-in for the real implementation of `algorithm`.
//!     builder = builder.register(algorithm, |_input: &[u8]| -> Result<[u8; 64], PrimitiveError> {
//!         Ok([0x11; 64])
//!     });
//! }
//!
//! let hasher = HexHash::new(builder.build().unwrap());
//! let header = [0u8; 80];
//! let digest = hasher.hash(&header).unwrap();
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! hexhash-core = { version = "0.1", default-features = false, features = ["sha2", "sha3"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod algorithm;
mod error;
mod hexhash;
mod params;
mod primitives;
mod registry;

#[cfg(feature = "std")]
pub mod ffi;

pub use algorithm::{Algorithm, first_algorithm, next_algorithm};
pub use error::{Error, PrimitiveError, Result};
pub use hexhash::{HexHash, Trace, hash};
pub use params::*;
pub use primitives::{DigestPrimitive, Primitive, RoundState};
pub use registry::{Registry, RegistryBuilder};

#[cfg(feature = "sha2")]
pub use primitives::Sha512;
#[cfg(feature = "sha3")]
pub use primitives::Keccak512;
#[cfg(feature = "groestl")]
pub use primitives::Groestl512;
#[cfg(feature = "skein")]
pub use primitives::Skein512;
#[cfg(feature = "shabal")]
pub use primitives::Shabal512;
#[cfg(feature = "whirlpool")]
pub use primitives::Whirlpool;

pub use digest;
