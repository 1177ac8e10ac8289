//! Primitive capability for the sixteen hash functions
//!
//! The chained digest only needs `bytes -> 64 bytes` from each primitive.
//! Implementations are expected to be total and deterministic; a primitive
//! that can fail (allocation, foreign code) reports it through
//! [`PrimitiveError`] and the digest is abandoned.

use core::marker::PhantomData;

use digest::Digest;
use digest::consts::U64;

use crate::error::PrimitiveError;
use crate::params::ROUND_STATE_SIZE;

/// Full 512-bit output of one round
pub type RoundState = [u8; ROUND_STATE_SIZE];

/// One 512-bit hash function.
///
/// Every call must start from a freshly initialised context: the registry
/// hands out the same value for every round that selects it, and concurrent
/// digests share it.
pub trait Primitive: Send + Sync {
    /// Hash `input` (any length, including empty) to 64 bytes
    fn hash(&self, input: &[u8]) -> Result<RoundState, PrimitiveError>;
}

impl<F> Primitive for F
where
    F: Fn(&[u8]) -> Result<RoundState, PrimitiveError> + Send + Sync,
{
    #[inline(always)]
    fn hash(&self, input: &[u8]) -> Result<RoundState, PrimitiveError> {
        self(input)
    }
}

/// Adapter for any RustCrypto hash with a 64-byte output
pub struct DigestPrimitive<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> DigestPrimitive<D> {
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for DigestPrimitive<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestPrimitive<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestPrimitive<D> {}

impl<D> core::fmt::Debug for DigestPrimitive<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(core::any::type_name::<D>())
    }
}

impl<D> Primitive for DigestPrimitive<D>
where
    D: Digest<OutputSize = U64>,
{
    #[inline(always)]
    fn hash(&self, input: &[u8]) -> Result<RoundState, PrimitiveError> {
        let output = D::digest(input);
        let mut state = [0u8; ROUND_STATE_SIZE];
        state.copy_from_slice(&output);
        Ok(state)
    }
}

/// SHA-512 (selector 15)
#[cfg(feature = "sha2")]
pub type Sha512 = DigestPrimitive<sha2::Sha512>;

/// Keccak-512 with the original `0x01` padding (selector 4).
///
/// This is the pre-standard Keccak used by the sph family, not SHA3-512.
#[cfg(feature = "sha3")]
pub type Keccak512 = DigestPrimitive<sha3::Keccak512>;

/// Grøstl-512 (selector 2)
#[cfg(feature = "groestl")]
pub type Groestl512 = DigestPrimitive<groestl::Groestl512>;

/// Skein-512 with 512-bit output (selector 5)
#[cfg(feature = "skein")]
pub type Skein512 = DigestPrimitive<skein::Skein512<U64>>;

/// Shabal-512 (selector 13)
#[cfg(feature = "shabal")]
pub type Shabal512 = DigestPrimitive<shabal::Shabal512>;

/// Whirlpool (selector 14)
#[cfg(feature = "whirlpool")]
pub type Whirlpool = DigestPrimitive<whirlpool::Whirlpool>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_primitive() {
        let primitive = |input: &[u8]| -> Result<RoundState, PrimitiveError> {
            let mut state = [0u8; ROUND_STATE_SIZE];
            state[0] = input.len() as u8;
            Ok(state)
        };

        assert_eq!(Primitive::hash(&primitive, b"abc").unwrap()[0], 3);
        assert_eq!(Primitive::hash(&primitive, b"").unwrap()[0], 0);
    }

    #[test]
    fn test_digest_primitive_matches_digest() {
        use sha2::Digest as _;

        let primitive = DigestPrimitive::<sha2::Sha512>::new();
        let expected = sha2::Sha512::digest(b"hex");
        assert_eq!(primitive.hash(b"hex").unwrap().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_digest_primitive_is_stateless() {
        let primitive = DigestPrimitive::<sha3::Keccak512>::new();
        let first = primitive.hash(b"round input").unwrap();
        let _ = primitive.hash(b"something else").unwrap();
        assert_eq!(primitive.hash(b"round input").unwrap(), first);
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_sha512_known_answer() {
        let result = Sha512::new().hash(b"abc").unwrap();
        assert_eq!(
            hex::encode(result),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[cfg(feature = "sha3")]
    #[test]
    fn test_keccak512_known_answer() {
        let result = Keccak512::new().hash(b"").unwrap();
        assert_eq!(
            hex::encode(result),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
             c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );

        let result = Keccak512::new().hash(b"abc").unwrap();
        assert_eq!(
            hex::encode(result),
            "18587dc2ea106b9a1563e32b3312421ca164c7f1f07bc922a9c83d77cea3a1e5\
             d0c69910739025372dc14ac9642629379540c17e2a65b19d77aa511a9d00bb96"
        );
    }

    #[cfg(all(
        feature = "groestl",
        feature = "skein",
        feature = "shabal",
        feature = "whirlpool"
    ))]
    #[test]
    fn test_builtin_aliases_match_their_crates() {
        let input = b"The quick brown fox jumps over the lazy dog";

        assert_eq!(
            Groestl512::new().hash(input).unwrap().as_slice(),
            groestl::Groestl512::digest(input).as_slice()
        );
        assert_eq!(
            Skein512::new().hash(input).unwrap().as_slice(),
            skein::Skein512::<U64>::digest(input).as_slice()
        );
        assert_eq!(
            Shabal512::new().hash(input).unwrap().as_slice(),
            shabal::Shabal512::digest(input).as_slice()
        );
        assert_eq!(
            Whirlpool::new().hash(input).unwrap().as_slice(),
            whirlpool::Whirlpool::digest(input).as_slice()
        );
    }

    #[cfg(feature = "whirlpool")]
    #[test]
    fn test_whirlpool_known_answer() {
        let result = Whirlpool::new().hash(b"").unwrap();
        assert_eq!(
            hex::encode(result),
            "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7\
             3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3"
        );
    }
}
