//! Chained digest selector
//!
//! Sixteen rounds, strictly sequential. Round 0 hashes the caller's input with
//! the algorithm named by input byte 11; every later round hashes the previous
//! 64-byte round state with the algorithm named by that state's first byte.
//! Only one primitive runs at a time and every round starts from a fresh
//! primitive context.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tracing::{debug, trace};

use crate::algorithm::{Algorithm, first_algorithm, next_algorithm};
use crate::error::{Error, Result};
use crate::params::{DIGEST_SIZE, ROUNDS};
use crate::primitives::RoundState;
use crate::registry::Registry;

/// Hex digest hasher bound to a complete primitive registry.
///
/// Holds no per-digest state, so `hash` takes `&self` and one hasher can be
/// shared between threads.
#[derive(Debug)]
pub struct HexHash {
    registry: Registry,
}

/// Algorithms a digest went through, in round order, plus the digest itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub algorithms: [Algorithm; ROUNDS],
    pub digest: [u8; DIGEST_SIZE],
}

impl HexHash {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Compute the 32-byte digest of `input`.
    ///
    /// Fails with [`Error::InvalidInputLength`] before any round runs if the
    /// input is shorter than 12 bytes, and with [`Error::PrimitiveFailure`] if
    /// a primitive cannot complete.
    pub fn hash(&self, input: &[u8]) -> Result<[u8; DIGEST_SIZE]> {
        hash(&self.registry, input)
    }

    /// Same digest as [`HexHash::hash`], also returning the algorithm sequence
    pub fn trace(&self, input: &[u8]) -> Result<Trace> {
        let mut algorithms = [Algorithm::Blake; ROUNDS];
        let digest = chain(&self.registry, input, |round, algorithm| {
            algorithms[round] = algorithm;
        })?;
        Ok(Trace { algorithms, digest })
    }

    /// Digest many independent inputs; results keep the input order
    #[cfg(feature = "parallel")]
    pub fn hash_batch<I>(&self, inputs: &[I]) -> Vec<Result<[u8; DIGEST_SIZE]>>
    where
        I: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.hash(input.as_ref()))
            .collect()
    }

    /// Digest many independent inputs; results keep the input order
    #[cfg(not(feature = "parallel"))]
    pub fn hash_batch<I>(&self, inputs: &[I]) -> Vec<Result<[u8; DIGEST_SIZE]>>
    where
        I: AsRef<[u8]>,
    {
        inputs
            .iter()
            .map(|input| self.hash(input.as_ref()))
            .collect()
    }
}

impl From<Registry> for HexHash {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

/// Convenience function for single-shot hashing against a registry
pub fn hash(registry: &Registry, input: &[u8]) -> Result<[u8; DIGEST_SIZE]> {
    chain(registry, input, |_, _| {})
}

/// Run all rounds, reporting each selected algorithm to `on_round`
fn chain(
    registry: &Registry,
    input: &[u8],
    mut on_round: impl FnMut(usize, Algorithm),
) -> Result<[u8; DIGEST_SIZE]> {
    let mut algorithm = first_algorithm(input)?;
    debug!(len = input.len(), first = %algorithm, "hex digest");

    // Round 0 consumes the caller's input at its own length
    let mut state = run_round(registry, algorithm, 0, input)?;
    on_round(0, algorithm);

    // Rounds 1..16 consume the full 64-byte state of the round before
    for round in 1..ROUNDS {
        algorithm = next_algorithm(&state);
        state = run_round(registry, algorithm, round, &state)?;
        on_round(round, algorithm);
    }

    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&state[..DIGEST_SIZE]);
    Ok(digest)
}

#[inline(always)]
fn run_round(
    registry: &Registry,
    algorithm: Algorithm,
    round: usize,
    input: &[u8],
) -> Result<RoundState> {
    let state = registry
        .get(algorithm)
        .hash(input)
        .map_err(|source| Error::PrimitiveFailure {
            algorithm,
            round,
            source,
        })?;
    trace!(round, %algorithm, len = input.len(), "round");
    Ok(state)
}
