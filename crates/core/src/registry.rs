//! Selector → primitive registry
//!
//! A [`Registry`] always holds all sixteen primitives; partially filled
//! registries only exist as a [`RegistryBuilder`] and cannot hash.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::params::ALGORITHM_COUNT;
use crate::primitives::Primitive;

type Slot = Box<dyn Primitive>;

/// Immutable mapping from each of the sixteen selectors to its primitive.
///
/// `Send + Sync`: one registry can serve any number of concurrent digests.
pub struct Registry {
    /// Exactly [`ALGORITHM_COUNT`] entries, indexed by selector
    slots: Box<[Slot]>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Primitive for `algorithm`
    #[inline(always)]
    pub fn get(&self, algorithm: Algorithm) -> &dyn Primitive {
        self.slots[algorithm.selector() as usize].as_ref()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("algorithms", &Algorithm::ALL)
            .finish()
    }
}

/// Collects primitives until every selector has one
#[derive(Default)]
pub struct RegistryBuilder {
    slots: [Option<Slot>; ALGORITHM_COUNT],
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primitive for `algorithm`, replacing any earlier one
    pub fn register(mut self, algorithm: Algorithm, primitive: impl Primitive + 'static) -> Self {
        self.slots[algorithm.selector() as usize] = Some(Box::new(primitive));
        self
    }

    /// Register the primitives compiled into this crate.
    ///
    /// With default features: Keccak-512, Skein-512, Grøstl-512, Shabal-512,
    /// Whirlpool and SHA-512.
    #[allow(unused_mut)]
    pub fn with_builtins(mut self) -> Self {
        #[cfg(feature = "sha3")]
        {
            self = self.register(Algorithm::Keccak, crate::primitives::Keccak512::new());
        }
        #[cfg(feature = "skein")]
        {
            self = self.register(Algorithm::Skein, crate::primitives::Skein512::new());
        }
        #[cfg(feature = "groestl")]
        {
            self = self.register(Algorithm::Groestl, crate::primitives::Groestl512::new());
        }
        #[cfg(feature = "shabal")]
        {
            self = self.register(Algorithm::Shabal, crate::primitives::Shabal512::new());
        }
        #[cfg(feature = "whirlpool")]
        {
            self = self.register(Algorithm::Whirlpool, crate::primitives::Whirlpool::new());
        }
        #[cfg(feature = "sha2")]
        {
            self = self.register(Algorithm::Sha512, crate::primitives::Sha512::new());
        }
        self
    }

    pub fn is_registered(&self, algorithm: Algorithm) -> bool {
        self.slots[algorithm.selector() as usize].is_some()
    }

    /// Algorithms still without a primitive, in selector order
    pub fn missing(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| !self.is_registered(*algorithm))
            .collect()
    }

    /// Finish the registry.
    ///
    /// Fails with [`Error::MissingPrimitive`] naming the lowest unfilled selector.
    pub fn build(self) -> Result<Registry> {
        let slots = Algorithm::ALL
            .into_iter()
            .zip(self.slots)
            .map(|(algorithm, slot)| slot.ok_or(Error::MissingPrimitive(algorithm)))
            .collect::<Result<Box<[Slot]>>>()?;

        Ok(Registry { slots })
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("missing", &self.missing())
            .finish()
    }
}
