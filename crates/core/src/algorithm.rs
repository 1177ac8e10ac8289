//! The sixteen selectable primitives and the selection rule

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::params::{ALGORITHM_COUNT, MIN_INPUT_LEN, ROUND_STATE_SIZE, SELECTOR_OFFSET};

/// Hash primitive named by a selector value.
///
/// The discriminants are the selector values; their order is consensus-critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Algorithm {
    Blake = 0,
    Bmw = 1,
    Groestl = 2,
    Jh = 3,
    Keccak = 4,
    Skein = 5,
    Luffa = 6,
    Cubehash = 7,
    Shavite = 8,
    Simd = 9,
    Echo = 10,
    Hamsi = 11,
    Fugue = 12,
    Shabal = 13,
    Whirlpool = 14,
    Sha512 = 15,
}

impl Algorithm {
    /// All algorithms in selector order
    pub const ALL: [Algorithm; ALGORITHM_COUNT] = [
        Algorithm::Blake,
        Algorithm::Bmw,
        Algorithm::Groestl,
        Algorithm::Jh,
        Algorithm::Keccak,
        Algorithm::Skein,
        Algorithm::Luffa,
        Algorithm::Cubehash,
        Algorithm::Shavite,
        Algorithm::Simd,
        Algorithm::Echo,
        Algorithm::Hamsi,
        Algorithm::Fugue,
        Algorithm::Shabal,
        Algorithm::Whirlpool,
        Algorithm::Sha512,
    ];

    /// Selector value in `0..16`
    #[inline(always)]
    pub const fn selector(self) -> u8 {
        self as u8
    }

    /// Algorithm for a selector value, `None` outside `0..16`
    #[inline(always)]
    pub const fn from_selector(selector: u8) -> Option<Self> {
        if (selector as usize) < ALGORITHM_COUNT {
            Some(Self::ALL[selector as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Blake => "blake",
            Algorithm::Bmw => "bmw",
            Algorithm::Groestl => "groestl",
            Algorithm::Jh => "jh",
            Algorithm::Keccak => "keccak",
            Algorithm::Skein => "skein",
            Algorithm::Luffa => "luffa",
            Algorithm::Cubehash => "cubehash",
            Algorithm::Shavite => "shavite",
            Algorithm::Simd => "simd",
            Algorithm::Echo => "echo",
            Algorithm::Hamsi => "hamsi",
            Algorithm::Fugue => "fugue",
            Algorithm::Shabal => "shabal",
            Algorithm::Whirlpool => "whirlpool",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Algorithm for an arbitrary byte, reduced modulo the algorithm count
    #[inline(always)]
    const fn from_byte(byte: u8) -> Self {
        Self::ALL[byte as usize % ALGORITHM_COUNT]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts a name (any case) or a selector number
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<u8>() {
            return Self::from_selector(selector).ok_or_else(|| Error::UnknownAlgorithm(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Algorithm for round 0: high nibble of input byte 11.
///
/// Fails with [`Error::InvalidInputLength`] instead of reading past the input.
#[inline(always)]
pub fn first_algorithm(input: &[u8]) -> Result<Algorithm> {
    match input.get(SELECTOR_OFFSET) {
        Some(byte) => Ok(Algorithm::from_byte(byte >> 4)),
        None => Err(Error::InvalidInputLength {
            len: input.len(),
            min: MIN_INPUT_LEN,
        }),
    }
}

/// Algorithm for the round after the one that produced `round_state`.
///
/// Reads the full 64-byte state, never the truncated digest.
#[inline(always)]
pub fn next_algorithm(round_state: &[u8; ROUND_STATE_SIZE]) -> Algorithm {
    Algorithm::from_byte(round_state[0])
}
