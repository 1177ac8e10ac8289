//! Hex digest consensus parameters
//!
//! Changing any of these produces digests that disagree with every other
//! implementation.

/// Number of selectable hash primitives, and the modulus applied to the first
/// digest byte when picking the next one
pub const ALGORITHM_COUNT: usize = 16;

/// Number of chained rounds per digest
pub const ROUNDS: usize = 16;

/// Size of every primitive's output (512 bits)
pub const ROUND_STATE_SIZE: usize = 64;

/// Published digest size: the leading half of the last round state
pub const DIGEST_SIZE: usize = 32;

/// Input byte whose high nibble names the first algorithm.
///
/// The input is read as 32-bit words; this is byte 7 counted from word 1,
/// which lands inside the previous-block-hash field of a block header.
pub const SELECTOR_OFFSET: usize = 4 + 7;

/// Shortest input the first selection can be read from
pub const MIN_INPUT_LEN: usize = SELECTOR_OFFSET + 1;
