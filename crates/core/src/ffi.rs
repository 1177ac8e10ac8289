//! C FFI bindings for nodes that already link the sph primitive library
//!
//! The caller passes one callback per selector; the chaining itself runs here.
//! Every callback has the shape of a one-shot `init/update/close` sequence:
//! hash `input_len` bytes at `input` into 64 bytes at `output`, return 0 on
//! success.

use core::slice;

use crate::{Algorithm, Error, HexHash, PrimitiveError, Registry, RoundState};
use crate::{ALGORITHM_COUNT, DIGEST_SIZE, ROUND_STATE_SIZE};

/// Success
pub const HEXHASH_OK: i32 = 0;
/// A required pointer argument was null
pub const HEXHASH_NULL_ARGUMENT: i32 = -1;
/// Input shorter than 12 bytes
pub const HEXHASH_INVALID_INPUT_LENGTH: i32 = -2;
/// A primitive callback returned non-zero
pub const HEXHASH_PRIMITIVE_FAILURE: i32 = -3;

/// One 512-bit hash function implemented in C
pub type HexPrimitiveFn = unsafe extern "C" fn(input: *const u8, input_len: usize, output: *mut u8) -> i32;

/// Callbacks in selector order (Blake = 0 … SHA-512 = 15)
#[repr(C)]
pub struct HexPrimitiveTable {
    pub functions: [Option<HexPrimitiveFn>; ALGORITHM_COUNT],
}

/// Opaque hasher handle for FFI
pub struct HexHasher {
    inner: HexHash,
}

struct ForeignPrimitive {
    function: HexPrimitiveFn,
}

impl crate::Primitive for ForeignPrimitive {
    fn hash(&self, input: &[u8]) -> Result<RoundState, PrimitiveError> {
        let mut state = [0u8; ROUND_STATE_SIZE];
        // SAFETY: the callback contract is to read `input.len()` bytes and
        // write exactly 64 bytes into `state`
        let status = unsafe { (self.function)(input.as_ptr(), input.len(), state.as_mut_ptr()) };
        if status != 0 {
            return Err(PrimitiveError::new(format!("callback returned {}", status)));
        }
        Ok(state)
    }
}

/// Create a new hasher from a primitive table
/// Returns null if `table` is null or any of its sixteen entries is missing
/// (caller must free a non-null result with hexhash_free)
#[unsafe(no_mangle)]
pub extern "C" fn hexhash_new(table: *const HexPrimitiveTable) -> *mut HexHasher {
    if table.is_null() {
        return core::ptr::null_mut();
    }

    let table = unsafe { &*table };
    let mut builder = Registry::builder();
    for (algorithm, function) in Algorithm::ALL.into_iter().zip(table.functions) {
        if let Some(function) = function {
            builder = builder.register(algorithm, ForeignPrimitive { function });
        }
    }

    match builder.build() {
        Ok(registry) => Box::into_raw(Box::new(HexHasher {
            inner: HexHash::new(registry),
        })),
        Err(_) => core::ptr::null_mut(),
    }
}

/// Free a hasher instance
#[unsafe(no_mangle)]
pub extern "C" fn hexhash_free(hasher: *mut HexHasher) {
    if !hasher.is_null() {
        unsafe {
            let _ = Box::from_raw(hasher);
        }
    }
}

/// Compute the digest of input data
/// - hasher: pointer from hexhash_new()
/// - input: pointer to input bytes
/// - input_len: length of input
/// - output: pointer to 32-byte buffer for result (untouched on failure)
#[unsafe(no_mangle)]
pub extern "C" fn hexhash_hash(
    hasher: *const HexHasher,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) -> i32 {
    if hasher.is_null() || input.is_null() || output.is_null() {
        return HEXHASH_NULL_ARGUMENT;
    }

    unsafe {
        let hasher = &*hasher;
        let input_slice = slice::from_raw_parts(input, input_len);

        match hasher.inner.hash(input_slice) {
            Ok(result) => {
                let output_slice = slice::from_raw_parts_mut(output, DIGEST_SIZE);
                output_slice.copy_from_slice(&result);
                HEXHASH_OK
            }
            Err(Error::InvalidInputLength { .. }) => HEXHASH_INVALID_INPUT_LENGTH,
            Err(_) => HEXHASH_PRIMITIVE_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha512};

    unsafe extern "C" fn tagged_sha512<const TAG: u8>(
        input: *const u8,
        input_len: usize,
        output: *mut u8,
    ) -> i32 {
        let input = unsafe { slice::from_raw_parts(input, input_len) };
        let digest = Sha512::new().chain_update([TAG]).chain_update(input).finalize();
        unsafe { slice::from_raw_parts_mut(output, ROUND_STATE_SIZE) }.copy_from_slice(&digest);
        0
    }

    unsafe extern "C" fn failing(_input: *const u8, _input_len: usize, _output: *mut u8) -> i32 {
        7
    }

    fn tagged_table() -> HexPrimitiveTable {
        HexPrimitiveTable {
            functions: [
                Some(tagged_sha512::<0>),
                Some(tagged_sha512::<1>),
                Some(tagged_sha512::<2>),
                Some(tagged_sha512::<3>),
                Some(tagged_sha512::<4>),
                Some(tagged_sha512::<5>),
                Some(tagged_sha512::<6>),
                Some(tagged_sha512::<7>),
                Some(tagged_sha512::<8>),
                Some(tagged_sha512::<9>),
                Some(tagged_sha512::<10>),
                Some(tagged_sha512::<11>),
                Some(tagged_sha512::<12>),
                Some(tagged_sha512::<13>),
                Some(tagged_sha512::<14>),
                Some(tagged_sha512::<15>),
            ],
        }
    }

    #[test]
    fn test_ffi_digest_matches_reference_vector() {
        let table = tagged_table();
        let hasher = hexhash_new(&table);
        assert!(!hasher.is_null());

        let input: Vec<u8> = (0u8..80).collect();
        let mut output = [0u8; DIGEST_SIZE];
        let status = hexhash_hash(hasher, input.as_ptr(), input.len(), output.as_mut_ptr());
        hexhash_free(hasher);

        assert_eq!(status, HEXHASH_OK);
        assert_eq!(
            hex::encode(output),
            "356471a4b951ec5f94ede393551a472f832dbf4ddf629b927eae7d8fe7ad0fd6"
        );
    }

    #[test]
    fn test_ffi_rejects_incomplete_table() {
        let mut table = tagged_table();
        table.functions[Algorithm::Shabal.selector() as usize] = None;
        assert!(hexhash_new(&table).is_null());
        assert!(hexhash_new(core::ptr::null()).is_null());
    }

    #[test]
    fn test_ffi_status_codes() {
        let table = tagged_table();
        let hasher = hexhash_new(&table);
        let mut output = [0xAAu8; DIGEST_SIZE];

        let short = [0u8; 11];
        assert_eq!(
            hexhash_hash(hasher, short.as_ptr(), short.len(), output.as_mut_ptr()),
            HEXHASH_INVALID_INPUT_LENGTH
        );
        assert_eq!(output, [0xAA; DIGEST_SIZE]);

        assert_eq!(
            hexhash_hash(hasher, core::ptr::null(), 0, output.as_mut_ptr()),
            HEXHASH_NULL_ARGUMENT
        );
        hexhash_free(hasher);

        let failing: HexPrimitiveFn = failing;
        let table = HexPrimitiveTable {
            functions: [Some(failing); ALGORITHM_COUNT],
        };
        let hasher = hexhash_new(&table);
        let input = [0u8; 80];
        assert_eq!(
            hexhash_hash(hasher, input.as_ptr(), input.len(), output.as_mut_ptr()),
            HEXHASH_PRIMITIVE_FAILURE
        );
        hexhash_free(hasher);
    }
}
