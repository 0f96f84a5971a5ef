//! C ABI surface of the `cdylib`. Declared for C callers in `include/prime.h`.

use std::os::raw::c_uint;

/// Bumped whenever an exported signature changes.
pub const ABI_VERSION: u32 = 1;

#[no_mangle]
pub extern "C" fn is_prime(n: c_uint) -> bool {
    crate::core::primality::is_prime(n)
}

#[no_mangle]
pub extern "C" fn prime_abi_version() -> u32 {
    ABI_VERSION
}
