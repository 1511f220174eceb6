//! Secret-erasure helper layered on top of `zeroize`'s own volatile-write discipline, following
//! the reference implementation's `secure_zeroize` (`internals/utility/utils.hpp`), which pairs
//! a zero-fill with a compiler barrier so the write cannot be optimized away.

use core::sync::atomic::{compiler_fence, Ordering};

use zeroize::Zeroize;

/// Zeroizes `data` and inserts a compiler fence immediately after, so the zeroizing write is not
/// reordered past or eliminated around later use of the (now zeroed) memory.
pub fn secure_zeroize<T: Zeroize>(data: &mut T) {
    data.zeroize();
    compiler_fence(Ordering::SeqCst);
}
