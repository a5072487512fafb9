//! Not-found sentinel helpers.
//!
//! Search functions report absence as `None`. Callers that print or store
//! the classic signed sentinel can convert with [`to_signed_index`].

/// Signed "not found" sentinel.
pub const NOT_FOUND: isize = -1;

/// Convert a search result to a signed index, mapping `None` to [`NOT_FOUND`].
///
/// Slices never exceed `isize::MAX` bytes, so every valid index fits.
#[inline]
pub fn to_signed_index(index: Option<usize>) -> isize {
    index.map_or(NOT_FOUND, |i| i as isize)
}
