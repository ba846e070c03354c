//! Deterministic participant bucketing.
//!
//! Assignments are persisted by the store and compared across client implementations, so the
//! hash must match Java's `String.hashCode` bit for bit: UTF-16 code units, `h * 31 + unit`, with
//! 32-bit signed wraparound.

/// Java `String.hashCode` of `input`.
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

/// Pick an alternative in `[0, alternatives)` for `input`.
///
/// `alternatives` must be non-zero.
pub fn bucket(input: &str, alternatives: u32) -> u32 {
    // unsigned_abs() maps i32::MIN to 2^31 instead of overflowing.
    string_hash(input).unsigned_abs() % alternatives
}
