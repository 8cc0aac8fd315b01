//! State fingerprints for determinism checks.
//!
//! Uses FNV-1a, a fast non-cryptographic hash. Two grids with the same
//! dimensions and the same cells always hash equal; anything else is
//! only probabilistically distinct.

use toroid_core::{Cell, Dimensions};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a grid's dimensions and row-major cells.
///
/// The generation counter is not included: a still-life
/// keeps the same fingerprint across generations.
pub fn fingerprint(dims: Dimensions, cells: &[Cell]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, dims.width());
    hash = fnv1a_u32(hash, dims.height());
    for cell in cells {
        hash = fnv1a_byte(hash, cell.as_u8());
    }
    hash
}
