//! Scalar arithmetic modulo L = 2^252 + 27742317777372353535851937790883648493
//!
//! Scalars are 256-bit little-endian integers held in four `u64` limbs.
//! Reduction is a fixed 512-step shift and conditional subtract driven by
//! constant-time selection, so the running time never depends on the value
//! being reduced.

use super::constants::GROUP_ORDER_LIMBS;
use edcrypt_internal::constant_time::ct_select;
use edcrypt_internal::endian::{u64x4_from_le_bytes, u64x4_to_le_bytes};
use subtle::Choice;
use zeroize::Zeroize;

/// 256-bit scalar
///
/// Values built with [`Scalar::from_bits`] keep all 256 bits (the clamped
/// secret scalar is larger than L); every arithmetic result is reduced
/// modulo L.
#[derive(Clone, Copy, Zeroize)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    #[cfg(test)]
    pub const ZERO: Scalar = Scalar { bytes: [0u8; 32] };

    /// Take 32 little-endian bytes as-is, without reduction
    pub fn from_bits(bytes: [u8; 32]) -> Self {
        Scalar { bytes }
    }

    /// Reduce a 64-byte little-endian integer (a SHA-512 output) modulo L
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Self {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo.copy_from_slice(&input[..32]);
        hi.copy_from_slice(&input[32..]);

        let lo = u64x4_from_le_bytes(&lo);
        let hi = u64x4_from_le_bytes(&hi);
        let wide = [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]];

        Scalar {
            bytes: u64x4_to_le_bytes(&reduce_wide(&wide)),
        }
    }

    /// Whether `bytes` encodes an integer strictly below L
    pub fn is_canonical(bytes: &[u8; 32]) -> Choice {
        let limbs = u64x4_from_le_bytes(bytes);
        let (_, borrow) = sub_with_borrow(&limbs, &GROUP_ORDER_LIMBS);
        // A borrow means bytes < L
        Choice::from(borrow as u8)
    }

    /// Compute (a * b + c) mod L
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let mut wide = mul_wide(&u64x4_from_le_bytes(&a.bytes), &u64x4_from_le_bytes(&b.bytes));
        let c = u64x4_from_le_bytes(&c.bytes);

        // a*b < 2^512 - 2^257, so adding c < 2^256 cannot overflow
        let mut carry: u128 = 0;
        for (i, limb) in wide.iter_mut().enumerate() {
            let addend = if i < 4 { c[i] } else { 0 };
            let t = *limb as u128 + addend as u128 + carry;
            *limb = t as u64;
            carry = t >> 64;
        }

        let mut reduced = reduce_wide(&wide);
        let scalar = Scalar {
            bytes: u64x4_to_le_bytes(&reduced),
        };
        wide.zeroize();
        reduced.zeroize();
        scalar
    }

    /// Little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Bit `i` (0 = least significant) as a `Choice`
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> Choice {
        Choice::from((self.bytes[i / 8] >> (i % 8)) & 1)
    }
}

/// a - b over four limbs, returning the difference and the final borrow (0 or 1)
#[inline(always)]
fn sub_with_borrow(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    (out, borrow)
}

/// Schoolbook 256 x 256 -> 512 bit product
fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let t = (a[i] as u128) * (b[j] as u128) + out[i + j] as u128 + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }
        out[i + 4] = carry as u64;
    }
    out
}

/// Reduce a 512-bit integer modulo L, one bit at a time from the top
///
/// Invariant: r < L < 2^253 at the start of every step, so 2r + 1 fits in
/// 256 bits and a single conditional subtraction restores the invariant.
fn reduce_wide(wide: &[u64; 8]) -> [u64; 4] {
    let mut r = [0u64; 4];
    for i in (0..512).rev() {
        let bit = (wide[i / 64] >> (i % 64)) & 1;

        r[3] = (r[3] << 1) | (r[2] >> 63);
        r[2] = (r[2] << 1) | (r[1] >> 63);
        r[1] = (r[1] << 1) | (r[0] >> 63);
        r[0] = (r[0] << 1) | bit;

        let (diff, borrow) = sub_with_borrow(&r, &GROUP_ORDER_LIMBS);
        // No borrow means r >= L: keep the difference
        let keep_diff = Choice::from((borrow ^ 1) as u8);
        for j in 0..4 {
            r[j] = ct_select(&r[j], &diff[j], keep_diff);
        }
    }
    r
}
