//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held in five unsigned 51-bit limbs (radix 2^51) so that a
//! limb product fits in a `u128`. Every operation runs a fixed instruction
//! sequence independent of the values involved; exponentiations only ever
//! use the public exponents defined in `constants`.
//!
//! Limb bounds: the output of every operation has limbs below 2^52, which
//! keeps all intermediate products far from overflow.

use super::constants::{P_MINUS_2, P_MINUS_5_DIV_8, SQRT_M1};
use edcrypt_internal::endian::u64_from_le_bytes;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// 16*p, limb by limb; added before subtracting so limbs never underflow
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Load a little-endian encoding; bit 255 is ignored.
    ///
    /// Values in [p, 2^255) are accepted and reduced on the fly; callers that
    /// need canonical input compare against `to_bytes` afterwards.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        FieldElement([
            u64_from_le_bytes(&bytes[0..8]) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[6..14]) >> 3) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[12..20]) >> 6) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[19..27]) >> 1) & LOW_51_BIT_MASK,
            (u64_from_le_bytes(&bytes[24..32]) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Canonical little-endian encoding, value in [0, p)
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = FieldElement::weak_reduce(self.0).0;

        // q = 1 iff the value is >= p, computed as the carry out of value + 19
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q*p = value + 19q - q*2^255
        limbs[0] += 19 * q;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        // Dropping the carry out of limb 4 subtracts q*2^255
        limbs[4] &= LOW_51_BIT_MASK;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0u32;
        let mut idx = 0usize;
        for limb in limbs.iter() {
            acc |= (*limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        // 255 bits: 31 full bytes plus the final 7 bits
        out[idx] = acc as u8;
        out
    }

    /// Carry each limb into the next, folding the top carry back with *19
    #[inline(always)]
    fn weak_reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Field addition
    pub fn add(&self, rhs: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        FieldElement::weak_reduce([
            a[0] + b[0],
            a[1] + b[1],
            a[2] + b[2],
            a[3] + b[3],
            a[4] + b[4],
        ])
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        FieldElement::weak_reduce([
            (a[0] + SIXTEEN_P[0]) - b[0],
            (a[1] + SIXTEEN_P[1]) - b[1],
            (a[2] + SIXTEEN_P[2]) - b[2],
            (a[3] + SIXTEEN_P[3]) - b[3],
            (a[4] + SIXTEEN_P[4]) - b[4],
        ])
    }

    /// Field negation
    pub fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// 2 * self
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// Field multiplication
    pub fn mul(&self, rhs: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;

        // 2^255 = 19 mod p, so limb products that land at or beyond 2^255
        // wrap around multiplied by 19
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    /// Field squaring
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// self^exponent for a public little-endian exponent
    ///
    /// The exponent is a fixed constant at every call site, so branching on
    /// its bits leaks nothing about `self`.
    fn pow_public(&self, exponent: &[u8; 32]) -> FieldElement {
        let mut result = FieldElement::ONE;
        for i in (0..256).rev() {
            result = result.square();
            if (exponent[i / 8] >> (i % 8)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat: self^(p-2). Maps zero to zero.
    pub fn invert(&self) -> FieldElement {
        self.pow_public(&P_MINUS_2)
    }

    /// self^((p-5)/8), the core of the square root computation
    fn pow_p58(&self) -> FieldElement {
        self.pow_public(&P_MINUS_5_DIV_8)
    }

    /// Whether the canonical encoding is odd ("negative" in RFC 8032 terms)
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Negate in place when `choice` is set
    pub fn conditional_negate(&mut self, choice: Choice) {
        let negated = self.neg();
        self.conditional_assign(&negated, choice);
    }

    /// Compute a square root of u/v.
    ///
    /// Returns `(1, x)` with v*x^2 = u when u/v is a square, and `(0, _)`
    /// otherwise. For u = 0 the result is `(1, 0)`.
    pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);
        let mut x = u.mul(&v3).mul(&u.mul(&v7).pow_p58());

        let check = v.mul(&x.square());
        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&u.neg());

        let x_prime = x.mul(&SQRT_M1);
        x.conditional_assign(&x_prime, flipped_sign);

        (correct_sign | flipped_sign, x)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
