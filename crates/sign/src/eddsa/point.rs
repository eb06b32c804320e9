//! Edwards curve point operations for Ed25519
//!
//! This module implements point arithmetic on the twisted Edwards curve
//! -x² + y² = 1 + d·x²·y² where d = -121665/121666, in extended
//! coordinates (X:Y:Z:T) with x = X/Z, y = Y/Z, x·y = T/Z.

use super::constants::{BASE_T, BASE_X, BASE_Y, EDWARDS_D, EDWARDS_D2};
use super::field::FieldElement;
use super::scalar::Scalar;
use edcrypt_internal::constant_time::ct_eq_choice;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on the twisted Edwards curve
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Compressed point representation (32 bytes): y with the sign of x in bit 255
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl EdwardsPoint {
    /// Identity element (neutral element for addition)
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// Base point generator B
    pub fn base_point() -> Self {
        EdwardsPoint {
            x: BASE_X,
            y: BASE_Y,
            z: FieldElement::ONE,
            t: BASE_T,
        }
    }

    /// Add two points (unified formula, complete on this curve)
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&EDWARDS_D2).mul(&other.t);
        let d = self.z.double().mul(&other.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Double a point (dbl-2008-hwcd with a = -1)
    pub fn double(&self) -> EdwardsPoint {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = a.neg();
        let e = self.x.add(&self.y).square().sub(&a).sub(&b);
        let g = d.add(&b);
        let f = g.sub(&c);
        let h = d.sub(&b);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Point negation: (x, y) -> (-x, y)
    pub fn neg(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Constant-time scalar multiplication
    ///
    /// Double-and-always-add over all 256 bits; the sum is computed on every
    /// step and kept or discarded with a conditional select.
    pub fn scalar_mult(&self, scalar: &Scalar) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            acc.conditional_assign(&sum, scalar.bit(i));
        }
        acc
    }

    /// [scalar]B
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        EdwardsPoint::base_point().scalar_mult(scalar)
    }

    /// Compress point to 32 bytes
    pub fn compress(&self) -> CompressedEdwardsY {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);

        let mut bytes = y.to_bytes();
        bytes[31] ^= x.is_negative().unwrap_u8() << 7;

        CompressedEdwardsY(bytes)
    }

    /// Check the curve equation and the extended-coordinate invariant
    #[cfg(test)]
    pub fn is_on_curve(&self) -> bool {
        // (-X² + Y²)·Z² = Z⁴ + d·X²·Y²
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&EDWARDS_D.mul(&xx).mul(&yy));

        // X·Y = Z·T
        let xy = self.x.mul(&self.y);
        let zt = self.z.mul(&self.t);

        lhs == rhs && xy == zt
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // X1/Z1 = X2/Z2 and Y1/Z1 = Y2/Z2, without inversions
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

impl CompressedEdwardsY {
    /// Get bytes
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Decompress to a point without branching on the encoding
    ///
    /// Returns `(valid, point)`. When `valid` is 0 the point is the identity.
    /// Decoding fails for a non-canonical y (y >= p), for a y with no
    /// matching x, and for x = 0 paired with a set sign bit.
    pub fn decompress_ct(&self) -> (Choice, EdwardsPoint) {
        let sign = Choice::from(self.0[31] >> 7);
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes);
        let canonical = ct_eq_choice(y.to_bytes(), y_bytes);

        let yy = y.square();
        let u = yy.sub(&FieldElement::ONE);
        let v = EDWARDS_D.mul(&yy).add(&FieldElement::ONE);
        let (is_square, mut x) = FieldElement::sqrt_ratio(&u, &v);

        let bad_zero = x.is_zero() & sign;
        let flip = x.is_negative() ^ sign;
        x.conditional_negate(flip);

        let valid = canonical & is_square & !bad_zero;
        let point = EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        };

        (
            valid,
            EdwardsPoint::conditional_select(&EdwardsPoint::identity(), &point, valid),
        )
    }

    /// Decompress to point
    #[cfg(test)]
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let (valid, point) = self.decompress_ct();
        if bool::from(valid) {
            Some(point)
        } else {
            None
        }
    }
}
