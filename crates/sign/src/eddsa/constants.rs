//! Curve25519 / Ed25519 constants
//!
//! Field constants are stored as five 51-bit little-endian limbs.

use super::field::FieldElement;

/// Edwards curve parameter d = -121665/121666 mod p
pub(crate) const EDWARDS_D: FieldElement = FieldElement([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// 2*d mod p
pub(crate) const EDWARDS_D2: FieldElement = FieldElement([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// sqrt(-1) mod p
pub(crate) const SQRT_M1: FieldElement = FieldElement([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// Affine x coordinate of the base point B
pub(crate) const BASE_X: FieldElement = FieldElement([
    1738742601995546,
    1146398526822698,
    2070867633025821,
    562264141797630,
    587772402128613,
]);

/// Affine y coordinate of the base point B (4/5 mod p)
pub(crate) const BASE_Y: FieldElement = FieldElement([
    1801439850948184,
    1351079888211148,
    450359962737049,
    900719925474099,
    1801439850948198,
]);

/// x*y of the base point B
pub(crate) const BASE_T: FieldElement = FieldElement([
    1841354044333475,
    16398895984059,
    755974180946558,
    900171276175154,
    1821297809914039,
]);

/// p - 2 = 2^255 - 21, little-endian (inversion exponent)
pub(crate) const P_MINUS_2: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// (p - 5) / 8 = 2^252 - 3, little-endian (square root exponent)
pub(crate) const P_MINUS_5_DIV_8: [u8; 32] = [
    0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x0f,
];

/// Group order L as four little-endian u64 limbs
pub(crate) const GROUP_ORDER_LIMBS: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];
