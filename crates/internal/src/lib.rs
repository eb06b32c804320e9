//! Internal utilities for the edcrypt library
//!
//! Not part of the stable API. Used by the signature engine for
//! constant-time comparisons and little-endian limb loading.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
