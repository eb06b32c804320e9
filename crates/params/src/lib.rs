//! Constant values for the edcrypt library

#![no_std]

pub mod traditional;
