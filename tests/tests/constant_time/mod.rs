// tests/constant_time/mod.rs

pub mod signature_tests;

pub use edcrypt_tests::constant_time::{generate_test_insights, TestConfig, TimingTester};
