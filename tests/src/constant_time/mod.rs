//! Timing analysis for constant-time checks

pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{generate_test_insights, TimingAnalysis, TimingTester};
