// tests/constant_time/signature_tests.rs
// Timing comparisons for Ed25519 signing and verification

use super::{generate_test_insights, TestConfig, TimingTester};
use edcrypt::sign::{Ed25519, Ed25519Signature};
use std::hint::black_box;

fn report(name: &str, times_a: &[u128], times_b: &[u128], config: &TestConfig) {
    let tester = TimingTester::from_config(config);
    let analysis = match tester.analyze_constant_time(times_a, times_b, config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };

    let insights = generate_test_insights(&analysis, name);
    println!("{}", insights);
    assert!(analysis.is_constant_time, "{}", insights);
}

#[test]
#[ignore]
fn test_sign_secret_independent_timing() {
    let config = TestConfig::for_signing();
    // Low and high Hamming weight secrets
    let sparse = Ed25519::keypair_from_hash(&[0u8; 64]).unwrap();
    let dense = Ed25519::keypair_from_hash(&[0xffu8; 64]).unwrap();
    let message = b"timing";

    for _ in 0..config.num_warmup {
        black_box(Ed25519::sign_with(message, &sparse));
        black_box(Ed25519::sign_with(message, &dense));
    }

    let tester = TimingTester::from_config(&config);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(Ed25519::sign_with(black_box(message), &sparse));
        },
        || {
            black_box(Ed25519::sign_with(black_box(message), &dense));
        },
    );

    report("Ed25519 sign", &t1, &t2, &config);
}

#[test]
#[ignore]
fn test_verify_accept_reject_timing() {
    let config = TestConfig::for_verification();
    let keypair = Ed25519::keypair_from_seed(&[0x5c; 32]).unwrap();
    let message = b"timing";
    let valid = Ed25519::sign_with(message, &keypair);

    // Same R, altered s: fails only at the final comparison
    let mut invalid = valid.0;
    invalid[40] ^= 0x01;
    let invalid = Ed25519Signature(invalid);

    for _ in 0..config.num_warmup {
        black_box(Ed25519::verify_with(message, &valid, keypair.public_key()));
        black_box(Ed25519::verify_with(message, &invalid, keypair.public_key()));
    }

    let tester = TimingTester::from_config(&config);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(Ed25519::verify_with(message, &valid, keypair.public_key()));
        },
        || {
            black_box(Ed25519::verify_with(message, &invalid, keypair.public_key()));
        },
    );

    report("Ed25519 verify", &t1, &t2, &config);
}

#[test]
#[ignore]
fn test_verify_non_canonical_s_timing() {
    let config = TestConfig::for_verification();
    let keypair = Ed25519::keypair_from_seed(&[0x5d; 32]).unwrap();
    let message = b"timing";
    let valid = Ed25519::sign_with(message, &keypair);

    // s with the top bits set is rejected by the range check, which must not
    // short-circuit the group equation
    let mut out_of_range = valid.0;
    out_of_range[63] |= 0xf0;
    let out_of_range = Ed25519Signature(out_of_range);

    let tester = TimingTester::from_config(&config);
    let (t1, t2) = tester.measure_pair(
        || {
            black_box(Ed25519::verify_with(message, &valid, keypair.public_key()));
        },
        || {
            black_box(Ed25519::verify_with(message, &out_of_range, keypair.public_key()));
        },
    );

    report("Ed25519 verify (range check)", &t1, &t2, &config);
}
