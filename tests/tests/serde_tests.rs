//! Serde encoding of public keys and signatures

use edcrypt::prelude::*;

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
struct SignedRecord {
    signer: Ed25519PublicKey,
    signature: Ed25519Signature,
}

#[test]
fn json_uses_hex_strings() {
    let keypair = Ed25519::keypair_from_seed(&[0u8; 32]).unwrap();
    let record = SignedRecord {
        signer: *keypair.public_key(),
        signature: Ed25519::sign_with(b"test", &keypair),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        format!(
            r#"{{"signer":"{}","signature":"{}"}}"#,
            keypair.public_key().to_hex(),
            record.signature.to_hex()
        )
    );
    assert!(json.contains("3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"));

    let parsed: SignedRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn json_rejects_wrong_lengths() {
    assert!(serde_json::from_str::<Ed25519PublicKey>(r#""abcd""#).is_err());
    assert!(serde_json::from_str::<Ed25519Signature>(r#""not hex at all""#).is_err());
}
