// SPDX-License-Identifier: MIT OR Apache-2.0

use p2panda_identity::test_utils::setup_logging;
use p2panda_identity::{
    IdentityError, IdentityKeyPair, KEY_TYPE_DJB, KeyFormatError, PublicKey, Rng, SIGNATURE_SIZE,
    XEdDSAError,
};

#[test]
fn legacy_typed_key_flow() {
    setup_logging();

    let key_pair = IdentityKeyPair::generate().unwrap();

    let public_key = key_pair.public_key_bytes();
    assert_eq!(public_key.len(), 32);

    let typed_public_key = PublicKey::from_bytes(public_key).to_typed_bytes();
    assert_eq!(typed_public_key.len(), 33);
    assert_eq!(typed_public_key[0], KEY_TYPE_DJB);

    let signature = key_pair.sign(b"test").unwrap();
    assert_eq!(signature.to_bytes().len(), SIGNATURE_SIZE);

    // A legacy caller strips the type byte before verifying.
    let received = PublicKey::from_typed_bytes(&typed_public_key).unwrap();
    assert!(received.verify(b"test", &signature).is_ok());

    let other_key_pair = IdentityKeyPair::generate().unwrap();
    assert!(matches!(
        other_key_pair.public_key().verify(b"test", &signature),
        Err(XEdDSAError::VerificationFailed)
    ));
}

#[test]
fn reconstruct_from_typed_public_key() {
    let rng = Rng::from_seed([7; 32]);
    let key_pair = IdentityKeyPair::generate_with_rng(&rng).unwrap();
    let typed_public_key = key_pair.public_key().to_typed_bytes();

    // Typed keys are rejected by the constructor, they need to be converted first.
    assert!(matches!(
        IdentityKeyPair::from_raw_parts(&typed_public_key, &key_pair.private_key_bytes()),
        Err(IdentityError::InvalidKeyFormat(KeyFormatError::InvalidLength(33, 32)))
    ));

    let public_key = PublicKey::from_typed_bytes(&typed_public_key).unwrap();
    let restored =
        IdentityKeyPair::from_raw_parts(public_key.as_bytes(), &key_pair.private_key_bytes())
            .unwrap();
    assert_eq!(restored, key_pair);

    let signature = restored.sign_with_rng(b"Hello, Panda!", &rng).unwrap();
    assert!(IdentityKeyPair::verify(key_pair.public_key(), b"Hello, Panda!", &signature).is_ok());
}

#[test]
fn debug_output_hides_private_key() {
    let key_pair = IdentityKeyPair::generate().unwrap();
    let private_key_hex = hex::encode(key_pair.private_key_bytes());

    let debug = format!("{:?}", key_pair);
    assert!(debug.contains("***"));
    assert!(!debug.contains(&private_key_hex));
    assert!(!debug.contains(&format!("{:?}", key_pair.private_key_bytes())));
}

#[test]
fn key_pairs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IdentityKeyPair>();
    assert_send_sync::<PublicKey>();
    assert_send_sync::<Rng>();
}
