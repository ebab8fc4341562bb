// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{debug, trace};

use crate::crypto::Rng;
use crate::crypto::xeddsa::XEdDSAError;
use crate::identity::{
    IdentityError, KeyFormatError, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, PrivateKey, PublicKey,
    Signature,
};

/// Long-term Curve25519 key pair identifying a party.
///
/// A key pair never changes after construction, all methods return derived values. It can be
/// shared between threads and used for signing concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityKeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl IdentityKeyPair {
    /// Generates a new key pair with a generator seeded from the operating system.
    ///
    /// The generator is created for this call only and dropped afterwards.
    pub fn generate() -> Result<Self, IdentityError> {
        let rng = Rng::try_from_os_rng().map_err(IdentityError::KeyGenerationFailed)?;
        Self::generate_with_rng(&rng)
    }

    /// Generates a new key pair drawing the private scalar from `rng`.
    pub fn generate_with_rng(rng: &Rng) -> Result<Self, IdentityError> {
        let private_key = PrivateKey::generate(rng).map_err(IdentityError::KeyGenerationFailed)?;
        let key_pair = Self::from_private_key(private_key);
        trace!(public_key = %key_pair.public_key, "generated identity key pair");
        Ok(key_pair)
    }

    /// Derives the key pair belonging to a private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        Self {
            public_key: private_key.public_key(),
            private_key,
        }
    }

    /// Reconstructs a key pair from its bare 32-byte public and private keys.
    ///
    /// Public keys in the typed 33-byte encoding need to be converted with
    /// [`PublicKey::from_typed_bytes`] first.
    ///
    /// The public key is checked to be the curve image of the private scalar, mismatching parts
    /// fail with [`KeyFormatError::KeyMismatch`]. Use
    /// [`IdentityKeyPair::from_raw_parts_unchecked`] to skip that check.
    pub fn from_raw_parts(
        public_key_bytes: &[u8],
        private_key_bytes: &[u8],
    ) -> Result<Self, IdentityError> {
        let public_key = PublicKey::try_from(public_key_bytes)?;
        let private_key = PrivateKey::from_bytes(private_key_bytes)?;
        Self::from_keys(public_key, private_key)
    }

    /// Reconstructs a key pair from its bare 32-byte public and private keys, checking only the
    /// lengths.
    ///
    /// **WARNING:** No validation is done that the public key lies on the curve or belongs to the
    /// private key. Signatures of such a key pair will not verify against its public key.
    pub fn from_raw_parts_unchecked(
        public_key_bytes: &[u8],
        private_key_bytes: &[u8],
    ) -> Result<Self, IdentityError> {
        Ok(Self {
            public_key: PublicKey::try_from(public_key_bytes)?,
            private_key: PrivateKey::from_bytes(private_key_bytes)?,
        })
    }

    pub(crate) fn from_keys(
        public_key: PublicKey,
        private_key: PrivateKey,
    ) -> Result<Self, IdentityError> {
        if private_key.public_key() != public_key {
            debug!(%public_key, "rejected key pair with mismatching public key");
            return Err(KeyFormatError::KeyMismatch.into());
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the bare encoding of the public key.
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public_key.to_bytes()
    }

    /// Returns the bare encoding of the private key.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.private_key.to_bytes()
    }

    /// Signs any data with XEdDSA.
    ///
    /// Every call draws fresh randomness from a generator seeded by the operating system, the
    /// resulting signature is always [`SIGNATURE_SIZE`](crate::SIGNATURE_SIZE) bytes long.
    ///
    /// ## Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use p2panda_identity::IdentityKeyPair;
    ///
    /// let key_pair = IdentityKeyPair::generate()?;
    ///
    /// let bytes = b"test";
    /// let signature = key_pair.sign(bytes)?;
    ///
    /// assert!(IdentityKeyPair::verify(key_pair.public_key(), bytes, &signature).is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn sign(&self, bytes: &[u8]) -> Result<Signature, IdentityError> {
        let rng =
            Rng::try_from_os_rng().map_err(|err| IdentityError::SigningFailed(err.into()))?;
        self.sign_with_rng(bytes, &rng)
    }

    /// Signs any data with XEdDSA, drawing randomness from `rng`.
    pub fn sign_with_rng(&self, bytes: &[u8], rng: &Rng) -> Result<Signature, IdentityError> {
        self.private_key
            .sign(bytes, rng)
            .map_err(IdentityError::SigningFailed)
    }

    /// Verify the integrity of signed data.
    pub fn verify(
        public_key: &PublicKey,
        bytes: &[u8],
        signature: &Signature,
    ) -> Result<(), XEdDSAError> {
        public_key.verify(bytes, signature)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use rstest::rstest;

    use crate::crypto::Rng;
    use crate::crypto::xeddsa::XEdDSAError;
    use crate::identity::{IdentityError, KeyFormatError, PUBLIC_KEY_SIZE};
    use crate::test_utils::setup_logging;

    use super::IdentityKeyPair;

    #[test]
    fn makes_key_pair() {
        setup_logging();

        let key_pair = IdentityKeyPair::generate().unwrap();
        assert_eq!(key_pair.public_key_bytes().len(), PUBLIC_KEY_SIZE);
        assert_eq!(key_pair.private_key_bytes().len(), 32);
        assert_eq!(key_pair.private_key().public_key(), *key_pair.public_key());
    }

    #[test]
    fn round_trip() {
        let rng = Rng::from_seed([1; 32]);

        for _ in 0..16 {
            let key_pair = IdentityKeyPair::generate_with_rng(&rng).unwrap();
            let restored = IdentityKeyPair::from_raw_parts(
                &key_pair.public_key_bytes(),
                &key_pair.private_key_bytes(),
            )
            .unwrap();

            assert_eq!(restored.public_key_bytes(), key_pair.public_key_bytes());
            assert_eq!(restored.private_key_bytes(), key_pair.private_key_bytes());
            assert_eq!(restored, key_pair);
        }
    }

    #[test]
    fn deterministic_generation() {
        let key_pair_1 = IdentityKeyPair::generate_with_rng(&Rng::from_seed([5; 32])).unwrap();
        let key_pair_2 = IdentityKeyPair::generate_with_rng(&Rng::from_seed([5; 32])).unwrap();
        assert_eq!(key_pair_1, key_pair_2);
    }

    #[test]
    fn unique_private_keys() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let key_pair = IdentityKeyPair::generate().unwrap();
            assert!(seen.insert(key_pair.private_key_bytes()));
        }
    }

    #[rstest]
    #[case(31, 32)]
    #[case(33, 32)]
    #[case(32, 31)]
    #[case(32, 33)]
    fn raw_parts_invalid_length(#[case] public_len: usize, #[case] private_len: usize) {
        let key_pair = IdentityKeyPair::generate_with_rng(&Rng::from_seed([2; 32])).unwrap();

        let mut public_key = key_pair.public_key_bytes().to_vec();
        public_key.resize(public_len, 0);
        let mut private_key = key_pair.private_key_bytes().to_vec();
        private_key.resize(private_len, 0);

        assert!(matches!(
            IdentityKeyPair::from_raw_parts(&public_key, &private_key),
            Err(IdentityError::InvalidKeyFormat(
                KeyFormatError::InvalidLength(_, 32)
            ))
        ));
        assert!(matches!(
            IdentityKeyPair::from_raw_parts_unchecked(&public_key, &private_key),
            Err(IdentityError::InvalidKeyFormat(
                KeyFormatError::InvalidLength(_, 32)
            ))
        ));
    }

    #[test]
    fn raw_parts_mismatch() {
        let rng = Rng::from_seed([3; 32]);
        let key_pair_1 = IdentityKeyPair::generate_with_rng(&rng).unwrap();
        let key_pair_2 = IdentityKeyPair::generate_with_rng(&rng).unwrap();

        assert!(matches!(
            IdentityKeyPair::from_raw_parts(
                &key_pair_1.public_key_bytes(),
                &key_pair_2.private_key_bytes(),
            ),
            Err(IdentityError::InvalidKeyFormat(KeyFormatError::KeyMismatch))
        ));

        // The unchecked variant accepts the pair, but its signatures are useless.
        let broken = IdentityKeyPair::from_raw_parts_unchecked(
            &key_pair_1.public_key_bytes(),
            &key_pair_2.private_key_bytes(),
        )
        .unwrap();
        let signature = broken.sign_with_rng(b"test", &rng).unwrap();
        assert!(matches!(
            IdentityKeyPair::verify(broken.public_key(), b"test", &signature),
            Err(XEdDSAError::VerificationFailed)
        ));
    }

    #[test]
    fn signing() {
        let key_pair = IdentityKeyPair::generate().unwrap();
        let bytes = b"test";
        let signature = key_pair.sign(bytes).unwrap();
        assert_eq!(signature.as_bytes().len(), 64);
        assert!(IdentityKeyPair::verify(key_pair.public_key(), bytes, &signature).is_ok());

        // Invalid data
        assert!(IdentityKeyPair::verify(key_pair.public_key(), b"not test", &signature).is_err());

        // Invalid public key
        let key_pair_2 = IdentityKeyPair::generate().unwrap();
        assert!(IdentityKeyPair::verify(key_pair_2.public_key(), bytes, &signature).is_err());
    }

    #[test]
    fn signing_leaves_key_pair_untouched() {
        let key_pair = IdentityKeyPair::generate().unwrap();
        let before = key_pair.clone();

        for len in [0, 1, 64, 1024] {
            let bytes = vec![42u8; len];
            let signature = key_pair.sign(&bytes).unwrap();
            assert!(key_pair.public_key().verify(&bytes, &signature).is_ok());
        }

        assert_eq!(key_pair, before);
    }

    #[test]
    fn concurrent_signing() {
        let key_pair = Arc::new(IdentityKeyPair::generate().unwrap());

        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let key_pair = key_pair.clone();
                thread::spawn(move || {
                    let bytes = [i; 16];
                    let signature = key_pair.sign(&bytes).unwrap();
                    (bytes, signature)
                })
            })
            .collect();

        for handle in handles {
            let (bytes, signature) = handle.join().unwrap();
            assert!(key_pair.public_key().verify(&bytes, &signature).is_ok());
        }
    }
}
