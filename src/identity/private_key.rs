// SPDX-License-Identifier: MIT OR Apache-2.0

use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::crypto::secret::Secret;
use crate::crypto::xeddsa::{XEdDSAError, xeddsa_sign};
use crate::crypto::{Rng, RngError};
use crate::identity::{IdentityError, KeyFormatError, PublicKey, Signature};

/// 256-bit private key size.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Private Curve25519 scalar of an identity, used for XEdDSA signatures.
///
/// Bytes are clamped on construction and zeroized when the key is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey(Secret<PRIVATE_KEY_SIZE>);

impl PrivateKey {
    pub(crate) fn generate(rng: &Rng) -> Result<Self, RngError> {
        Ok(Self::from_array(rng.random_array()?))
    }

    /// Parses a private key from its 32-byte encoding.
    ///
    /// The scalar is clamped like X25519 does it, so [`PrivateKey::to_bytes`] can differ from the
    /// input when the bytes were not clamped before.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        let bytes: [u8; PRIVATE_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| KeyFormatError::InvalidLength(bytes.len(), PRIVATE_KEY_SIZE))?;
        Ok(Self::from_array(bytes))
    }

    fn from_array(mut bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        // Clamping
        bytes[0] &= 248u8;
        bytes[31] &= 127u8;
        bytes[31] |= 64u8;
        let private_key = Self(Secret::from_bytes(bytes));
        bytes.zeroize();
        private_key
    }

    pub(crate) fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Returns the bare encoding of this key.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        *self.0.as_bytes()
    }

    /// Derives the public key with a fixed base-point multiplication.
    pub fn public_key(&self) -> PublicKey {
        let secret = StaticSecret::from(*self.0.as_bytes());
        PublicKey::from_bytes(X25519PublicKey::from(&secret).to_bytes())
    }

    /// Signs `bytes` with XEdDSA, drawing the signature nonce randomness from `rng`.
    pub fn sign(&self, bytes: &[u8], rng: &Rng) -> Result<Signature, XEdDSAError> {
        xeddsa_sign(bytes, self, rng)
    }
}
