// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::crypto::xeddsa::{XEdDSAError, xeddsa_verify};
use crate::identity::{IdentityError, KeyFormatError, Signature};

/// 256-bit public key size.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a public key with its leading type byte.
pub const TYPED_PUBLIC_KEY_SIZE: usize = PUBLIC_KEY_SIZE + 1;

/// Type byte identifying Curve25519 keys in typed encodings.
pub const KEY_TYPE_DJB: u8 = 0x05;

/// Public Curve25519 key (Montgomery u-coordinate) of an identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wraps a public key in its bare encoding.
    ///
    /// No check is done that the bytes represent a point on the curve, this happens when
    /// verifying signatures.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parses a public key in its typed encoding, a `0x05` type byte followed by the bare key.
    ///
    /// ## Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use p2panda_identity::{IdentityKeyPair, PublicKey};
    ///
    /// let key_pair = IdentityKeyPair::generate()?;
    /// let typed = key_pair.public_key().to_typed_bytes();
    ///
    /// let public_key = PublicKey::from_typed_bytes(&typed)?;
    /// assert_eq!(public_key.to_bytes(), key_pair.public_key_bytes());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_typed_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        if bytes.len() != TYPED_PUBLIC_KEY_SIZE {
            return Err(KeyFormatError::InvalidLength(bytes.len(), TYPED_PUBLIC_KEY_SIZE).into());
        }

        if bytes[0] != KEY_TYPE_DJB {
            return Err(KeyFormatError::InvalidKeyType(bytes[0]).into());
        }

        Self::try_from(&bytes[1..])
    }

    /// Returns the typed encoding, the bare key prefixed with the `0x05` type byte.
    pub fn to_typed_bytes(&self) -> [u8; TYPED_PUBLIC_KEY_SIZE] {
        let mut typed = [0u8; TYPED_PUBLIC_KEY_SIZE];
        typed[0] = KEY_TYPE_DJB;
        typed[1..].copy_from_slice(&self.0);
        typed
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Returns the bare encoding of this key.
    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Verifies an XEdDSA signature over `bytes` created by the private counterpart of this key.
    pub fn verify(&self, bytes: &[u8], signature: &Signature) -> Result<(), XEdDSAError> {
        xeddsa_verify(bytes, self, signature)
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(value: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self::from_bytes(value)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = IdentityError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let value_len = value.len();

        let checked_value: [u8; PUBLIC_KEY_SIZE] = value
            .try_into()
            .map_err(|_| KeyFormatError::InvalidLength(value_len, PUBLIC_KEY_SIZE))?;

        Ok(Self(checked_value))
    }
}

impl FromStr for PublicKey {
    type Err = IdentityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(hex::decode(value)?.as_slice())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
