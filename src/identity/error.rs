// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for creating key pairs, parsing key material and signing.
use thiserror::Error;

use crate::crypto::RngError;
use crate::crypto::xeddsa::XEdDSAError;

/// Errors surfaced by identity key pairs and their key material.
///
/// None of these are retried internally, a failed construction never returns a partial value.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Key bytes have the wrong length, carry the wrong type byte or do not form a pair.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(#[from] KeyFormatError),

    /// Operating system randomness was not available.
    #[error("key generation failed: {0}")]
    KeyGenerationFailed(#[source] RngError),

    /// Internal fault while computing a signature.
    #[error("signing failed: {0}")]
    SigningFailed(#[source] XEdDSAError),

    /// Signature bytes do not have the right length.
    #[error("invalid signature length {0} bytes, expected {1} bytes")]
    InvalidSignatureLength(usize, usize),

    /// String contains invalid hexadecimal characters.
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),
}

/// Details on why key bytes were rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyFormatError {
    #[error("invalid key length {0} bytes, expected {1} bytes")]
    InvalidLength(usize, usize),

    #[error("invalid key type byte {0:#04x}, expected 0x05")]
    InvalidKeyType(u8),

    #[error("public key does not belong to private key")]
    KeyMismatch,
}
