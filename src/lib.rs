// SPDX-License-Identifier: MIT OR Apache-2.0

//! `p2panda-identity` provides long-term identity key pairs on Curve25519.
//!
//! An [`IdentityKeyPair`] holds an X25519 private scalar together with its public Montgomery
//! point. The same key pair can be used for Diffie-Hellman style key agreement in other crates
//! and for signing arbitrary data with
//! [XEdDSA](https://signal.org/docs/specifications/xeddsa/), without converting keys between
//! curve representations.
//!
//! ## Key encodings
//!
//! Keys are exported and imported in their _bare_ form: 32 raw bytes without any prefix. Some
//! legacy wire formats expect public keys in a _typed_ form, where a single type byte (`0x05` for
//! Curve25519) precedes the point. Use [`PublicKey::to_typed_bytes`] and
//! [`PublicKey::from_typed_bytes`] to convert between both.
//!
//! Signatures are always [`SIGNATURE_SIZE`] (64) bytes long.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use p2panda_identity::{IdentityKeyPair, PublicKey};
//!
//! let key_pair = IdentityKeyPair::generate()?;
//!
//! // Export and re-import the key pair.
//! let restored = IdentityKeyPair::from_raw_parts(
//!     &key_pair.public_key_bytes(),
//!     &key_pair.private_key_bytes(),
//! )?;
//! assert_eq!(key_pair, restored);
//!
//! // Sign some data and verify it with the public key.
//! let signature = key_pair.sign(b"test")?;
//! assert!(key_pair.public_key().verify(b"test", &signature).is_ok());
//!
//! // Legacy consumers expect a type byte in front of the public key.
//! let typed = key_pair.public_key().to_typed_bytes();
//! assert_eq!(typed[0], 0x05);
//! assert_eq!(PublicKey::from_typed_bytes(&typed)?, *key_pair.public_key());
//! # Ok(())
//! # }
//! ```
//!
//! ## Security
//!
//! Private key bytes are zeroized when dropped and are never revealed when printing debug
//! information. Comparisons of private keys run in constant time.
mod crypto;
pub mod identity;
mod serde;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use crypto::xeddsa::XEdDSAError;
pub use crypto::{Rng, RngError};
pub use identity::{
    IdentityError, IdentityKeyPair, KEY_TYPE_DJB, KeyFormatError, PRIVATE_KEY_SIZE,
    PUBLIC_KEY_SIZE, PrivateKey, PublicKey, SIGNATURE_SIZE, Signature, TYPED_PUBLIC_KEY_SIZE,
};
