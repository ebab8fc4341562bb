// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curve25519 identity key pairs, their key material and XEdDSA signatures.
mod error;
mod key_pair;
mod private_key;
mod public_key;
mod signature;

pub use error::{IdentityError, KeyFormatError};
pub use key_pair::IdentityKeyPair;
pub use private_key::{PRIVATE_KEY_SIZE, PrivateKey};
pub use public_key::{KEY_TYPE_DJB, PUBLIC_KEY_SIZE, PublicKey, TYPED_PUBLIC_KEY_SIZE};
pub use signature::{SIGNATURE_SIZE, Signature};
