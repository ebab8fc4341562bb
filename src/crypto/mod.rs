// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic building blocks behind identity key pairs.
mod rng;
pub(crate) mod secret;
pub(crate) mod sha2;
pub mod xeddsa;

pub use rng::{Rng, RngError};
