// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::identity::IdentityError;

/// 512-bit signature.
pub const SIGNATURE_SIZE: usize = 64;

/// XEdDSA signature, the encoded point `R` followed by the scalar `s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = IdentityError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let value_len = value.len();

        let checked_value: [u8; SIGNATURE_SIZE] = value
            .try_into()
            .map_err(|_| IdentityError::InvalidSignatureLength(value_len, SIGNATURE_SIZE))?;

        Ok(Self(checked_value))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use crate::identity::IdentityError;

    use super::{SIGNATURE_SIZE, Signature};

    #[test]
    fn from_slice() {
        let bytes = [3u8; SIGNATURE_SIZE];
        let signature = Signature::try_from(&bytes[..]).unwrap();
        assert_eq!(signature.to_bytes(), bytes);
        assert_eq!(signature.to_string(), "03".repeat(SIGNATURE_SIZE));

        assert!(matches!(
            Signature::try_from(&bytes[..63]),
            Err(IdentityError::InvalidSignatureLength(63, 64))
        ));
    }
}
