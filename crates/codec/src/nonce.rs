//! Validator nonces: a key and a sequence number packed into one 256-bit word.
//!
//! Bits `[0, 64)` hold the sequence and bits `[64, 256)` hold the key. In limb
//! terms the sequence is limb 0 and the key occupies limbs 1 through 3, which
//! is what the packing below operates on.

use alloy_primitives::{Address, U256};

use crate::{RangeError, U192, ValidatorKey};

/// A 256-bit nonce laid out as `(key << 64) | sequence`.
///
/// Any 256-bit value is a valid nonce to decode. Nonces compare numerically,
/// so two nonces sharing a key are ordered by their sequence number.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidatorNonce(U256);

impl ValidatorNonce {
    pub const ZERO: Self = Self(U256::ZERO);

    /// Packs `key` and `sequence`. Both are width-checked by their types, so
    /// this cannot fail.
    pub fn new(key: ValidatorKey, sequence: u64) -> Self {
        let [k0, k1, k2] = key.limbs();
        Self(U256::from_limbs([sequence, k0, k1, k2]))
    }

    /// Packs a key and sequence given as wide integers, rejecting either one
    /// if it does not fit its field.
    pub fn try_from_parts(key: U256, sequence: U256) -> Result<Self, RangeError> {
        let key = ValidatorKey::try_from(key)?;
        let [s0, s1, s2, s3] = *sequence.as_limbs();
        if s1 | s2 | s3 != 0 {
            return Err(RangeError::SequenceOutOfRange { sequence });
        }
        Ok(Self::new(key, s0))
    }

    /// Bits `[64, 256)` of the nonce.
    pub fn key(&self) -> ValidatorKey {
        let [_, k0, k1, k2] = *self.0.as_limbs();
        ValidatorKey::new(U192::from_limbs([k0, k1, k2]))
    }

    /// Bits `[0, 64)` of the nonce.
    pub fn sequence(&self) -> u64 {
        self.0.as_limbs()[0]
    }

    /// The validator address held in bits `[64, 224)`.
    pub fn validator(&self) -> Address {
        self.key().to_address()
    }

    pub const fn into_inner(self) -> U256 {
        self.0
    }

    /// Big-endian encoding of the nonce.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }
}

/// Packs `key` and `sequence` into a nonce.
pub fn nonce_from_key_and_sequence(key: ValidatorKey, sequence: u64) -> ValidatorNonce {
    ValidatorNonce::new(key, sequence)
}

/// Range-checked form of [`nonce_from_key_and_sequence`] for wide inputs.
pub fn try_nonce_from_parts(key: U256, sequence: U256) -> Result<ValidatorNonce, RangeError> {
    ValidatorNonce::try_from_parts(key, sequence)
}

/// Extracts the key, i.e. `nonce >> 64`.
pub fn key_from_nonce(nonce: ValidatorNonce) -> ValidatorKey {
    nonce.key()
}

/// Extracts the sequence, i.e. `nonce & (2^64 - 1)`.
pub fn sequence_from_nonce(nonce: ValidatorNonce) -> u64 {
    nonce.sequence()
}

/// Recovers the validator address embedded in `nonce`.
pub fn address_from_nonce(nonce: ValidatorNonce) -> Address {
    nonce.validator()
}
