//! Validator keys: addresses zero-extended to 192 bits.

use alloy_primitives::{Address, U256};

use crate::{ADDRESS_BITS, ADDRESS_BYTES, KEY_BYTES, RangeError, U192};

/// A validator address zero-extended to 192 bits.
///
/// Keys built with [`ValidatorKey::from_address`] always have their top 32
/// bits cleared. Keys recovered from arbitrary nonces may not, in which case
/// [`ValidatorKey::to_address`] drops the extra bits.
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
pub struct ValidatorKey(U192);

impl ValidatorKey {
    pub const ZERO: Self = Self(U192::ZERO);
    pub const MAX: Self = Self(U192::MAX);

    pub const fn new(value: U192) -> Self {
        Self(value)
    }

    /// Zero-extends `address` into a key. Numerically the key equals the address.
    pub fn from_address(address: Address) -> Self {
        let mut bytes = [0u8; KEY_BYTES];
        bytes[KEY_BYTES - ADDRESS_BYTES..].copy_from_slice(address.as_slice());
        Self(U192::from_be_bytes(bytes))
    }

    /// Returns the low 160 bits of the key as an address.
    ///
    /// Bits above 160 are discarded rather than rejected. Keys obtained from
    /// [`ValidatorKey::from_address`] never carry such bits, so for them this
    /// is the exact inverse.
    pub fn to_address(self) -> Address {
        if !self.is_address_derived() {
            tracing::trace!(key = %self, "discarding key bits above 160 while recovering address");
        }
        let bytes = self.0.to_be_bytes::<KEY_BYTES>();
        Address::from_slice(&bytes[KEY_BYTES - ADDRESS_BYTES..])
    }

    /// Whether the key fits in 160 bits, i.e. round-trips through an address.
    pub fn is_address_derived(&self) -> bool {
        self.0.bit_len() <= ADDRESS_BITS
    }

    /// The key as a 256-bit word.
    pub fn to_u256(self) -> U256 {
        let [l0, l1, l2] = self.limbs();
        U256::from_limbs([l0, l1, l2, 0])
    }

    /// Little-endian 64-bit limbs of the key.
    pub(crate) fn limbs(&self) -> [u64; 3] {
        *self.0.as_limbs()
    }

    pub const fn into_inner(self) -> U192 {
        self.0
    }
}

impl From<Address> for ValidatorKey {
    fn from(address: Address) -> Self {
        Self::from_address(address)
    }
}

impl From<ValidatorKey> for U256 {
    fn from(key: ValidatorKey) -> Self {
        key.to_u256()
    }
}

impl TryFrom<U256> for ValidatorKey {
    type Error = RangeError;

    fn try_from(key: U256) -> Result<Self, Self::Error> {
        let [l0, l1, l2, l3] = *key.as_limbs();
        if l3 != 0 {
            return Err(RangeError::KeyOutOfRange { key });
        }
        Ok(Self(U192::from_limbs([l0, l1, l2])))
    }
}

/// Derives the validator key of `address`.
pub fn key_from_address(address: Address) -> ValidatorKey {
    ValidatorKey::from_address(address)
}

/// Recovers the validator address held in the low 160 bits of `key`.
pub fn address_from_key(key: ValidatorKey) -> Address {
    key.to_address()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use proptest::prelude::*;

    const VALIDATOR: Address = address!("0xF62849F9A0B5Bf2913b396098F7c7019b51A820a");

    fn validator_key() -> ValidatorKey {
        ValidatorKey::new(
            "1405310203571408291950365054053061012934685786634"
                .parse()
                .unwrap(),
        )
    }

    #[test]
    fn test_key_from_address() {
        assert_eq!(key_from_address(VALIDATOR), validator_key());
    }

    #[test]
    fn test_address_from_key() {
        assert_eq!(address_from_key(validator_key()), VALIDATOR);
    }

    #[test]
    fn test_zero_address() {
        let key = key_from_address(Address::ZERO);
        assert_eq!(key, ValidatorKey::ZERO);
        assert_eq!(address_from_key(key), Address::ZERO);
    }

    #[test]
    fn test_max_address_sets_exactly_160_bits() {
        let key = key_from_address(Address::repeat_byte(0xff));
        assert!(key.is_address_derived());
        assert_eq!(key.into_inner().bit_len(), ADDRESS_BITS);
        assert_eq!(key.into_inner(), (U192::from(1) << ADDRESS_BITS) - U192::from(1));
    }

    #[test]
    fn test_address_from_key_truncates_high_bits() {
        let high_bits = U192::from(0xdead_beefu64) << ADDRESS_BITS;
        let key = ValidatorKey::new(high_bits | validator_key().into_inner());

        assert!(!key.is_address_derived());
        assert_eq!(address_from_key(key), VALIDATOR);
        assert_eq!(address_from_key(ValidatorKey::MAX), Address::repeat_byte(0xff));
    }

    #[test]
    fn test_try_from_u256() {
        let max = U256::MAX >> 64;
        assert_eq!(ValidatorKey::try_from(max), Ok(ValidatorKey::MAX));
        assert_eq!(ValidatorKey::try_from(U256::ZERO), Ok(ValidatorKey::ZERO));

        let too_wide = max + U256::from(1);
        assert_eq!(
            ValidatorKey::try_from(too_wide),
            Err(RangeError::KeyOutOfRange { key: too_wide })
        );
    }

    #[test]
    fn test_widen_to_u256() {
        assert_eq!(ValidatorKey::MAX.to_u256(), U256::MAX >> 64);
        assert_eq!(
            validator_key().to_u256(),
            U256::from_be_slice(VALIDATOR.as_slice())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_key_serde_is_transparent() {
        let key = key_from_address(VALIDATOR);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, serde_json::to_string(&key.into_inner()).unwrap());
        assert_eq!(serde_json::from_str::<ValidatorKey>(&json).unwrap(), key);
    }

    fn arb_address() -> impl Strategy<Value = Address> {
        any::<[u8; 20]>().prop_map(Address::from)
    }

    fn arb_key() -> impl Strategy<Value = ValidatorKey> {
        any::<[u64; 3]>().prop_map(|limbs| ValidatorKey::new(U192::from_limbs(limbs)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn proptest_address_key_roundtrip(address in arb_address()) {
            let key = key_from_address(address);
            prop_assert!(key.is_address_derived());
            prop_assert_eq!(address_from_key(key), address);
        }

        #[test]
        fn proptest_key_equals_address_value(address in arb_address()) {
            let key = key_from_address(address);
            prop_assert_eq!(key.to_u256(), U256::from_be_slice(address.as_slice()));
        }

        #[test]
        fn proptest_widen_narrow_roundtrip(key in arb_key()) {
            prop_assert_eq!(ValidatorKey::try_from(key.to_u256()), Ok(key));
        }
    }
}
