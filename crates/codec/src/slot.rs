//! Storage slots recording validator presence.
//!
//! A validator is recorded by writing its address, left-padded to 32 bytes,
//! into the slot named by that same padded address.

use std::collections::BTreeMap;

use alloy_primitives::{Address, B256};

use crate::ValidatorKey;

/// A storage slot key/value pair. For validator slots `key == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageSlot {
    pub key: B256,
    pub value: B256,
}

impl StorageSlot {
    /// Bytes `[0, 12)` are zero and bytes `[12, 32)` hold the address, for both
    /// the key and the value.
    pub fn for_validator(validator: Address) -> Self {
        let word = validator.into_word();
        Self {
            key: word,
            value: word,
        }
    }
}

/// Everything needed to register a validator: its key and its storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidatorSettings {
    pub key: ValidatorKey,
    pub storage_key: B256,
    pub storage_value: B256,
}

impl ValidatorSettings {
    pub fn for_validator(validator: Address) -> Self {
        let StorageSlot { key, value } = StorageSlot::for_validator(validator);
        Self {
            key: ValidatorKey::from_address(validator),
            storage_key: key,
            storage_value: value,
        }
    }

    pub fn slot(&self) -> StorageSlot {
        StorageSlot {
            key: self.storage_key,
            value: self.storage_value,
        }
    }
}

/// Derives the key and storage slot of `validator`.
pub fn settings_from_address(validator: Address) -> ValidatorSettings {
    ValidatorSettings::for_validator(validator)
}

/// Collects the storage slots of every validator, keyed by slot.
///
/// Duplicate validators collapse into a single entry.
pub fn storage_entries<I>(validators: I) -> BTreeMap<B256, B256>
where
    I: IntoIterator<Item = Address>,
{
    validators
        .into_iter()
        .map(|validator| {
            let StorageSlot { key, value } = StorageSlot::for_validator(validator);
            (key, value)
        })
        .collect()
}
