//! Definitions to read a validator set from disk.
//!
//! A validator set is a toml file listing validator addresses and, optionally,
//! the contract whose storage records them:
//!
//! ```toml
//! contract = "0x0000000000000000000000000000000000001000"
//! validators = [
//!     "0xF62849F9A0B5Bf2913b396098F7c7019b51A820a",
//! ]
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use alloy_primitives::{Address, B256};
use validator_codec::{ValidatorSettings, storage_entries};


/// A set of validators to be recorded in contract storage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Contract whose storage holds the validator set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Address>,

    pub validators: Vec<Address>,
}

impl Config {
    /// Parses and validates [`Config`] from a toml formatted file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::parse(&file_contents)
    }

    /// Parses and validates [`Config`] from toml formatted `contents`.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let this: Self = toml::from_str(contents)?;
        this.validate()?;
        tracing::debug!(
            validators = this.validators.len(),
            contract = ?this.contract,
            "parsed validator set",
        );
        Ok(this)
    }

    /// Rejects empty sets and validators listed more than once.
    pub fn validate(&self) -> Result<(), Error> {
        if self.validators.is_empty() {
            return Err(Error::NoValidators);
        }
        let mut seen = HashSet::with_capacity(self.validators.len());
        for validator in &self.validators {
            if !seen.insert(validator) {
                return Err(Error::DuplicateValidator(*validator));
            }
        }
        Ok(())
    }

    /// Key and storage slot of every validator, in file order.
    pub fn settings(&self) -> impl Iterator<Item = ValidatorSettings> + '_ {
        self.validators
            .iter()
            .copied()
            .map(ValidatorSettings::for_validator)
    }

    /// Storage slot/value pairs recording the whole set.
    pub fn storage(&self) -> BTreeMap<B256, B256> {
        storage_entries(self.validators.iter().copied())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open file for reading")]
    OpenFile(#[from] std::io::Error),
    #[error("failed parsing file contents")]
    Parse(#[from] toml::de::Error),
    #[error("validator set is empty")]
    NoValidators,
    #[error("validator `{0}` is listed more than once")]
    DuplicateValidator(Address),
}
