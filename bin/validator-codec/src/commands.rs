use std::{collections::BTreeMap, path::PathBuf};

use alloy_primitives::{B256, U256};
use eyre::WrapErr as _;
use validator_codec::{
    ValidatorKey, ValidatorNonce, key_from_address, settings_from_address, try_nonce_from_parts,
};

#[derive(Debug, clap::Args)]
pub(crate) struct Key {
    /// Validator address, with or without checksum casing.
    address: alloy_primitives::Address,
}

impl Key {
    pub(crate) fn output(self) -> eyre::Result<String> {
        Ok(key_from_address(self.address).to_string())
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct Settings {
    /// Validator address, with or without checksum casing.
    address: alloy_primitives::Address,
}

impl Settings {
    pub(crate) fn output(self) -> eyre::Result<String> {
        serde_json::to_string_pretty(&settings_from_address(self.address))
            .wrap_err("failed serializing validator settings")
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct Nonce {
    /// Validator key, decimal or 0x-prefixed hex. Must fit in 192 bits.
    #[arg(long)]
    key: U256,

    /// Sequence number, decimal or 0x-prefixed hex. Must fit in 64 bits.
    #[arg(long)]
    sequence: U256,

    /// Print the nonce as 32 bytes of big-endian hex instead of decimal.
    #[arg(long, default_value_t = false)]
    hex: bool,
}

impl Nonce {
    pub(crate) fn output(self) -> eyre::Result<String> {
        let nonce = try_nonce_from_parts(self.key, self.sequence).wrap_err("failed packing nonce")?;
        if self.hex {
            Ok(B256::from(nonce.to_be_bytes()).to_string())
        } else {
            Ok(nonce.to_string())
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct Decode {
    /// Nonce, decimal or 0x-prefixed hex.
    nonce: U256,
}

#[derive(Debug, serde::Serialize)]
struct DecodedNonce {
    key: ValidatorKey,
    sequence: u64,
    validator: alloy_primitives::Address,
}

impl Decode {
    pub(crate) fn output(self) -> eyre::Result<String> {
        let nonce = ValidatorNonce::from(self.nonce);
        let key = nonce.key();
        if !key.is_address_derived() {
            tracing::warn!(%nonce, "nonce sets bits above 224; the validator address ignores them");
        }
        let decoded = DecodedNonce {
            key,
            sequence: nonce.sequence(),
            validator: key.to_address(),
        };
        serde_json::to_string_pretty(&decoded).wrap_err("failed serializing decoded nonce")
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct Address {
    /// Validator key, decimal or 0x-prefixed hex. Must fit in 192 bits.
    key: U256,
}

impl Address {
    pub(crate) fn output(self) -> eyre::Result<String> {
        let key = ValidatorKey::try_from(self.key).wrap_err("invalid validator key")?;
        if !key.is_address_derived() {
            tracing::warn!(%key, "key sets bits above 160; they are dropped from the address");
        }
        Ok(key.to_address().to_string())
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenesisStorage {
    /// Validator set file in toml format.
    #[arg(long, value_name = "FILE")]
    config: PathBuf,
}

#[derive(Debug, serde::Serialize)]
struct GenesisAccountStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<alloy_primitives::Address>,
    storage: BTreeMap<B256, B256>,
}

impl GenesisStorage {
    pub(crate) fn output(self) -> eyre::Result<String> {
        let config = validator_codec_config::Config::from_file(&self.config).wrap_err_with(|| {
            format!(
                "failed parsing validator set from provided argument `{}`",
                self.config.display()
            )
        })?;
        tracing::info!(
            validators = config.validators.len(),
            contract = ?config.contract,
            "exporting validator set storage",
        );
        let export = GenesisAccountStorage {
            address: config.contract,
            storage: config.storage(),
        };
        serde_json::to_string_pretty(&export).wrap_err("failed serializing storage")
    }
}
