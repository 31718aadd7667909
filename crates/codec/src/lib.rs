//! Validator identity codec.
//!
//! Converts between the three representations of a validator:
//!
//! - **address**: the 20-byte account address,
//! - **key**: the address zero-extended to 192 bits ([`ValidatorKey`]),
//! - **nonce**: a 256-bit word packing a key and a 64-bit sequence number
//!   as `(key << 64) | sequence` ([`ValidatorNonce`]).
//!
//! It also derives the storage slot used to record a validator on chain
//! ([`StorageSlot`]), where the left-padded address is both slot and value.
//!
//! ## Layout
//!
//! ```text
//!  255              224                                 64                 0
//! +------------------+-----------------------------------+------------------+
//! | zero (codec out) |         address (160 bits)        |  sequence (u64)  |
//! +------------------+-----------------------------------+------------------+
//! |<--------------------- key (192 bits) --------------->|
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub use error::RangeError;

pub mod key;
pub use key::{ValidatorKey, address_from_key, key_from_address};

pub mod nonce;
pub use nonce::{
    ValidatorNonce, address_from_nonce, key_from_nonce, nonce_from_key_and_sequence,
    sequence_from_nonce, try_nonce_from_parts,
};

pub mod slot;
pub use slot::{StorageSlot, ValidatorSettings, settings_from_address, storage_entries};

pub use alloy_primitives::aliases::U192;

/// Width of a validator address in bits.
pub const ADDRESS_BITS: usize = 160;
/// Width of a validator address in bytes.
pub const ADDRESS_BYTES: usize = ADDRESS_BITS / 8;

/// Width of a validator key in bits.
pub const KEY_BITS: usize = 192;
/// Width of a validator key in bytes.
pub const KEY_BYTES: usize = KEY_BITS / 8;

/// Width of the sequence number packed into the low bits of a nonce.
pub const SEQUENCE_BITS: usize = 64;

/// Width of a nonce in bits.
pub const NONCE_BITS: usize = 256;

/// Width of a storage slot key or value in bytes.
pub const SLOT_BYTES: usize = 32;
