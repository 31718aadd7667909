use alloy_primitives::U256;

/// An input exceeded the bit width of the field it is packed into.
///
/// Packing never truncates: a key or sequence that does not fit is rejected
/// here instead of silently corrupting the nonce layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("validator key `{key}` does not fit in 192 bits")]
    KeyOutOfRange { key: U256 },
    #[error("sequence `{sequence}` does not fit in 64 bits")]
    SequenceOutOfRange { sequence: U256 },
}
