pub const BYTE: usize = 8;
pub const HASH_SIZE: usize = 32;
pub const HASH_BITS: u32 = (HASH_SIZE * BYTE) as u32;
pub const DEFAULT_DIFFICULTY_BITS: u32 = 24;
/// Exclusive upper bound of the nonce search.
pub const MAX_NONCE: i64 = i64::MAX;
pub const GENESIS_DATA: &[u8] = b"Genesis";
