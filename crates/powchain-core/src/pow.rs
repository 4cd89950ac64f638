//! Proof-of-work: target computation, preimage layout, nonce search and validation.

use std::fmt;
use std::ops::Range;

use tracing::{debug, info};

use crate::block::Block;
use crate::constants::{BYTE, DEFAULT_DIFFICULTY_BITS, HASH_BITS, HASH_SIZE, MAX_NONCE};
use crate::encoding::push_hex;
use crate::error::{ChainError, Result};
use crate::{sha256, Hash};

/// Number of leading bits a valid hash must have clear, in `1..256`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u32);

impl Difficulty {
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits >= HASH_BITS {
            return Err(ChainError::InvalidDifficulty(bits));
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// `2^(256 - bits)` as a big-endian 256-bit integer.
    pub fn target(self) -> Hash {
        let shift = (HASH_BITS - self.0) as usize;
        let mut target = [0u8; HASH_SIZE];
        target[HASH_SIZE - 1 - shift / BYTE] = 1 << (shift % BYTE);
        target
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY_BITS)
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = ChainError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<Difficulty> for u32 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Big-endian comparison: byte arrays of equal length order like the integers they encode.
pub fn meets_target(hash: &Hash, target: &Hash) -> bool {
    hash < target
}

/// A hash meets `Difficulty::new(n)` exactly when this is at least `n`.
pub fn count_leading_zero_bits(hash: &Hash) -> u32 {
    match hash.iter().position(|&b| b != 0) {
        Some(i) => (i * BYTE) as u32 + hash[i].leading_zeros(),
        None => HASH_BITS,
    }
}

/// One mining attempt over a candidate block's fixed fields. Only the nonce varies.
#[derive(Clone, Debug)]
pub struct ProofOfWork<'a> {
    previous_hash: &'a [u8],
    data: &'a [u8],
    timestamp: i64,
    difficulty: Difficulty,
    target: Hash,
}

impl<'a> ProofOfWork<'a> {
    pub fn new(
        previous_hash: &'a [u8],
        data: &'a [u8],
        timestamp: i64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            previous_hash,
            data,
            timestamp,
            difficulty,
            target: difficulty.target(),
        }
    }

    pub fn for_block(block: &'a Block, difficulty: Difficulty) -> Self {
        Self::new(block.previous_hash(), block.data(), block.timestamp(), difficulty)
    }

    pub fn target(&self) -> &Hash {
        &self.target
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// `previous_hash ‖ data ‖ hex(timestamp) ‖ hex(bits) ‖ hex(nonce)`, no delimiters.
    pub fn prepare_data(&self, nonce: i64) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.previous_hash.len() + self.data.len() + 3 * 17);
        bytes.extend_from_slice(self.previous_hash);
        bytes.extend_from_slice(self.data);
        push_hex(&mut bytes, self.timestamp);
        push_hex(&mut bytes, i64::from(self.difficulty.bits()));
        push_hex(&mut bytes, nonce);
        bytes
    }

    pub fn hash(&self, nonce: i64) -> Hash {
        sha256(&self.prepare_data(nonce))
    }

    /// First nonce in `nonces` whose hash is below the target.
    pub fn search(&self, nonces: Range<i64>) -> Option<(i64, Hash)> {
        nonces
            .map(|nonce| (nonce, self.hash(nonce)))
            .find(|(_, hash)| meets_target(hash, &self.target))
    }

    /// Sequential search from nonce 0. Blocks until a valid nonce is found.
    pub fn run(&self) -> Result<(i64, Hash)> {
        debug!(
            data = %String::from_utf8_lossy(self.data),
            difficulty = self.difficulty.bits(),
            "executing proof of work"
        );
        let (nonce, hash) = self
            .search(0..MAX_NONCE)
            .ok_or(ChainError::NonceSpaceExhausted)?;
        info!(
            nonce,
            hash = %hex::encode(hash),
            zeros = count_leading_zero_bits(&hash),
            "proof of work complete"
        );
        Ok((nonce, hash))
    }

    pub fn validate(&self, nonce: i64) -> bool {
        meets_target(&self.hash(nonce), &self.target)
    }
}
