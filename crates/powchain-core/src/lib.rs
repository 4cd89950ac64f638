//! A minimal proof-of-work blockchain.
//!
//! Blocks are linked by SHA-256 hash and each one is mined until its hash,
//! read as a big-endian integer, falls below `2^(256 - difficulty_bits)`.

pub mod block;
pub mod chain;
pub mod clock;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod mine;
pub mod pow;

use sha2::{Digest, Sha256};

pub use block::Block;
pub use chain::BlockChain;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ChainConfig, MiningStrategy};
pub use error::{ChainError, Result};
pub use pow::{Difficulty, ProofOfWork};

pub type Hash = [u8; constants::HASH_SIZE];

pub fn sha256(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = [0u8; constants::HASH_SIZE];
    out.copy_from_slice(&digest[..]);
    out
}
