use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::ChainConfig;
use crate::constants::GENESIS_DATA;
use crate::error::Result;
use crate::mine::mine;
use crate::pow::{Difficulty, ProofOfWork};
use crate::Hash;

/// A mined block. Fields are fixed once mining returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    timestamp: i64,
    #[serde(with = "hex")]
    data: Vec<u8>,
    #[serde(with = "hex")]
    previous_hash: Vec<u8>,
    #[serde(with = "hex")]
    hash: Hash,
    nonce: i64,
}

impl Block {
    /// Stamps the block with `clock`, mines it at the configured difficulty and
    /// returns the finalized block.
    pub fn new<C: Clock + ?Sized>(
        data: Vec<u8>,
        previous_hash: Vec<u8>,
        clock: &C,
        config: &ChainConfig,
    ) -> Result<Self> {
        let timestamp = clock.now();
        let pow = ProofOfWork::new(&previous_hash, &data, timestamp, config.difficulty());
        let (nonce, hash) = mine(&pow, config.strategy())?;

        let valid = pow.validate(nonce);
        info!(valid, "PoW");
        if !valid {
            warn!(nonce, "mined nonce failed validation");
        }

        Ok(Self {
            timestamp,
            data,
            previous_hash,
            hash,
            nonce,
        })
    }

    pub fn genesis<C: Clock + ?Sized>(clock: &C, config: &ChainConfig) -> Result<Self> {
        Self::new(GENESIS_DATA.to_vec(), Vec::new(), clock, config)
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    pub fn previous_hash(&self) -> &[u8] {
        &self.previous_hash
    }

    pub fn previous_hash_hex(&self) -> String {
        hex::encode(&self.previous_hash)
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_empty()
    }

    /// Whether the stored nonce satisfies `difficulty` for this block's fields.
    pub fn validate(&self, difficulty: Difficulty) -> bool {
        ProofOfWork::for_block(self, difficulty).validate(self.nonce)
    }
}
