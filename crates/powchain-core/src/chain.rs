use std::ops::Index;

use tracing::info;

use crate::block::Block;
use crate::clock::{Clock, SystemClock};
use crate::config::ChainConfig;
use crate::error::{ChainError, Result};
use crate::pow::{meets_target, ProofOfWork};

/// Append-only sequence of mined blocks, oldest first.
#[derive(Clone, Debug)]
pub struct BlockChain<C: Clock = SystemClock> {
    blocks: Vec<Block>,
    config: ChainConfig,
    clock: C,
}

impl BlockChain<SystemClock> {
    /// Creates a chain holding only a freshly mined genesis block.
    pub fn new(config: ChainConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BlockChain<C> {
    pub fn with_clock(config: ChainConfig, clock: C) -> Result<Self> {
        let genesis = Block::genesis(&clock, &config)?;
        info!(hash = %genesis.hash_hex(), "genesis block mined");
        Ok(Self {
            blocks: vec![genesis],
            config,
            clock,
        })
    }

    /// Rebuilds a chain from blocks mined earlier. The blocks must pass
    /// [`BlockChain::verify`]; an empty list yields a chain that cannot be extended.
    pub fn from_blocks(config: ChainConfig, clock: C, blocks: Vec<Block>) -> Result<Self> {
        let chain = Self {
            blocks,
            config,
            clock,
        };
        chain.verify()?;
        Ok(chain)
    }

    /// Mines a block on top of the current tip and appends it.
    pub fn add_block(&mut self, data: impl Into<Vec<u8>>) -> Result<&Block> {
        let previous_hash = self.tip().ok_or(ChainError::ChainEmpty)?.hash().to_vec();
        let block = Block::new(data.into(), previous_hash, &self.clock, &self.config)?;
        info!(
            height = self.blocks.len(),
            hash = %block.hash_hex(),
            "block appended"
        );
        self.blocks.push(block);
        Ok(&self.blocks[self.blocks.len() - 1])
    }

    /// Checks linkage and proof-of-work for every block.
    pub fn verify(&self) -> Result<()> {
        let difficulty = self.config.difficulty();
        for (index, block) in self.blocks.iter().enumerate() {
            let expected_previous: &[u8] = match index {
                0 => &[],
                _ => self.blocks[index - 1].hash(),
            };
            if block.previous_hash() != expected_previous {
                return Err(ChainError::BrokenLink { index });
            }

            let pow = ProofOfWork::for_block(block, difficulty);
            let hash = pow.hash(block.nonce());
            if &hash != block.hash() {
                return Err(ChainError::HashMismatch { index });
            }
            if !meets_target(&hash, pow.target()) {
                return Err(ChainError::InsufficientWork { index });
            }
        }
        Ok(())
    }

    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl<C: Clock> Index<usize> for BlockChain<C> {
    type Output = Block;

    fn index(&self, index: usize) -> &Block {
        &self.blocks[index]
    }
}

impl<'a, C: Clock> IntoIterator for &'a BlockChain<C> {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
