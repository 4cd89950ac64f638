use crate::error::Result;
use crate::pow::Difficulty;

/// How the nonce search is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MiningStrategy {
    /// Tries nonces in order on the calling thread. Always finds the lowest valid nonce.
    #[default]
    Sequential,
    /// Splits the nonce space across the rayon pool. Finds some valid nonce.
    Parallel,
}

/// Runtime settings for a chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainConfig {
    difficulty: Difficulty,
    strategy: MiningStrategy,
}

impl ChainConfig {
    pub fn new(difficulty_bits: u32) -> Result<Self> {
        Self::default().with_difficulty(difficulty_bits)
    }

    pub fn with_difficulty(mut self, difficulty_bits: u32) -> Result<Self> {
        self.difficulty = Difficulty::new(difficulty_bits)?;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: MiningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn strategy(&self) -> MiningStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DIFFICULTY_BITS;
    use crate::error::ChainError;

    #[test]
    fn default_config() {
        let config = ChainConfig::default();
        assert_eq!(config.difficulty().bits(), DEFAULT_DIFFICULTY_BITS);
        assert_eq!(config.strategy(), MiningStrategy::Sequential);
    }

    #[test]
    fn builder_overrides() {
        let config = ChainConfig::new(8)
            .unwrap()
            .with_strategy(MiningStrategy::Parallel);
        assert_eq!(config.difficulty().bits(), 8);
        assert_eq!(config.strategy(), MiningStrategy::Parallel);
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        assert_eq!(ChainConfig::new(0), Err(ChainError::InvalidDifficulty(0)));
        assert_eq!(
            ChainConfig::default().with_difficulty(256),
            Err(ChainError::InvalidDifficulty(256))
        );
    }
}
