use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("invalid difficulty: {0} bits (expected 1 to 255)")]
    InvalidDifficulty(u32),

    #[error("chain has no tip to append to")]
    ChainEmpty,

    #[error("nonce space exhausted without meeting the target")]
    NonceSpaceExhausted,

    #[error("block {index} does not link to its predecessor")]
    BrokenLink { index: usize },

    #[error("block {index} hash does not match its contents")]
    HashMismatch { index: usize },

    #[error("block {index} hash does not meet the difficulty target")]
    InsufficientWork { index: usize },
}

pub type Result<T> = std::result::Result<T, ChainError>;
