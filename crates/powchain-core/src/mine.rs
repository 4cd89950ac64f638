use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::MiningStrategy;
use crate::constants::MAX_NONCE;
use crate::error::{ChainError, Result};
use crate::pow::{count_leading_zero_bits, meets_target, ProofOfWork};
use crate::Hash;

/// Runs the search with the given strategy.
pub fn mine(pow: &ProofOfWork<'_>, strategy: MiningStrategy) -> Result<(i64, Hash)> {
    match strategy {
        MiningStrategy::Sequential => pow.run(),
        MiningStrategy::Parallel => mine_parallel(pow),
    }
}

/// Searches nonces in parallel until a hash falls below the target.
/// Returns whichever valid nonce a worker finds first, not necessarily the lowest.
pub fn mine_parallel(pow: &ProofOfWork<'_>) -> Result<(i64, Hash)> {
    debug!(
        difficulty = pow.difficulty().bits(),
        threads = rayon::current_num_threads(),
        "executing parallel proof of work"
    );

    // Rayon splits the range across threads; find_any stops the others once one hits.
    let (nonce, hash) = (0..MAX_NONCE)
        .into_par_iter()
        .map(|nonce| (nonce, pow.hash(nonce)))
        .find_any(|(_, hash)| meets_target(hash, pow.target()))
        .ok_or(ChainError::NonceSpaceExhausted)?;

    info!(
        nonce,
        hash = %hex::encode(hash),
        zeros = count_leading_zero_bits(&hash),
        "parallel proof of work complete"
    );
    Ok((nonce, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pow::Difficulty;

    #[test]
    fn parallel_finds_a_valid_nonce() {
        let difficulty = Difficulty::new(12).unwrap();
        let pow = ProofOfWork::new(b"prev", b"parallel", 1_600_000_000, difficulty);
        let (nonce, hash) = mine_parallel(&pow).unwrap();
        assert!(pow.validate(nonce));
        assert_eq!(pow.hash(nonce), hash);
        assert!(count_leading_zero_bits(&hash) >= 12);
    }

    #[test]
    fn sequential_strategy_matches_run() {
        let difficulty = Difficulty::new(8).unwrap();
        let pow = ProofOfWork::new(&[], b"Genesis", 1_600_000_000, difficulty);
        assert_eq!(mine(&pow, MiningStrategy::Sequential), pow.run());
    }
}
