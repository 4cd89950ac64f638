mod constants;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;
use powchain_core::constants::DEFAULT_DIFFICULTY_BITS;
use powchain_core::{Block, BlockChain, ChainConfig, MiningStrategy};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::{DEFAULT_BLOCKS, DIFFICULTY_ENV, PARALLEL_ENV};

#[derive(Parser, Debug)]
#[command(name = "powchain-node")]
#[command(about = "Builds a proof-of-work chain and prints its blocks")]
struct Args {
    /// Leading zero bits a block hash must have (1 to 255)
    #[arg(long, env = DIFFICULTY_ENV, default_value_t = DEFAULT_DIFFICULTY_BITS)]
    difficulty: u32,

    /// Spread the nonce search across all cores
    #[arg(long, env = PARALLEL_ENV, value_parser = BoolishValueParser::new())]
    parallel: bool,

    /// Print the chain as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Payloads to append after the genesis block
    #[arg(value_name = "DATA")]
    blocks: Vec<String>,
}

#[derive(Serialize)]
struct BlockView {
    previous_hash: String,
    hash: String,
    data: String,
    nonce: i64,
    timestamp: i64,
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        Self {
            previous_hash: block.previous_hash_hex(),
            hash: block.hash_hex(),
            data: block.data_lossy().into_owned(),
            nonce: block.nonce(),
            timestamp: block.timestamp(),
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let strategy = if args.parallel {
        MiningStrategy::Parallel
    } else {
        MiningStrategy::Sequential
    };
    let config = ChainConfig::new(args.difficulty)
        .context("bad --difficulty")?
        .with_strategy(strategy);
    info!(difficulty = args.difficulty, ?strategy, "building chain");

    let mut chain = BlockChain::new(config).context("mining genesis block")?;
    let payloads = if args.blocks.is_empty() {
        DEFAULT_BLOCKS.iter().map(|s| s.to_string()).collect()
    } else {
        args.blocks
    };
    for data in payloads {
        chain
            .add_block(data.as_bytes())
            .with_context(|| format!("mining block {data:?}"))?;
    }

    if args.json {
        let views: Vec<BlockView> = chain.iter().map(BlockView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for block in &chain {
            println!("Previous hash: {}", block.previous_hash_hex());
            println!("Hash: {}", block.hash_hex());
            println!("Data: {}", block.data_lossy());
            println!();
        }
    }
    Ok(())
}
