pub mod block;
pub mod model;
pub mod pow;
pub mod validate;

pub use block::Block;
pub use model::Blockchain;

/// Default Proof-of-Work difficulty (number of leading zero hex chars).
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Reward paid to the node that seals a block.
pub const BLOCK_REWARD: i64 = 1;

/// Sender recorded on reward transactions (marks newly minted coins).
pub const REWARD_SENDER: &str = "0";

/// Proof recorded in the genesis block (not mined).
pub const GENESIS_PROOF: u64 = 100;

/// Placeholder previous_hash for the genesis block (not a real digest).
pub const GENESIS_PREVIOUS_HASH: &str = "1";
