//! rustchain - a minimal proof-of-work blockchain node.
//!
//! - [`blockchain`] - chain, blocks, PoW and validation
//! - [`consensus`] - longest-valid-chain resolution against peers
//! - [`transaction`] - transaction record
//! - [`api`] - HTTP surface (actix-web)

pub mod api;
pub mod blockchain;
pub mod consensus;
pub mod transaction;
