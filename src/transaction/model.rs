use serde::{Deserialize, Serialize};

/// A value transfer waiting to be (or already) committed into a block.
///
/// Transactions have no identity beyond their field values; duplicates are
/// allowed. Sender/recipient/amount are opaque - no ownership or economic
/// checks happen at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: String, recipient: String, amount: i64) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }
}
