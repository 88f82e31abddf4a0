mod errors;
mod summary;
#[cfg(test)]
mod tests;
mod transaction;

use serde::{Deserialize, Serialize};

pub use errors::ValidationError;
pub use summary::{SummaryBreakdown, TransactionBreakdown, TypeBreakdown};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "ACH")]
    Ach,
    Card,
    Wire
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [TransactionType::Ach, TransactionType::Card, TransactionType::Wire];

    /// Lower-cased bucket name, matching the breakdown keys of the summary contract.
    pub fn bucket(&self) -> &'static str {
        match self {
            TransactionType::Ach => "ach",
            TransactionType::Card => "card",
            TransactionType::Wire => "wire"
        }
    }

    /// Display name as carried on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Ach => "ACH",
            TransactionType::Card => "Card",
            TransactionType::Wire => "Wire"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [TransactionStatus::Pending, TransactionStatus::Completed, TransactionStatus::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed"
        }
    }
}
