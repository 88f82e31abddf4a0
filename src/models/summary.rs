use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Aggregate figures for a single transaction type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    /// Number of transactions of this type.
    pub count: usize,
    /// Summed amount of this type.
    pub volume: Decimal,
    /// Share of all transactions, 0..100.
    pub percentage: f64
}

/// Per-type buckets; one fixed bucket per member of the closed type set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionBreakdown {
    pub ach: TypeBreakdown,
    pub card: TypeBreakdown,
    pub wire: TypeBreakdown
}

impl TransactionBreakdown {
    pub fn for_type(&self, transaction_type: TransactionType) -> &TypeBreakdown {
        match transaction_type {
            TransactionType::Ach => &self.ach,
            TransactionType::Card => &self.card,
            TransactionType::Wire => &self.wire
        }
    }

    pub(crate) fn for_type_mut(&mut self, transaction_type: TransactionType) -> &mut TypeBreakdown {
        match transaction_type {
            TransactionType::Ach => &mut self.ach,
            TransactionType::Card => &mut self.card,
            TransactionType::Wire => &mut self.wire
        }
    }
}

/// Snapshot of the aggregate state of the whole collection.
///
/// Always derived from the transactions themselves, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryBreakdown {
    #[serde(rename = "totalTransactions")]
    pub total_transactions: usize,
    #[serde(rename = "totalAmount")]
    pub total_amount: Decimal,
    /// Percentage of transactions with status `failed`, 0..100.
    #[serde(rename = "failureRate")]
    pub failure_rate: f64,
    pub breakdown: TransactionBreakdown
}
