use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Transaction;
use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Transaction is missing an id")]
    MissingId,
    #[error("Amount [{amount}] is negative for transaction [{transaction_id}]")]
    NegativeAmount {
        transaction_id: TransactionId,
        amount: Decimal
    }
}

impl ValidationError {
    pub fn missing_id() -> Self {
        Self::MissingId
    }

    pub fn negative_amount(tx: &Transaction) -> Self {
        Self::NegativeAmount {
            transaction_id: tx.id.clone(),
            amount: tx.amount
        }
    }
}
