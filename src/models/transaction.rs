use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::errors::ValidationError;
use crate::models::{TransactionStatus, TransactionType};
use crate::types::TransactionId;

/// A single monitored transaction.
///
/// Immutable once admitted to the store, with one exception: `status` may be
/// replaced by reconciliation after the upstream outcome becomes known.
/// The `idempotency_key` is modeled separately from `id` so a future producer
/// can dedup on a key of its own, but every current producer sets it to `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier, assigned at creation.
    pub id: TransactionId,
    /// Non-negative currency amount.
    pub amount: Decimal,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Payment rail the transaction moved on.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Lifecycle status; the only field mutated post-admission.
    pub status: TransactionStatus,
    /// Free-text label.
    pub description: String,
    /// Logical dedup key supplied by the producer (if any).
    #[serde(rename = "idempotencyKey", skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<TransactionId>
}

impl Transaction {
    /// Checks the admission-boundary constraints.
    ///
    /// # Errors
    /// Returns `ValidationError` if the id is empty or the amount is negative.
    /// Unknown types and statuses cannot be represented, so they need no check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::missing_id())
        }

        if self.amount.is_sign_negative() {
            return Err(ValidationError::negative_amount(self))
        }

        Ok(())
    }
}
