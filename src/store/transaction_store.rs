use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{SummaryBreakdown, Transaction, TransactionBreakdown, TransactionStatus, TransactionType, ValidationError};
use crate::types::TransactionId;

/// Authoritative in-memory collection of all monitored transactions.
///
/// The store is the single owner of mutable transaction state and the only
/// place aggregate summaries are computed. Both mutating operations run under
/// one mutex so the duplicate check, the id recording, and the append are a
/// single atomic unit even with parallel producers.
pub struct TransactionStore {
    inner: Mutex<StoreInner>
}

struct StoreInner {
    transactions: Vec<Transaction>,
    processed_ids: HashSet<TransactionId>
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                transactions: Vec::new(),
                processed_ids: HashSet::new()
            })
        }
    }

    /// Admits a transaction exactly once.
    ///
    /// A duplicate id is routine producer traffic, not a fault: the call is a
    /// no-op returning `Ok(false)`. A fresh id records the id, appends the
    /// transaction, and returns `Ok(true)`.
    ///
    /// # Errors
    /// Returns `ValidationError` when the transaction fails the admission
    /// checks (empty id, negative amount). Nothing is recorded in that case.
    pub fn add_transaction(&self, tx: Transaction) -> Result<bool, ValidationError> {
        tx.validate()?;

        let mut inner = self.lock();

        if !inner.processed_ids.insert(tx.id.clone()) {
            debug!("Duplicate transaction [{}] rejected", tx.id);
            return Ok(false)
        }

        inner.transactions.push(tx);

        Ok(true)
    }

    /// Replaces the status of the transaction with the given id.
    ///
    /// An unknown id leaves the collection untouched; the `bool` result tells
    /// the caller whether a transaction was found, so a late or misdirected
    /// reconciliation can be tolerated or surfaced as the caller prefers.
    pub fn reconcile_transaction(&self, id: &str, status: TransactionStatus) -> bool {
        let mut inner = self.lock();

        match inner.transactions.iter_mut().find(|tx| tx.id == id) {
            Some(tx) => {
                debug!("Transaction [{id}] reconciled to [{}]", status.as_str());
                tx.status = status;
                true
            }
            None => {
                warn!("Reconciliation for unknown transaction [{id}] ignored");
                false
            }
        }
    }

    /// Snapshot of all transactions in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.lock().transactions.clone()
    }

    /// Looks up a single transaction by id.
    pub fn transaction(&self, id: &str) -> Option<Transaction> {
        self.lock().transactions.iter().find(|tx| tx.id == id).cloned()
    }

    /// Computes the aggregate summary for the current collection.
    ///
    /// Recomputed by a full scan on every call; at the target load the
    /// collection stays small enough that incremental counters are not worth
    /// their bookkeeping.
    pub fn summary_breakdown(&self) -> SummaryBreakdown {
        Self::calculate_breakdown(&self.lock().transactions)
    }

    /// Percentage of transactions with status `failed`, 0 for an empty store.
    pub fn failure_rate(&self) -> f64 {
        Self::calculate_failure_rate(&self.lock().transactions)
    }

    pub fn len(&self) -> usize {
        self.lock().transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().transactions.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner()
        }
    }

    fn calculate_breakdown(transactions: &[Transaction]) -> SummaryBreakdown {
        let mut breakdown = TransactionBreakdown::default();
        let mut total_amount = Decimal::ZERO;

        for tx in transactions {
            let bucket = breakdown.for_type_mut(tx.transaction_type);
            bucket.count += 1;
            bucket.volume += tx.amount;
            total_amount += tx.amount;
        }

        let total_transactions = transactions.len();

        if total_transactions > 0 {
            for transaction_type in TransactionType::ALL {
                let bucket = breakdown.for_type_mut(transaction_type);
                bucket.percentage = (bucket.count as f64 / total_transactions as f64) * 100.0;
            }
        }

        SummaryBreakdown {
            total_transactions,
            total_amount,
            failure_rate: Self::calculate_failure_rate(transactions),
            breakdown
        }
    }

    fn calculate_failure_rate(transactions: &[Transaction]) -> f64 {
        if transactions.is_empty() {
            return 0.0
        }

        let failed = transactions.iter().filter(|tx| tx.status == TransactionStatus::Failed).count();

        (failed as f64 / transactions.len() as f64) * 100.0
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
