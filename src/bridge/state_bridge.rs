use std::sync::Arc;

use crate::bus::{EventBus, StatusUpdate, Subscription};
use crate::models::{SummaryBreakdown, Transaction, TransactionStatus, ValidationError};
use crate::store::TransactionStore;
use crate::types::TransactionId;

/// Contract surface handed to independently loaded consumers.
///
/// Pure delegation over one shared store and one shared bus: cloning the
/// bridge clones the handle, never the state, so every consumer observes the
/// same instances no matter where its code was loaded from. The bridge is
/// constructed once at process start and passed in explicitly; nothing here
/// is process-global.
#[derive(Clone)]
pub struct StateBridge {
    store: Arc<TransactionStore>,
    bus: Arc<EventBus>
}

impl StateBridge {
    pub fn new(store: Arc<TransactionStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    // Store read accessors

    pub fn transactions(&self) -> Vec<Transaction> {
        self.store.transactions()
    }

    pub fn transaction(&self, id: &str) -> Option<Transaction> {
        self.store.transaction(id)
    }

    pub fn summary_breakdown(&self) -> SummaryBreakdown {
        self.store.summary_breakdown()
    }

    pub fn failure_rate(&self) -> f64 {
        self.store.failure_rate()
    }

    // Store mutators

    /// # Errors
    /// Propagates the store's `ValidationError` for malformed input.
    pub fn add_transaction(&self, tx: Transaction) -> Result<bool, ValidationError> {
        self.store.add_transaction(tx)
    }

    pub fn reconcile_transaction(&self, id: &str, status: TransactionStatus) -> bool {
        self.store.reconcile_transaction(id, status)
    }

    // Bus subscriptions

    pub fn on_transaction_added(&self) -> Subscription<Transaction> {
        self.bus.on_transaction_added()
    }

    pub fn on_transaction_updated(&self) -> Subscription<StatusUpdate> {
        self.bus.on_transaction_updated()
    }

    pub fn on_transaction_reconciled(&self) -> Subscription<TransactionId> {
        self.bus.on_transaction_reconciled()
    }

    // Bus emitters, for consumers broadcasting the mutations they perform

    pub fn emit_transaction_added(&self, tx: Transaction) {
        self.bus.emit_transaction_added(tx);
    }

    pub fn emit_transaction_updated(&self, id: TransactionId, status: TransactionStatus) {
        self.bus.emit_transaction_updated(id, status);
    }

    pub fn emit_transaction_reconciled(&self, id: TransactionId) {
        self.bus.emit_transaction_reconciled(id);
    }
}
