use serde::{Deserialize, Serialize};

use crate::bus::channel::{Channel, Subscription};
use crate::models::{Transaction, TransactionStatus};
use crate::types::TransactionId;

/// Payload of the transaction-updated channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: TransactionId,
    pub status: TransactionStatus
}

/// Fan-out notification hub for transaction lifecycle events.
///
/// Three independent channels, one per event kind. Emission is decoupled from
/// the store's data representation: the bus never reads state, it only
/// forwards what producers hand it. No ordering is guaranteed across
/// channels, only within one channel per subscriber.
pub struct EventBus {
    transaction_added: Channel<Transaction>,
    transaction_updated: Channel<StatusUpdate>,
    transaction_reconciled: Channel<TransactionId>
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            transaction_added: Channel::new(),
            transaction_updated: Channel::new(),
            transaction_reconciled: Channel::new()
        }
    }

    pub fn emit_transaction_added(&self, tx: Transaction) {
        self.transaction_added.emit(tx);
    }

    pub fn emit_transaction_updated(&self, id: TransactionId, status: TransactionStatus) {
        self.transaction_updated.emit(StatusUpdate { id, status });
    }

    pub fn emit_transaction_reconciled(&self, id: TransactionId) {
        self.transaction_reconciled.emit(id);
    }

    pub fn on_transaction_added(&self) -> Subscription<Transaction> {
        self.transaction_added.subscribe()
    }

    pub fn on_transaction_updated(&self) -> Subscription<StatusUpdate> {
        self.transaction_updated.subscribe()
    }

    pub fn on_transaction_reconciled(&self) -> Subscription<TransactionId> {
        self.transaction_reconciled.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
