use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::bus::EventBus;
use crate::models::{Transaction, TransactionStatus, TransactionType};
use crate::store::TransactionStore;

/// Generation parameters for the synthetic feed.
#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    /// Time between generated transactions.
    pub tick: Duration,
    /// Inclusive amount range, in whole cents.
    pub min_amount_cents: i64,
    pub max_amount_cents: i64
}

impl Default for FeedConfig {
    /// Reference cadence: one transaction every 20 ms (~50/s), amounts
    /// between 100.00 and 10,100.00.
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(20),
            min_amount_cents: 100_00,
            max_amount_cents: 10_100_00
        }
    }
}

/// Synthetic stand-in for a real upstream transaction feed.
///
/// Runs as a single periodic tokio task that mints a fresh transaction per
/// tick, submits it to the store, and emits transaction-added on the bus for
/// every accepted submission. The admission result is checked on every tick
/// even though minted ids cannot collide, so the path behaves exactly like a
/// real retrying producer.
pub struct FeedSimulator {
    store: Arc<TransactionStore>,
    bus: Arc<EventBus>,
    config: FeedConfig,
    worker: Mutex<Option<JoinHandle<()>>>
}

impl FeedSimulator {
    pub fn new(store: Arc<TransactionStore>, bus: Arc<EventBus>) -> Self {
        Self::with_config(store, bus, FeedConfig::default())
    }

    pub fn with_config(store: Arc<TransactionStore>, bus: Arc<EventBus>, config: FeedConfig) -> Self {
        Self {
            store,
            bus,
            config,
            worker: Mutex::new(None)
        }
    }

    /// Starts the feed. Calling connect while already running is a no-op.
    pub fn connect(&self) {
        let mut worker = self.lock_worker();

        if worker.is_some() {
            return
        }

        info!("Feed simulator connected at one transaction per {:?}", self.config.tick);

        let store = self.store.clone();
        let bus = self.bus.clone();
        let config = self.config;

        *worker = Some(tokio::spawn(async move {
            let mut ticker = interval(config.tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let tx = generate_transaction(&config);

                match store.add_transaction(tx.clone()) {
                    Ok(true) => bus.emit_transaction_added(tx),
                    Ok(false) => debug!("Feed produced duplicate transaction [{}]", tx.id),
                    Err(error) => warn!("Feed produced invalid transaction: {error}")
                }
            }
        }));
    }

    /// Stops the feed. No tick is scheduled after this returns; a tick
    /// already past its await point may still finish. Calling disconnect
    /// while stopped is a no-op.
    pub fn disconnect(&self) {
        if let Some(handle) = self.lock_worker().take() {
            handle.abort();
            info!("Feed simulator disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.lock_worker().is_some()
    }

    fn lock_worker(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner()
        }
    }
}

impl Drop for FeedSimulator {
    fn drop(&mut self) {
        self.disconnect();
    }
}

pub(crate) fn generate_transaction(config: &FeedConfig) -> Transaction {
    let mut rng = rand::thread_rng();

    let transaction_type = TransactionType::ALL[rng.gen_range(0..TransactionType::ALL.len())];
    let status = TransactionStatus::ALL[rng.gen_range(0..TransactionStatus::ALL.len())];
    let amount = Decimal::new(rng.gen_range(config.min_amount_cents..=config.max_amount_cents), 2);
    let id = format!("tx-{}", Uuid::new_v4());

    Transaction {
        description: format!("{} transaction {}", transaction_type.as_str(), &id[..8]),
        idempotency_key: Some(id.clone()),
        id,
        amount,
        date: Utc::now(),
        transaction_type,
        status
    }
}
