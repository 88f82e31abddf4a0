use super::StateBridge;
use crate::bus::EventBus;
use crate::models::{Transaction, TransactionStatus, TransactionType};
use crate::store::TransactionStore;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Utc;
use rust_decimal::Decimal;

fn create_bridge() -> StateBridge {
    StateBridge::new(Arc::new(TransactionStore::new()), Arc::new(EventBus::new()))
}

fn create_transaction(id: &str, amount: &str) -> Result<Transaction> {
    Ok(Transaction {
        id: id.to_string(),
        amount: Decimal::from_str(amount)?,
        date: Utc::now(),
        transaction_type: TransactionType::Card,
        status: TransactionStatus::Pending,
        description: format!("Card transaction {id}"),
        idempotency_key: Some(id.to_string())
    })
}

#[test]
fn test_bridge_clones_share_one_store_instance() -> Result<()> {
    let bridge = create_bridge();
    let remote_consumer = bridge.clone();

    assert!(bridge.add_transaction(create_transaction("tx-1", "10.0")?)?);

    // Visible through the other handle, and still deduplicated there.
    assert_eq!(remote_consumer.transactions().len(), 1);
    assert!(!remote_consumer.add_transaction(create_transaction("tx-1", "10.0")?)?);

    Ok(())
}

#[tokio::test]
async fn test_bridge_clones_share_one_bus_instance() -> Result<()> {
    let bridge = create_bridge();
    let remote_consumer = bridge.clone();
    let mut added = remote_consumer.on_transaction_added();

    let tx = create_transaction("tx-1", "10.0")?;
    bridge.add_transaction(tx.clone())?;
    bridge.emit_transaction_added(tx);

    let event = added.recv().await.ok_or_else(|| anyhow!("Missing added event"))?;
    assert_eq!(event.id, "tx-1");

    Ok(())
}

#[test]
fn test_bridge_delegates_reads_and_reconciliation() -> Result<()> {
    let bridge = create_bridge();

    bridge.add_transaction(create_transaction("tx-1", "100")?)?;
    bridge.add_transaction(create_transaction("tx-2", "300")?)?;

    assert!(bridge.reconcile_transaction("tx-1", TransactionStatus::Failed));
    assert!(!bridge.reconcile_transaction("tx-missing", TransactionStatus::Failed));

    let summary = bridge.summary_breakdown();
    assert_eq!(summary.total_transactions, 2);
    assert_eq!(summary.total_amount, Decimal::from_str("400")?);
    assert_eq!(summary.breakdown.card.count, 2);

    assert_eq!(bridge.failure_rate(), 50.0);

    let tx = bridge.transaction("tx-1").ok_or_else(|| anyhow!("Transaction missing"))?;
    assert_eq!(tx.status, TransactionStatus::Failed);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_duplicate_submission_emits_exactly_one_added_event() -> Result<()> {
    let bridge = create_bridge();
    let mut added = bridge.on_transaction_added();
    let tx = create_transaction("tx-contended", "50.0")?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bridge = bridge.clone();
            let tx = tx.clone();
            std::thread::spawn(move || -> Result<()> {
                if bridge.add_transaction(tx.clone())? {
                    bridge.emit_transaction_added(tx);
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().map_err(|_| anyhow!("Submitting thread panicked"))??;
    }

    assert_eq!(bridge.transactions().len(), 1);
    assert_eq!(added.try_recv().map(|tx| tx.id), Some("tx-contended".to_string()));
    assert!(added.try_recv().is_none());

    Ok(())
}

#[tokio::test]
async fn test_bridge_exposes_update_and_reconcile_streams() -> Result<()> {
    let bridge = create_bridge();
    let mut updated = bridge.on_transaction_updated();
    let mut reconciled = bridge.on_transaction_reconciled();

    bridge.add_transaction(create_transaction("tx-1", "10.0")?)?;

    if bridge.reconcile_transaction("tx-1", TransactionStatus::Completed) {
        bridge.emit_transaction_updated("tx-1".to_string(), TransactionStatus::Completed);
        bridge.emit_transaction_reconciled("tx-1".to_string());
    }

    let update = updated.recv().await.ok_or_else(|| anyhow!("Missing update event"))?;
    assert_eq!(update.id, "tx-1");
    assert_eq!(update.status, TransactionStatus::Completed);

    assert_eq!(reconciled.recv().await, Some("tx-1".to_string()));

    Ok(())
}
