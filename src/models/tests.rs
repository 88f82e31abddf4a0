use super::{Transaction, TransactionStatus, TransactionType, ValidationError};

use std::str::FromStr;

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

fn create_transaction(id: &str, transaction_type: TransactionType, status: TransactionStatus, amount: &str) -> Result<Transaction> {
    Ok(Transaction {
        id: id.to_string(),
        amount: Decimal::from_str(amount)?,
        date: Utc::now(),
        transaction_type,
        status,
        description: format!("{} transaction {id}", transaction_type.as_str()),
        idempotency_key: Some(id.to_string())
    })
}

#[test]
fn test_valid_transaction_passes_validation() -> Result<()> {
    let tx = create_transaction("tx-1", TransactionType::Ach, TransactionStatus::Pending, "10.50")?;

    tx.validate()?;

    Ok(())
}

#[test]
fn test_empty_id_fails_validation() -> Result<()> {
    let tx = create_transaction("", TransactionType::Card, TransactionStatus::Pending, "10.50")?;

    let result = tx.validate();

    assert!(matches!(result, Err(ValidationError::MissingId)));

    Ok(())
}

#[test]
fn test_negative_amount_fails_validation() -> Result<()> {
    let tx = create_transaction("tx-1", TransactionType::Wire, TransactionStatus::Pending, "-0.01")?;

    let result = tx.validate();

    assert!(matches!(result, Err(ValidationError::NegativeAmount { .. })));

    Ok(())
}

#[test]
fn test_zero_amount_passes_validation() -> Result<()> {
    let tx = create_transaction("tx-1", TransactionType::Wire, TransactionStatus::Completed, "0")?;

    tx.validate()?;

    Ok(())
}

#[test]
fn test_transaction_type_serializes_to_wire_names() -> Result<()> {
    assert_eq!(serde_json::to_value(TransactionType::Ach)?, json!("ACH"));
    assert_eq!(serde_json::to_value(TransactionType::Card)?, json!("Card"));
    assert_eq!(serde_json::to_value(TransactionType::Wire)?, json!("Wire"));

    Ok(())
}

#[test]
fn test_transaction_status_serializes_lowercase() -> Result<()> {
    assert_eq!(serde_json::to_value(TransactionStatus::Pending)?, json!("pending"));
    assert_eq!(serde_json::to_value(TransactionStatus::Completed)?, json!("completed"));
    assert_eq!(serde_json::to_value(TransactionStatus::Failed)?, json!("failed"));

    Ok(())
}

#[test]
fn test_transaction_wire_shape_uses_contract_field_names() -> Result<()> {
    let tx = create_transaction("tx-1", TransactionType::Ach, TransactionStatus::Pending, "25.00")?;

    let value = serde_json::to_value(&tx)?;

    assert_eq!(value["id"], json!("tx-1"));
    assert_eq!(value["type"], json!("ACH"));
    assert_eq!(value["status"], json!("pending"));
    assert_eq!(value["idempotencyKey"], json!("tx-1"));

    Ok(())
}

#[test]
fn test_absent_idempotency_key_is_omitted_from_wire_shape() -> Result<()> {
    let mut tx = create_transaction("tx-1", TransactionType::Ach, TransactionStatus::Pending, "25.00")?;
    tx.idempotency_key = None;

    let value = serde_json::to_value(&tx)?;

    assert!(value.get("idempotencyKey").is_none());

    Ok(())
}

#[test]
fn test_type_buckets_cover_the_closed_set() {
    let buckets: Vec<&str> = TransactionType::ALL.iter().map(|t| t.bucket()).collect();

    assert_eq!(buckets, vec!["ach", "card", "wire"]);
}
