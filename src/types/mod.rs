pub type TransactionId = String;
pub type SubscriberId = u64;
