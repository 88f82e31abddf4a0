pub mod bridge;
pub mod bus;
pub mod feed;
pub mod models;
pub mod store;
pub mod types;

pub use bridge::StateBridge;
pub use bus::{EventBus, StatusUpdate, Subscription};
pub use feed::{FeedConfig, FeedSimulator};
pub use models::{SummaryBreakdown, Transaction, TransactionStatus, TransactionType};
pub use store::TransactionStore;
