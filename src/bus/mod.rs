mod channel;
mod event_bus;

pub use channel::{Channel, Subscription};
pub use event_bus::{EventBus, StatusUpdate};
