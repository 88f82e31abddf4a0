mod feed_simulator;

pub use feed_simulator::{FeedConfig, FeedSimulator};
