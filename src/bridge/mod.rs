mod state_bridge;
#[cfg(test)]
mod tests;

pub use state_bridge::StateBridge;
