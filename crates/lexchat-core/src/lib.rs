pub mod ports;
pub mod event_bus;
pub mod state;
pub mod controller;
pub mod identity;

#[cfg(test)]
mod tests;
