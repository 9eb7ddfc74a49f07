//! Domain layer: receipts, amounts, the scoring rules and the storage port.

pub mod amount;
pub mod ports;
pub mod receipt;
pub mod scoring;
