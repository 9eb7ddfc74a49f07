//! Application layer orchestrating the receipt use cases.
//!
//! This module defines the `ReceiptProcessor`, the single entry point the
//! request layer uses to store receipts and score them later.

pub mod processor;
