use super::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage for receipts. Implementations must be safe to share across tasks.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Assigns a fresh identifier to `receipt`, retains it and returns the identifier.
    ///
    /// Never overwrites an existing entry.
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId>;

    /// Returns the stored receipt, or `None` if `id` is unknown.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Arc<Receipt>>>;

    /// Number of receipts currently stored.
    async fn len(&self) -> Result<usize>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
