use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Attempts at drawing an unused identifier before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// A thread-safe in-memory store for receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Arc<Receipt>>>>`: lookups share the read
/// lock, inserts take the write lock. Stored receipts are never mutated, so
/// callers get cheap `Arc` handles instead of copies.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Arc<Receipt>>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, mut receipt: Receipt) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write().await;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ReceiptId::new_random();
            match receipts.entry(id) {
                Entry::Occupied(_) => {
                    warn!(%id, "Receipt identifier collision, drawing again");
                }
                Entry::Vacant(slot) => {
                    receipt.id = Some(id);
                    slot.insert(Arc::new(receipt));
                    debug!(%id, "Stored receipt");
                    return Ok(id);
                }
            }
        }

        Err(ReceiptError::InternalError(format!(
            "No unused receipt identifier after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Arc<Receipt>>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}
