use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::domain::scoring::{self, PointsBreakdown};
use crate::error::{ReceiptError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// The main entry point for receipt processing.
///
/// `ReceiptProcessor` owns the storage backend and combines it with the scoring
/// rules. It is shared by all request handlers, so every method takes `&self`.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Stores a validated receipt and returns its freshly assigned identifier.
    pub async fn process(&self, receipt: Receipt) -> Result<ReceiptId> {
        let summary = receipt.to_string();
        let id = self.store.put(receipt).await?;
        info!(%id, receipt = %summary, "Processed receipt");
        Ok(id)
    }

    /// Looks up a stored receipt by its textual identifier.
    ///
    /// Malformed identifiers can never have been assigned, so they are reported
    /// as not found rather than as invalid input.
    pub async fn receipt(&self, id: &str) -> Result<Arc<Receipt>> {
        let not_found = || ReceiptError::NotFound(format!("Receipt with id={id} not found"));

        let Ok(receipt_id) = id.parse::<ReceiptId>() else {
            return Err(not_found());
        };
        self.store.get(&receipt_id).await?.ok_or_else(not_found)
    }

    /// Computes the points earned by the receipt stored under `id`.
    pub async fn points(&self, id: &str) -> Result<u64> {
        let receipt = self.receipt(id).await?;
        let points = scoring::score(&receipt);
        debug!(id, points, "Scored receipt");
        Ok(points)
    }

    /// Returns the per-rule contributions for the receipt stored under `id`.
    pub async fn breakdown(&self, id: &str) -> Result<PointsBreakdown> {
        let receipt = self.receipt(id).await?;
        Ok(scoring::breakdown(&receipt))
    }

    /// Number of receipts processed so far.
    pub async fn stored_receipts(&self) -> Result<usize> {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use crate::domain::ports::ReceiptStore;
    use crate::domain::receipt::Item;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn corner_market() -> Receipt {
        Receipt::new(
            "M&M Corner Market",
            NaiveDate::from_ymd_opt(2022, 3, 20)
                .unwrap()
                .and_hms_opt(14, 33, 0)
                .unwrap(),
            Amount::from_minor_units(900),
            vec![Item::new("Gatorade", Amount::from_minor_units(225)); 4],
        )
    }

    struct UnavailableStore;

    #[async_trait]
    impl ReceiptStore for UnavailableStore {
        async fn put(&self, _receipt: Receipt) -> Result<ReceiptId> {
            Err(ReceiptError::InternalError("store unavailable".to_string()))
        }

        async fn get(&self, _id: &ReceiptId) -> Result<Option<Arc<Receipt>>> {
            Err(ReceiptError::InternalError("store unavailable".to_string()))
        }

        async fn len(&self) -> Result<usize> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_process_then_score() {
        let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));

        let id = processor.process(corner_market()).await.unwrap();
        let points = processor.points(&id.to_string()).await.unwrap();

        assert_eq!(points, 109);
        assert_eq!(processor.stored_receipts().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_breakdown_matches_points() {
        let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));
        let id = processor.process(corner_market()).await.unwrap().to_string();

        let breakdown = processor.breakdown(&id).await.unwrap();
        assert_eq!(breakdown.total(), processor.points(&id).await.unwrap());
        assert_eq!(breakdown.afternoon, 10);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));
        processor.process(corner_market()).await.unwrap();

        let unknown = ReceiptId::new_random().to_string();
        assert!(matches!(
            processor.points(&unknown).await,
            Err(ReceiptError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));

        for id in ["", "not found", "1234", "../receipts"] {
            assert!(
                matches!(processor.points(id).await, Err(ReceiptError::NotFound(_))),
                "{id:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let processor = ReceiptProcessor::new(Box::new(UnavailableStore));

        assert!(matches!(
            processor.process(corner_market()).await,
            Err(ReceiptError::InternalError(_))
        ));
        assert!(matches!(
            processor.points(&ReceiptId::new_random().to_string()).await,
            Err(ReceiptError::InternalError(_))
        ));
    }
}
