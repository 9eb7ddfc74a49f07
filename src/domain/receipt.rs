use super::amount::Amount;
use crate::error::ReceiptError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier assigned to a receipt when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Accepts only the canonical lowercase hyphenated form produced by `Display`,
/// so each receipt answers to exactly one identifier string.
impl FromStr for ReceiptId {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReceiptError::ValidationError(format!("Invalid receipt id {s:?}"));

        let uuid = Uuid::try_parse(s).map_err(|_| invalid())?;
        if uuid.hyphenated().to_string() != s {
            return Err(invalid());
        }
        Ok(Self(uuid))
    }
}

/// A single line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The product description, stored verbatim.
    pub description: String,
    /// The price paid for this item.
    pub price: Amount,
}

impl Item {
    pub fn new(description: impl Into<String>, price: Amount) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }
}

/// A purchase receipt submitted for scoring.
///
/// `id` stays `None` until the receipt is handed to a
/// [`ReceiptStore`](super::ports::ReceiptStore), which assigns it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: Option<ReceiptId>,
    /// The name of the retailer or store the receipt is from.
    pub retailer: String,
    /// Naive local date and time of the purchase.
    pub purchased_at: NaiveDateTime,
    /// The total amount paid. Not checked against the item prices.
    pub total: Amount,
    pub items: Vec<Item>,
}

impl Receipt {
    pub fn new(
        retailer: impl Into<String>,
        purchased_at: NaiveDateTime,
        total: Amount,
        items: Vec<Item>,
    ) -> Self {
        Self {
            id: None,
            retailer: retailer.into(),
            purchased_at,
            total,
            items,
        }
    }

    /// Computes the loyalty points this receipt earns.
    pub fn points(&self) -> u64 {
        super::scoring::score(self)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{:?} {} {} {} items}}",
            self.retailer,
            self.purchased_at.format("%Y-%m-%d %H:%M"),
            self.total,
            self.items.len()
        )
    }
}
