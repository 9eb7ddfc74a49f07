//! Request and response bodies of the receipts API.

use crate::domain::amount::Amount;
use crate::domain::receipt::{Item, Receipt, ReceiptId};
use crate::domain::scoring::PointsBreakdown;
use crate::error::ReceiptError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub short_description: String,
    /// Price in major units, e.g. "6.49".
    pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    #[serde(default)]
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    #[serde(default)]
    pub items: Vec<ItemRequest>,
    /// Total in major units, e.g. "35.35".
    pub total: String,
}

impl ReceiptRequest {
    pub fn purchased_at(&self) -> Result<NaiveDateTime, ReceiptError> {
        let date = NaiveDate::parse_from_str(&self.purchase_date, PURCHASE_DATE_FORMAT)
            .map_err(|e| {
                ReceiptError::ValidationError(format!(
                    "Invalid purchase date {:?}: {e}",
                    self.purchase_date
                ))
            })?;
        let time = NaiveTime::parse_from_str(&self.purchase_time, PURCHASE_TIME_FORMAT)
            .map_err(|e| {
                ReceiptError::ValidationError(format!(
                    "Invalid purchase time {:?}: {e}",
                    self.purchase_time
                ))
            })?;
        Ok(date.and_time(time))
    }
}

impl TryFrom<ItemRequest> for Item {
    type Error = ReceiptError;

    fn try_from(item: ItemRequest) -> Result<Self, Self::Error> {
        let price: Amount = item.price.parse().map_err(|e: ReceiptError| {
            ReceiptError::ValidationError(format!(
                "Item {:?}: {e}",
                item.short_description
            ))
        })?;
        Ok(Item::new(item.short_description, price))
    }
}

impl TryFrom<ReceiptRequest> for Receipt {
    type Error = ReceiptError;

    fn try_from(request: ReceiptRequest) -> Result<Self, Self::Error> {
        let purchased_at = request.purchased_at()?;
        let total: Amount = request.total.parse()?;
        let items = request
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt::new(request.retailer, purchased_at, total, items))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownResponse {
    pub points: u64,
    pub breakdown: PointsBreakdown,
}

impl From<PointsBreakdown> for BreakdownResponse {
    fn from(breakdown: PointsBreakdown) -> Self {
        Self {
            points: breakdown.total(),
            breakdown,
        }
    }
}
