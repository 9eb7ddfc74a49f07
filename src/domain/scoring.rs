//! Rule-based loyalty scoring.
//!
//! Every rule is evaluated independently against the stored receipt values and
//! the score is the plain sum of all contributions.

use super::amount::Amount;
use super::receipt::{Item, Receipt};
use chrono::{Datelike, Timelike};
use serde::Serialize;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Minor units per point for qualifying item descriptions: 20% of the price in
/// major units is `price / 500` in cents.
const DESCRIPTION_PRICE_DIVISOR: u64 = 500;

/// Purchase hours (inclusive start, exclusive end) that earn the afternoon bonus.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Points earned by each scoring rule for a single receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer_alphanumeric: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_alphanumeric,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Evaluates every scoring rule for `receipt`.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total.minor_units();
    let day = receipt.purchased_at.day();
    let hour = receipt.purchased_at.hour();

    PointsBreakdown {
        retailer_alphanumeric: receipt
            .retailer
            .chars()
            .filter(|c| c.is_alphanumeric())
            .count() as u64,
        round_total: if total % 100 == 0 { ROUND_TOTAL_POINTS } else { 0 },
        quarter_total: if total % 25 == 0 { QUARTER_TOTAL_POINTS } else { 0 },
        item_pairs: ITEM_PAIR_POINTS.saturating_mul(receipt.items.len() as u64 / 2),
        // Prices are only bounded by u64, so many large items must not overflow.
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: if day % 2 == 1 { ODD_DAY_POINTS } else { 0 },
        afternoon: if AFTERNOON_HOURS.contains(&hour) {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

/// Computes the loyalty points for `receipt`.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

// Length is measured in bytes; an empty trimmed description counts as a multiple of 3.
fn description_points(item: &Item) -> u64 {
    if item.description.trim().len() % 3 == 0 {
        price_points(item.price)
    } else {
        0
    }
}

fn price_points(price: Amount) -> u64 {
    price.minor_units().div_ceil(DESCRIPTION_PRICE_DIVISOR)
}
