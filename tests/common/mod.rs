#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::rngs::StdRng;
use receipt_processor::application::processor::ReceiptProcessor;
use receipt_processor::domain::amount::Amount;
use receipt_processor::domain::ports::ReceiptStoreBox;
use receipt_processor::domain::receipt::{Item, Receipt};
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::{RouterOptions, create_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TARGET_RECEIPT: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;

pub const CORNER_MARKET_RECEIPT: &str = r#"{
  "retailer": "M&M Corner Market",
  "purchaseDate": "2022-03-20",
  "purchaseTime": "14:33",
  "items": [
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"}
  ],
  "total": "9.00"
}"#;

/// Router over a fresh in-memory store, plus the processor behind it.
pub fn test_app(debug: bool) -> (Router, Arc<ReceiptProcessor>) {
    app_with_store(Box::new(InMemoryReceiptStore::new()), debug)
}

pub fn app_with_store(store: ReceiptStoreBox, debug: bool) -> (Router, Arc<ReceiptProcessor>) {
    let processor = Arc::new(ReceiptProcessor::new(store));
    let router = create_router(Arc::clone(&processor), RouterOptions { debug });
    (router, processor)
}

/// Sends a request through the router and decodes the JSON response body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post_receipt(app: &Router, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/receipts/process", Some(body)).await
}

pub async fn get_points(app: &Router, id: &str) -> (StatusCode, Value) {
    send(app, Method::GET, &format!("/receipts/{id}/points"), None).await
}

/// Posts `body` and returns the assigned id, asserting success.
pub async fn process(app: &Router, body: &str) -> String {
    let (status, json) = post_receipt(app, body).await;
    assert_eq!(status, StatusCode::OK, "unexpected response {json}");
    json["id"].as_str().expect("id in response").to_string()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

const RETAILERS: [&str; 6] = [
    "Target",
    "Walgreens",
    "M&M Corner Market",
    "Café Ünïcode",
    "",
    "  7-Eleven #42  ",
];

const DESCRIPTIONS: [&str; 6] = [
    "Gatorade",
    "Emils Cheese Pizza",
    "Pepsi - 12-oz",
    "   Klarbrunn 12-PK 12 FL OZ  ",
    "Dasani",
    "",
];

/// Builds a receipt with randomized fields.
pub fn random_receipt(rng: &mut StdRng) -> Receipt {
    let item_count = rng.gen_range(0..8);
    let items = (0..item_count)
        .map(|_| {
            Item::new(
                DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())],
                Amount::from_minor_units(rng.gen_range(0..10_000)),
            )
        })
        .collect();

    let total = if rng.gen_bool(0.3) {
        rng.gen_range(0..400) * 25
    } else {
        rng.gen_range(0..50_000)
    };

    Receipt::new(
        RETAILERS[rng.gen_range(0..RETAILERS.len())],
        at(
            2022,
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
            rng.gen_range(0..24),
            rng.gen_range(0..60),
        ),
        Amount::from_minor_units(total),
        items,
    )
}
