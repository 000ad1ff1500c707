// src/tests/portfolio_tests/sqlite_tests.rs

use crate::admin::seed_sample_data;
use crate::store::{DocumentStore, SqliteStore, StorePath};
use crate::tests::utils::temp_sqlite_path;
use crate::Portfolio;
use serde_json::json;
use std::sync::Arc;

fn make_portfolio(path: &str, use_development_fallback: bool) -> Portfolio {
    Portfolio::new(Arc::new(SqliteStore::new(path)), use_development_fallback)
}

#[tokio::test]
async fn fresh_database_has_no_properties() {
    let portfolio = make_portfolio(&temp_sqlite_path("sqlite_fresh"), false);

    assert!(portfolio.fetch_all().await.unwrap().is_empty());
    assert!(portfolio.fetch_by_state("newjersey").await.unwrap().is_empty());
    assert!(portfolio
        .fetch_one("newjersey", "the-monarch")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn records_round_trip_through_sqlite() {
    let portfolio = make_portfolio(&temp_sqlite_path("sqlite_round_trip"), false);
    let record = json!({
        "name": "Maple Gardens",
        "unit": "88",
        "images": ["/images/maple.jpg"],
        "pm": { "name": "Kevin Patel", "email": "kevin.patel@example.com" }
    });

    portfolio
        .save_property_data("connecticut", "maple-gardens", &record)
        .await
        .unwrap();

    let raw = portfolio.read_raw("connecticut", "maple-gardens").await.unwrap();
    assert_eq!(raw, Some(record));

    let property = portfolio
        .fetch_one("connecticut", "maple-gardens")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(property.contact.manager, "Kevin Patel");
    assert_eq!(property.images, vec!["/images/maple.jpg".to_string()]);
}

#[tokio::test]
async fn data_survives_reopening_the_file() {
    let path = temp_sqlite_path("sqlite_reopen");

    let written = seed_sample_data(&make_portfolio(&path, false)).await.unwrap();

    let reopened = make_portfolio(&path, false);
    let all = reopened.fetch_all().await.unwrap();
    let total: usize = all.values().map(|props| props.len()).sum();
    assert_eq!(total, written);
}

#[tokio::test]
async fn null_write_removes_the_record() {
    let store = SqliteStore::new(temp_sqlite_path("sqlite_delete"));
    let path = StorePath::properties().child("Delaware").child("cedar-ridge");

    store.write(&path, &json!({"unit": "30"})).await.unwrap();
    assert!(store.read(&path).await.unwrap().is_some());

    store.write(&path, &serde_json::Value::Null).await.unwrap();
    assert_eq!(store.read(&path).await.unwrap(), None);
    assert_eq!(store.read(&StorePath::properties()).await.unwrap(), None);
}
