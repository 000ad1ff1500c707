// src/tests/portfolio_tests/fetch_tests.rs

use crate::errors::StoreError;
use crate::tests::utils::{failing_portfolio, portfolio_with};
use serde_json::{json, Value};

fn sample_tree() -> Value {
    json!({
        "properties": {
            "New Jersey": {
                "monarch": {
                    "name": "The Monarch",
                    "unit": 240,
                    "pm": { "name": "Sarah Thompson", "email": "sarah.thompson@example.com" }
                },
                "Liberty Square": { "address": "1 Liberty Square, Newark, NJ" },
                "Elm Street Lofts": { "yearBuilt": "1925" }
            },
            "New York": {
                "harbor-point": { "phone": "(631) 555-0110" }
            }
        }
    })
}

#[tokio::test]
async fn fetch_all_groups_by_lowercased_state() {
    let portfolio = portfolio_with(sample_tree(), false);

    let all = portfolio.fetch_all().await.unwrap();

    // 1. State ids are lowercased
    let states: Vec<&str> = all.keys().map(String::as_str).collect();
    assert_eq!(states, vec!["new jersey", "new york"]);

    // 2. Property ids are routing slugs, not raw store keys
    let nj = &all["new jersey"];
    let ids: Vec<&str> = nj.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["elm-street-lofts", "liberty-square", "the-monarch"]);

    // 3. Records are normalized
    let monarch = &nj["the-monarch"];
    assert_eq!(monarch.id, "the-monarch");
    assert_eq!(monarch.name, "The Monarch");
    assert_eq!(monarch.units, "240");
    assert_eq!(monarch.contact.manager, "Sarah Thompson");

    let lofts = &nj["elm-street-lofts"];
    assert_eq!(lofts.name, "Elm Street Lofts");
    assert_eq!(lofts.images, vec!["/logo.png".to_string()]);

    assert_eq!(all["new york"]["harbor-pointe"].contact.phone, "(631) 555-0110");
}

#[tokio::test]
async fn fetch_all_on_empty_store_is_empty() {
    let portfolio = portfolio_with(Value::Null, true);
    assert!(portfolio.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_by_state_resolves_state_alias() {
    let portfolio = portfolio_with(sample_tree(), false);

    let nj = portfolio.fetch_by_state("newjersey").await.unwrap();
    assert_eq!(nj.len(), 3);
    assert!(nj.contains_key("the-monarch"));

    // The store name itself passes through the alias table unchanged.
    let same = portfolio.fetch_by_state("New Jersey").await.unwrap();
    assert_eq!(nj, same);
}

#[tokio::test]
async fn fetch_by_state_with_no_properties_is_empty_not_error() {
    let portfolio = portfolio_with(sample_tree(), false);

    let delaware = portfolio.fetch_by_state("delaware").await.unwrap();
    assert!(delaware.is_empty());

    let unknown = portfolio.fetch_by_state("atlantis").await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn fetch_by_state_skips_entries_that_are_not_records() {
    let portfolio = portfolio_with(
        json!({
            "properties": {
                "Maryland": {
                    "stonegate": { "unit": "60" },
                    "notes": "remember to add photos",
                    "count": 2
                }
            }
        }),
        false,
    );

    let maryland = portfolio.fetch_by_state("maryland").await.unwrap();
    assert_eq!(maryland.len(), 1);
    assert_eq!(maryland["stonegate"].units, "60");
}

#[tokio::test]
async fn fetch_one_follows_property_alias() {
    let portfolio = portfolio_with(sample_tree(), false);

    let property = portfolio
        .fetch_one("newjersey", "the-monarch")
        .await
        .unwrap()
        .expect("monarch should be stored");

    assert_eq!(property.id, "the-monarch");
    assert_eq!(property.name, "The Monarch");
    assert_eq!(property.staff.pm.email, "sarah.thompson@example.com");
}

#[tokio::test]
async fn fetch_one_uses_slug_for_missing_name() {
    let portfolio = portfolio_with(sample_tree(), false);

    let property = portfolio
        .fetch_one("newjersey", "liberty-square")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(property.name, "Liberty Square");
    assert_eq!(property.address, "1 Liberty Square, Newark, NJ");
}

#[tokio::test]
async fn missing_property_gets_mock_in_development() {
    let portfolio = portfolio_with(sample_tree(), true);

    let property = portfolio
        .fetch_one("newjersey", "willow-creek")
        .await
        .unwrap()
        .expect("development fallback should produce a mock");

    assert_eq!(property.id, "willow-creek");
    assert!(!property.contact.manager.is_empty());
}

#[tokio::test]
async fn missing_property_is_none_in_production() {
    let portfolio = portfolio_with(sample_tree(), false);

    let property = portfolio.fetch_one("newjersey", "willow-creek").await.unwrap();
    assert!(property.is_none());
}

#[tokio::test]
async fn stored_data_wins_over_mock() {
    let portfolio = portfolio_with(sample_tree(), true);

    let property = portfolio
        .fetch_one("newyork", "harbor-pointe")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(property.contact.phone, "(631) 555-0110");
    assert_eq!(property.contact.manager, "");
}

#[tokio::test]
async fn store_failures_are_not_empty_results() {
    // The development fallback must not hide a broken store either.
    let portfolio = failing_portfolio(true);

    assert!(matches!(
        portfolio.fetch_all().await,
        Err(StoreError::Network(_))
    ));
    assert!(matches!(
        portfolio.fetch_by_state("newjersey").await,
        Err(StoreError::Network(_))
    ));
    assert!(matches!(
        portfolio.fetch_one("newjersey", "the-monarch").await,
        Err(StoreError::Network(_))
    ));
}

#[tokio::test]
async fn fetch_all_state_ids_route_back_to_fetch_by_state() {
    let portfolio = portfolio_with(sample_tree(), false);

    let all = portfolio.fetch_all().await.unwrap();
    assert!(!all.is_empty());

    for (state_id, properties) in &all {
        let by_state = portfolio.fetch_by_state(state_id).await.unwrap();
        assert_eq!(&by_state, properties, "state id {state_id:?}");
    }
}

#[tokio::test]
async fn colliding_store_keys_keep_both_records() {
    let portfolio = portfolio_with(
        json!({
            "properties": {
                "Delaware": {
                    "Oak Villas": { "unit": "12" },
                    "oak-villas": { "unit": "48" }
                }
            }
        }),
        false,
    );

    let delaware = portfolio.fetch_by_state("delaware").await.unwrap();

    // 1. Nothing is dropped
    assert_eq!(delaware.len(), 2);

    // 2. The key already in slug form keeps the slug
    assert_eq!(delaware["oak-villas"].units, "48");

    // 3. The other one is keyed by its store key and still routes
    let other = &delaware["Oak Villas"];
    assert_eq!(other.id, "Oak Villas");
    assert_eq!(other.name, "Oak Villas");
    assert_eq!(other.units, "12");

    let fetched = portfolio
        .fetch_one("delaware", &other.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.units, "12");
}
