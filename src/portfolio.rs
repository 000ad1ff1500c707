// src/portfolio.rs
use crate::alias::{resolve, slug_for_property_key, slugify};
use crate::domain::property::{normalize, Property};
use crate::domain::sample::mock_property;
use crate::errors::StoreError;
use crate::store::{DocumentStore, StorePath};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Properties of one state, keyed by routing id.
pub type StateProperties = BTreeMap<String, Property>;

/// Read and write access to the property tree of a document store.
///
/// Every call is one independent round trip. "Nothing stored yet" is an `Ok`
/// outcome (empty map, `None`, or the development mock); store failures come
/// back as `Err` and are never folded into an empty result.
#[derive(Clone)]
pub struct Portfolio {
    store: Arc<dyn DocumentStore>,
    use_development_fallback: bool,
}

impl Portfolio {
    pub fn new(store: Arc<dyn DocumentStore>, use_development_fallback: bool) -> Self {
        Self {
            store,
            use_development_fallback,
        }
    }

    /// Every state with its properties. State ids are lowercased so routing
    /// stays stable whatever casing the store uses.
    pub async fn fetch_all(&self) -> Result<BTreeMap<String, StateProperties>, StoreError> {
        let path = StorePath::properties();
        debug!(%path, "fetching all properties");

        let Some(root) = self.store.read(&path).await? else {
            return Ok(BTreeMap::new());
        };

        let Some(states) = root.as_object() else {
            warn!(%path, "property root is not an object, treating as empty");
            return Ok(BTreeMap::new());
        };

        let mut out: BTreeMap<String, StateProperties> = BTreeMap::new();
        for (state_name, subtree) in states {
            out.entry(state_name.to_lowercase())
                .or_default()
                .extend(normalize_state(state_name, subtree));
        }

        Ok(out)
    }

    pub async fn fetch_by_state(&self, state_id: &str) -> Result<StateProperties, StoreError> {
        let resolved = resolve(state_id, None);
        let path = StorePath::properties().child(&resolved.state);
        debug!(state_id, %path, "fetching state");

        match self.store.read(&path).await? {
            Some(subtree) => Ok(normalize_state(&resolved.state, &subtree)),
            None => Ok(BTreeMap::new()),
        }
    }

    /// One property by frontend ids.
    ///
    /// When nothing is stored at the path, development setups get a mock
    /// carrying the requested slug; production gets `None`.
    pub async fn fetch_one(
        &self,
        state_id: &str,
        slug: &str,
    ) -> Result<Option<Property>, StoreError> {
        let path = property_path(state_id, slug);
        debug!(state_id, slug, %path, "fetching property");

        match self.store.read(&path).await? {
            Some(record) => Ok(Some(normalize(&record, slug, slug))),
            None if self.use_development_fallback => {
                debug!(%path, "no data stored, serving mock property");
                Ok(Some(mock_property(slug)))
            }
            None => Ok(None),
        }
    }

    /// Writes a raw record as-is, replacing whatever was stored at the path.
    pub async fn save_property_data(
        &self,
        state_id: &str,
        property_id: &str,
        record: &Value,
    ) -> Result<(), StoreError> {
        let path = property_path(state_id, property_id);
        debug!(%path, "saving property data");

        self.store.write(&path, record).await
    }

    /// The stored record without normalization.
    pub async fn read_raw(
        &self,
        state_id: &str,
        property_id: &str,
    ) -> Result<Option<Value>, StoreError> {
        self.store.read(&property_path(state_id, property_id)).await
    }
}

fn property_path(state_id: &str, slug: &str) -> StorePath {
    let resolved = resolve(state_id, Some(slug));
    let key = resolved.property_key.unwrap_or_else(|| slug.to_string());

    StorePath::properties().child(resolved.state).child(key)
}

/// Normalizes every record of one state subtree. Non-object entries are not
/// properties and are skipped.
///
/// When several store keys map to the same routing id, the key that already
/// equals the id keeps it (else the first key in order); the others are keyed
/// by their raw store key, which `fetch_one` resolves unchanged.
fn normalize_state(state_name: &str, subtree: &Value) -> StateProperties {
    let Some(records) = subtree.as_object() else {
        warn!(state = state_name, "state subtree is not an object, skipping");
        return BTreeMap::new();
    };

    let mut claims: BTreeMap<String, Vec<(&String, &Value)>> = BTreeMap::new();
    for (key, record) in records {
        if !record.is_object() {
            warn!(state = state_name, key = key.as_str(), "skipping non-object property entry");
            continue;
        }
        claims
            .entry(slug_for_property_key(key))
            .or_default()
            .push((key, record));
    }

    let mut out = StateProperties::new();
    for (id, mut claimants) in claims {
        let winner = claimants
            .iter()
            .position(|(key, _)| **key == id)
            .unwrap_or(0);
        let (_, record) = claimants.remove(winner);

        for (key, other) in claimants {
            warn!(
                state = state_name,
                key = key.as_str(),
                id = id.as_str(),
                "routing id already taken, keying record by its store key"
            );
            out.insert(key.clone(), normalize(other, key, &slugify(key)));
        }

        out.insert(id.clone(), normalize(record, &id, &id));
    }

    out
}
