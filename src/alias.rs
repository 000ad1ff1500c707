// src/alias.rs

//! Static alias tables between frontend routing ids and remote store keys.
//!
//! Routing uses lowercase state ids and dashed slugs, while the store keys
//! states by their display name and properties by whatever key they were first
//! saved under. Both tables are total-default: an id that is not listed
//! resolves to itself.

use std::collections::HashMap;
use std::sync::OnceLock;

static STATE_ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static PROPERTY_ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Frontend state id -> store state name. Lowercased store names are listed
/// too, since collection reads hand those out as state ids.
const STATE_TABLE: &[(&str, &str)] = &[
    ("newjersey", "New Jersey"),
    ("new-jersey", "New Jersey"),
    ("new jersey", "New Jersey"),
    ("newyork", "New York"),
    ("new-york", "New York"),
    ("new york", "New York"),
    ("pennsylvania", "Pennsylvania"),
    ("connecticut", "Connecticut"),
    ("delaware", "Delaware"),
    ("maryland", "Maryland"),
    ("massachusetts", "Massachusetts"),
    ("virginia", "Virginia"),
    ("northcarolina", "North Carolina"),
    ("north-carolina", "North Carolina"),
    ("north carolina", "North Carolina"),
    ("southcarolina", "South Carolina"),
    ("south carolina", "South Carolina"),
    ("florida", "Florida"),
];

/// Property slug -> store property key. Identity rows are kept on purpose:
/// they mark slugs that are known to be routed.
const PROPERTY_TABLE: &[(&str, &str)] = &[
    ("riverview-commons", "riverview-commons"),
    ("the-monarch", "monarch"),
    ("parkside-at-tinton-falls", "parkside-tinton-falls"),
    ("willow-creek", "willowcreek"),
    ("harbor-pointe", "harbor-point"),
    ("maple-gardens", "maple-gardens"),
    ("cedar-ridge", "cedar-ridge"),
    ("liberty-square", "Liberty Square"),
    ("the-overlook", "overlook-apartments"),
    ("brookside-manor", "brookside-manor"),
    ("chestnut-hill-terrace", "chestnut-hill"),
    ("stonegate", "stonegate"),
    ("lakeview-towers", "lake-view-towers"),
    ("sample-property", "sample-property"),
];

fn state_aliases() -> &'static HashMap<&'static str, &'static str> {
    STATE_ALIASES.get_or_init(|| STATE_TABLE.iter().copied().collect())
}

fn property_aliases() -> &'static HashMap<&'static str, &'static str> {
    PROPERTY_ALIASES.get_or_init(|| PROPERTY_TABLE.iter().copied().collect())
}

/// A frontend (state, slug) pair translated into store addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub state: String,
    pub property_key: Option<String>,
}

/// Store state name for a frontend state id; unknown ids pass through.
pub fn resolve_state(state_id: &str) -> String {
    state_aliases()
        .get(state_id)
        .copied()
        .unwrap_or(state_id)
        .to_string()
}

/// Store property key for a slug; unknown slugs pass through.
pub fn resolve_property(slug: &str) -> String {
    property_aliases()
        .get(slug)
        .copied()
        .unwrap_or(slug)
        .to_string()
}

pub fn resolve(state_id: &str, slug: Option<&str>) -> ResolvedPath {
    ResolvedPath {
        state: resolve_state(state_id),
        property_key: slug.map(resolve_property),
    }
}

/// Routing id for a key found in the store.
///
/// The first slug in the table that maps to `key` wins; keys nobody aliased are
/// slugified so they are still URL-safe.
pub fn slug_for_property_key(key: &str) -> String {
    PROPERTY_TABLE
        .iter()
        .find(|(_, store_key)| *store_key == key)
        .map(|(slug, _)| slug.to_string())
        .unwrap_or_else(|| slugify(key))
}

/// Lowercase, with every run of non-alphanumerics collapsed to a single `-`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}
