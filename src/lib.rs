//! Property portfolio data layer.
//!
//! Turns the ad-hoc nested records of a document store (`properties/{State}/{key}`)
//! into fully defaulted [`Property`] values, translating frontend ids through
//! static alias tables on the way.

pub mod admin;
pub mod alias;
pub mod config;
pub mod domain;
pub mod errors;
pub mod portfolio;
pub mod store;


pub use config::Config;
pub use domain::property::{normalize, Property};
pub use errors::StoreError;
pub use portfolio::Portfolio;
pub use store::{DocumentStore, InMemoryStore, RestStore, SqliteStore, StorePath};
