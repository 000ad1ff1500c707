pub mod property;
pub mod sample;

pub use property::{normalize, title_case_slug, Property, StaffRole};
