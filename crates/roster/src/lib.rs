//! Roster domain module (celebrity records and their derivations).
//!
//! This crate contains the record model and the pure functions around it —
//! normalization of raw dataset entries, age derivation, name search, and
//! the input character classes used when staging edits. No IO, no HTTP, no
//! storage; the bundled seed dataset is embedded at compile time.

pub mod age;
pub mod dataset;
pub mod gender;
pub mod record;
pub mod search;
pub mod validate;

pub use age::calculate_age;
pub use dataset::{DatasetError, bundled};
pub use gender::Gender;
pub use record::{DEFAULT_PICTURE, RawEntry, Record, normalize, normalize_all};
pub use search::filter_by_name;
pub use validate::{is_name_like, parse_age_input};
