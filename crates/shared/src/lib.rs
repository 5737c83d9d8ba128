//! Domain records, wire payloads, and the static course catalog shared by the
//! interaction core and its rendering surfaces.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod protocol;

pub use catalog::Catalog;
