//! Field validation core.
//!
//! Pure logic with no I/O: rule types, the JSON type predicate, and the
//! validator that filters a decoded JSON object down to its rule-approved
//! fields.

pub mod error;
pub mod validation;
