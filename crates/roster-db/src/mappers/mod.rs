//! Row to entity mappers
//!
//! Conversions from database rows (this crate) to domain entities (roster-core).

mod user;
