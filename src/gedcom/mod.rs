//! Minimal GEDCOM name handling.
//!
//! This module covers exactly the two pieces of GEDCOM the surname-tradition
//! engine needs: parsing `given /surname/` name strings into their components
//! and rendering level-numbered `NAME` records. Full GEDCOM import/export is
//! the job of the surrounding application, not this crate.

pub mod name;
pub mod record;

pub use name::ParsedName;
pub use record::{NameType, name_record};
