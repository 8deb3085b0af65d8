//! GEDCOM Surname-Tradition Engine
//!
//! This library computes the GEDCOM name records a newly created individual
//! (child, spouse or parent) should inherit from its relatives, under a
//! culture-specific surname tradition configured per family tree.
//!
//! All computations are pure functions over immutable inputs: no I/O, no
//! shared state, no failure modes. Missing relatives and malformed name
//! strings contribute nothing and the engine falls back to the tradition's
//! blank-name template.
//!
//! # Examples
//!
//! ```rust
//! use gedcom_names::person::{RecordedNames, Sex};
//! use gedcom_names::tradition::SurnameTradition;
//!
//! let father = RecordedNames::single("Gabriel /Garcia/ /Iglesias/");
//! let mother = RecordedNames::single("Gabriel /Ruiz/ /Lorca/");
//!
//! let tradition = SurnameTradition::for_identifier("spanish");
//! let names = tradition.new_child_names(Some(&father), Some(&mother), Sex::Male);
//!
//! assert_eq!(
//!     names,
//!     vec!["1 NAME /Garcia/ /Ruiz/\n2 TYPE birth\n2 SURN Garcia,Ruiz".to_string()]
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod gedcom;
pub mod person;
pub mod tradition;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use gedcom::{NameType, ParsedName, name_record};
pub use person::{PersonFacts, RecordedNames, Sex};
pub use tradition::SurnameTradition;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
