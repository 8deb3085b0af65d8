//! Rendering of GEDCOM `NAME` records.
//!
//! The record shape is fixed and line-oriented:
//!
//! ```text
//! 1 NAME <given> /<surname>/ [/<surname2>/ ...]
//! 2 TYPE birth
//! 2 SURN <comma-joined non-blank surnames>
//! ```
//!
//! The `SURN` line is only present when at least one non-blank surname
//! exists. Keeping this renderer separate from the tradition logic lets the
//! composition rules and the text formatting be tested independently.

/// The `TYPE` tag value attached to a generated name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameType {
    /// The name an individual was given at birth.
    #[default]
    Birth,
    /// A name taken on marriage.
    Married,
}

impl NameType {
    /// The GEDCOM tag value for this name type.
    pub fn as_tag(self) -> &'static str {
        match self {
            NameType::Birth => "birth",
            NameType::Married => "married",
        }
    }
}

/// Renders one GEDCOM `NAME` record.
///
/// # Arguments
/// * `name` - The full name value, surnames already bounded by slashes
/// * `name_type` - Value for the `2 TYPE` line
/// * `surnames` - Surname segments in order; blank segments are skipped when
///   building the `2 SURN` line, and the line is omitted entirely when no
///   non-blank segment remains
///
/// # Example
/// ```
/// use gedcom_names::gedcom::{NameType, name_record};
///
/// let record = name_record(
///     "/Garcia/ /Ruiz/",
///     NameType::Birth,
///     &["Garcia".to_string(), "Ruiz".to_string()],
/// );
/// assert_eq!(record, "1 NAME /Garcia/ /Ruiz/\n2 TYPE birth\n2 SURN Garcia,Ruiz");
/// ```
pub fn name_record(name: &str, name_type: NameType, surnames: &[String]) -> String {
    let mut record = format!("1 NAME {name}\n2 TYPE {}", name_type.as_tag());

    let surn = surnames
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    if !surn.is_empty() {
        record.push_str("\n2 SURN ");
        record.push_str(&surn);
    }

    record
}
