//! Matrilineal tradition: children take the mother's surname.
//!
//! The mirror image of the patrilineal rule. A new mother can be inferred
//! from the child's surname; a new father cannot.

use super::default;
use crate::gedcom::ParsedName;
use crate::person::Sex;

pub(super) fn new_child_names(mother: Option<&ParsedName>) -> Vec<String> {
    match mother.and_then(ParsedName::first_surname) {
        Some(surname) => vec![ParsedName::from_surnames(&[surname]).to_record()],
        None => default::blank_names(),
    }
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    match (sex, child.first_surname()) {
        (Sex::Female, Some(surname)) => vec![ParsedName::from_surnames(&[surname]).to_record()],
        _ => default::blank_names(),
    }
}
