//! Patrilineal tradition: children take the father's surname.
//!
//! Spouses keep their own names. A new father can be inferred from the
//! child's surname; a new mother cannot.

use super::default;
use crate::gedcom::ParsedName;
use crate::person::Sex;

pub(super) fn new_child_names(father: Option<&ParsedName>) -> Vec<String> {
    match father.and_then(ParsedName::first_surname) {
        Some(surname) => vec![ParsedName::from_surnames(&[surname]).to_record()],
        None => default::blank_names(),
    }
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    match (sex, child.first_surname()) {
        (Sex::Male, Some(surname)) => vec![ParsedName::from_surnames(&[surname]).to_record()],
        _ => default::blank_names(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_takes_fathers_surname() {
        let father = ParsedName::parse("Vincent /van Gogh/");
        assert_eq!(
            new_child_names(Some(&father)),
            vec!["1 NAME /van Gogh/\n2 TYPE birth\n2 SURN van Gogh".to_string()]
        );
    }

    #[test]
    fn test_no_father_yields_blank() {
        assert_eq!(new_child_names(None), vec!["1 NAME //\n2 TYPE birth".to_string()]);
    }

    #[test]
    fn test_father_inferred_from_child() {
        let child = ParsedName::parse("Anna /Smith/");
        assert_eq!(
            new_parent_names(&child, Sex::Male),
            vec!["1 NAME /Smith/\n2 TYPE birth\n2 SURN Smith".to_string()]
        );
    }

    #[test]
    fn test_mother_not_inferred_from_child() {
        let child = ParsedName::parse("Anna /Smith/");
        assert_eq!(
            new_parent_names(&child, Sex::Female),
            vec!["1 NAME //\n2 TYPE birth".to_string()]
        );
    }
}
