//! Paternal tradition: the patrilineal rule plus married names for wives.
//!
//! Children inherit exactly as under the patrilineal rule (see the dispatch
//! in the parent module). On top of that, a new wife takes the husband's
//! surname as a married name, and a new mother is assumed to have taken the
//! child's surname on marriage, so both get a blank birth name followed by a
//! married-name record.

use super::{default, patrilineal};
use crate::gedcom::{NameType, ParsedName};
use crate::person::Sex;

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    if sex == Sex::Female {
        if let Some(surname) = child.first_surname() {
            return birth_and_married(surname);
        }
    }
    patrilineal::new_parent_names(child, sex)
}

pub(super) fn new_spouse_names(spouse: &ParsedName, sex: Sex) -> Vec<String> {
    if sex == Sex::Female {
        if let Some(surname) = spouse.first_surname() {
            return birth_and_married(surname);
        }
    }
    default::blank_names()
}

/// A blank birth name followed by `surname` as a married name.
pub(super) fn birth_and_married(surname: &str) -> Vec<String> {
    vec![
        ParsedName::from_surnames(&[""]).to_record(),
        ParsedName::from_surnames(&[surname])
            .with_type(NameType::Married)
            .to_record(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wife_takes_husbands_surname_as_married_name() {
        let husband = ParsedName::parse("John /Smith/");
        assert_eq!(
            new_spouse_names(&husband, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Smith/\n2 TYPE married\n2 SURN Smith".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_husband_keeps_own_name() {
        let wife = ParsedName::parse("Mary /Black/");
        assert_eq!(
            new_spouse_names(&wife, Sex::Male),
            vec!["1 NAME //\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_new_mother_gets_married_name_from_child() {
        let child = ParsedName::parse("Anna /Smith/");
        assert_eq!(
            new_parent_names(&child, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Smith/\n2 TYPE married\n2 SURN Smith".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_father_gets_birth_name_from_child() {
        let child = ParsedName::parse("Anna /Smith/");
        assert_eq!(
            new_parent_names(&child, Sex::Male),
            vec!["1 NAME /Smith/\n2 TYPE birth\n2 SURN Smith".to_string()]
        );
    }
}
