//! Icelandic tradition: patronymics instead of family surnames.
//!
//! A child's second name is the father's given name plus `sson` for sons or
//! `sdóttir` for daughters; when no father is known the mother's given name
//! is used the same way (a matronymic). The patronymic is a given name in
//! GEDCOM terms, so records never carry surname segments or a `SURN` line.
//! A new father's given name can be recovered by stripping the child's
//! patronymic suffix; a new mother's cannot, since matronymics are the
//! exception.

use super::default;
use crate::gedcom::ParsedName;
use crate::person::Sex;

const SON_SUFFIX: &str = "sson";
const DAUGHTER_SUFFIX: &str = "sdóttir";

pub(super) fn new_child_names(
    father: Option<&ParsedName>,
    mother: Option<&ParsedName>,
    sex: Sex,
) -> Vec<String> {
    let stem = father
        .and_then(ParsedName::first_given)
        .or_else(|| mother.and_then(ParsedName::first_given));

    match (sex, stem) {
        (Sex::Male, Some(given)) => {
            vec![ParsedName::from_given(&[&format!("{given}{SON_SUFFIX}")]).to_record()]
        }
        (Sex::Female, Some(given)) => {
            vec![ParsedName::from_given(&[&format!("{given}{DAUGHTER_SUFFIX}")]).to_record()]
        }
        _ => default::blank_names(),
    }
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    if sex == Sex::Male {
        if let Some(given) = child.last_given().and_then(strip_patronymic) {
            return vec![ParsedName::from_given(&[given]).to_record()];
        }
    }
    default::blank_names()
}

fn strip_patronymic(name: &str) -> Option<&str> {
    let stem = name
        .strip_suffix(SON_SUFFIX)
        .or_else(|| name.strip_suffix(DAUGHTER_SUFFIX))?;
    if stem.is_empty() { None } else { Some(stem) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_son_gets_patronymic() {
        let father = ParsedName::parse("Jon Einarsson");
        assert_eq!(
            new_child_names(Some(&father), None, Sex::Male),
            vec!["1 NAME Jonsson\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_daughter_gets_patronymic() {
        let father = ParsedName::parse("Jon Einarsson");
        assert_eq!(
            new_child_names(Some(&father), None, Sex::Female),
            vec!["1 NAME Jonsdóttir\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_matronymic_when_no_father() {
        let mother = ParsedName::parse("Eva Stefansdóttir");
        assert_eq!(
            new_child_names(None, Some(&mother), Sex::Male),
            vec!["1 NAME Evasson\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_unknown_sex_yields_blank() {
        let father = ParsedName::parse("Jon Einarsson");
        assert_eq!(
            new_child_names(Some(&father), None, Sex::Unknown),
            vec!["1 NAME //\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_father_recovered_from_patronymic() {
        let son = ParsedName::parse("Einar Jonsson");
        assert_eq!(
            new_parent_names(&son, Sex::Male),
            vec!["1 NAME Jon\n2 TYPE birth".to_string()]
        );

        let daughter = ParsedName::parse("Anna Jonsdóttir");
        assert_eq!(
            new_parent_names(&daughter, Sex::Male),
            vec!["1 NAME Jon\n2 TYPE birth".to_string()]
        );
    }

    #[test]
    fn test_mother_not_inferred() {
        let son = ParsedName::parse("Einar Jonsson");
        assert_eq!(
            new_parent_names(&son, Sex::Female),
            vec!["1 NAME //\n2 TYPE birth".to_string()]
        );
    }
}
