//! Polish tradition: the paternal rule with sex-inflected surname endings.
//!
//! Adjectival surnames decline by sex: Kowalski / Kowalska, Zawadzki /
//! Zawadzka. Children take the father's surname in the form matching their
//! own sex, a new father is inferred in the masculine form regardless of the
//! child's, and wives and mothers receive the feminine form as a married
//! name. Surnames without an adjectival ending pass through unchanged.

use super::{default, paternal};
use crate::gedcom::ParsedName;
use crate::person::Sex;

const INFLECT_FEMININE: [(&str, &str); 4] = [
    ("dzki", "dzka"),
    ("cki", "cka"),
    ("ski", "ska"),
    ("żki", "żka"),
];

const INFLECT_MASCULINE: [(&str, &str); 4] = [
    ("dzka", "dzki"),
    ("cka", "cki"),
    ("ska", "ski"),
    ("żka", "żki"),
];

fn inflect(surname: &str, rules: &[(&str, &str)]) -> String {
    for (from, to) in rules {
        if let Some(stem) = surname.strip_suffix(from) {
            return format!("{stem}{to}");
        }
    }
    surname.to_string()
}

pub(super) fn new_child_names(father: Option<&ParsedName>, sex: Sex) -> Vec<String> {
    match father.and_then(ParsedName::first_surname) {
        Some(surname) => {
            let surname = match sex {
                Sex::Female => inflect(surname, &INFLECT_FEMININE),
                _ => inflect(surname, &INFLECT_MASCULINE),
            };
            vec![ParsedName::from_surnames(&[&surname]).to_record()]
        }
        None => default::blank_names(),
    }
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    match (sex, child.first_surname()) {
        (Sex::Male, Some(surname)) => {
            let surname = inflect(surname, &INFLECT_MASCULINE);
            vec![ParsedName::from_surnames(&[&surname]).to_record()]
        }
        (Sex::Female, Some(surname)) => {
            paternal::birth_and_married(&inflect(surname, &INFLECT_FEMININE))
        }
        _ => default::blank_names(),
    }
}

pub(super) fn new_spouse_names(spouse: &ParsedName, sex: Sex) -> Vec<String> {
    match (sex, spouse.first_surname()) {
        (Sex::Female, Some(surname)) => {
            paternal::birth_and_married(&inflect(surname, &INFLECT_FEMININE))
        }
        _ => default::blank_names(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daughter_gets_feminine_form() {
        let father = ParsedName::parse("Jan /Kowalski/");
        assert_eq!(
            new_child_names(Some(&father), Sex::Female),
            vec!["1 NAME /Kowalska/\n2 TYPE birth\n2 SURN Kowalska".to_string()]
        );
    }

    #[test]
    fn test_son_keeps_masculine_form() {
        let father = ParsedName::parse("Jan /Kowalski/");
        assert_eq!(
            new_child_names(Some(&father), Sex::Male),
            vec!["1 NAME /Kowalski/\n2 TYPE birth\n2 SURN Kowalski".to_string()]
        );
    }

    #[test]
    fn test_father_inferred_in_masculine_form_from_daughter() {
        let daughter = ParsedName::parse("Anna /Zawadzka/");
        assert_eq!(
            new_parent_names(&daughter, Sex::Male),
            vec!["1 NAME /Zawadzki/\n2 TYPE birth\n2 SURN Zawadzki".to_string()]
        );
    }

    #[test]
    fn test_mother_gets_feminine_married_name() {
        let son = ParsedName::parse("Jan /Kowalski/");
        assert_eq!(
            new_parent_names(&son, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Kowalska/\n2 TYPE married\n2 SURN Kowalska".to_string(),
            ]
        );
    }

    #[test]
    fn test_wife_gets_feminine_married_name() {
        let husband = ParsedName::parse("Jan /Kowalski/");
        assert_eq!(
            new_spouse_names(&husband, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Kowalska/\n2 TYPE married\n2 SURN Kowalska".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_adjectival_surname_passes_through() {
        let father = ParsedName::parse("Jan /Nowak/");
        assert_eq!(
            new_child_names(Some(&father), Sex::Female),
            vec!["1 NAME /Nowak/\n2 TYPE birth\n2 SURN Nowak".to_string()]
        );
    }
}
