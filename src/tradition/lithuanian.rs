//! Lithuanian tradition: the paternal rule with daughter and wife forms.
//!
//! A man's surname ends in -as, -is, -ys, -ius or -us. His daughters carry
//! the corresponding -aitė/-ytė/-iūtė/-utė form, his wife the -ienė form.
//! Parent inference first recovers the masculine form from a daughter's
//! surname, then applies the requested inflection. Suffix tables are ordered
//! longest-first so -ius is tried before -us.

use super::{default, paternal};
use crate::gedcom::ParsedName;
use crate::person::Sex;

const INFLECT_DAUGHTER: [(&str, &str); 5] = [
    ("ius", "iūtė"),
    ("ys", "ytė"),
    ("is", "ytė"),
    ("as", "aitė"),
    ("us", "utė"),
];

const INFLECT_WIFE: [(&str, &str); 5] = [
    ("ius", "ienė"),
    ("ys", "ienė"),
    ("is", "ienė"),
    ("as", "ienė"),
    ("us", "ienė"),
];

const INFLECT_MASCULINE: [(&str, &str); 4] = [
    ("iūtė", "ius"),
    ("aitė", "as"),
    ("ytė", "is"),
    ("utė", "us"),
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
                Sex::Female => inflect(surname, &INFLECT_DAUGHTER),
                _ => surname.to_string(),
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
            let masculine = inflect(surname, &INFLECT_MASCULINE);
            paternal::birth_and_married(&inflect(&masculine, &INFLECT_WIFE))
        }
        _ => default::blank_names(),
    }
}

pub(super) fn new_spouse_names(spouse: &ParsedName, sex: Sex) -> Vec<String> {
    match (sex, spouse.first_surname()) {
        (Sex::Female, Some(surname)) => {
            paternal::birth_and_married(&inflect(surname, &INFLECT_WIFE))
        }
        _ => default::blank_names(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daughter_forms() {
        for (father, daughter) in [
            ("Paulauskas", "Paulauskaitė"),
            ("Katilius", "Katiliūtė"),
            ("Vilkas", "Vilkaitė"),
            ("Stonys", "Stonytė"),
            ("Balčius", "Balčiūtė"),
        ] {
            let name = ParsedName::parse(&format!("Jonas /{father}/"));
            assert_eq!(
                new_child_names(Some(&name), Sex::Female),
                vec![format!("1 NAME /{daughter}/\n2 TYPE birth\n2 SURN {daughter}")]
            );
        }
    }

    #[test]
    fn test_son_keeps_fathers_surname() {
        let father = ParsedName::parse("Jonas /Paulauskas/");
        assert_eq!(
            new_child_names(Some(&father), Sex::Male),
            vec!["1 NAME /Paulauskas/\n2 TYPE birth\n2 SURN Paulauskas".to_string()]
        );
    }

    #[test]
    fn test_father_recovered_from_daughters_surname() {
        let daughter = ParsedName::parse("Ona /Paulauskaitė/");
        assert_eq!(
            new_parent_names(&daughter, Sex::Male),
            vec!["1 NAME /Paulauskas/\n2 TYPE birth\n2 SURN Paulauskas".to_string()]
        );
    }

    #[test]
    fn test_mother_gets_wife_form_from_son() {
        let son = ParsedName::parse("Jonas /Paulauskas/");
        assert_eq!(
            new_parent_names(&son, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Paulauskienė/\n2 TYPE married\n2 SURN Paulauskienė".to_string(),
            ]
        );
    }

    #[test]
    fn test_wife_gets_iene_form() {
        let husband = ParsedName::parse("Jonas /Katilius/");
        assert_eq!(
            new_spouse_names(&husband, Sex::Female),
            vec![
                "1 NAME //\n2 TYPE birth".to_string(),
                "1 NAME /Katilienė/\n2 TYPE married\n2 SURN Katilienė".to_string(),
            ]
        );
    }
}
