//! Spanish tradition: two surnames, father's first then mother's first.
//!
//! Every name carries two surname slots. A child receives the father's first
//! surname followed by the mother's first surname, identically for every sex
//! (Spanish naming law makes the rule sex-invariant). Compound segments are
//! split on the conjunction `y` before the first surname is taken, so
//! `/Garcia y Iglesias/` contributes `Garcia`. Spouses never inherit each
//! other's surnames.

use crate::gedcom::ParsedName;
use crate::person::Sex;

const CONJUNCTION: &str = "y";

/// The two-slot blank record shared with the Portuguese tradition.
pub(super) fn blank_names() -> Vec<String> {
    vec![ParsedName::from_surnames(&["", ""]).to_record()]
}

pub(super) fn new_child_names(
    father: Option<&ParsedName>,
    mother: Option<&ParsedName>,
) -> Vec<String> {
    let father_surname = first_surname(father);
    let mother_surname = first_surname(mother);

    if father_surname.is_none() && mother_surname.is_none() {
        return blank_names();
    }

    vec![
        ParsedName::from_surnames(&[
            father_surname.as_deref().unwrap_or(""),
            mother_surname.as_deref().unwrap_or(""),
        ])
        .to_record(),
    ]
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    // The child's first surname segment came from the father, the second
    // from the mother; either parent carries it in their own first slot.
    // Selection is positional over the bounded segments, so a blank segment
    // means that parent contributed nothing. With an unknown sex there is
    // nothing to select.
    let segment = match sex {
        Sex::Male => child.surnames().first(),
        Sex::Female => child.surnames().get(1),
        Sex::Unknown => None,
    };

    match segment.and_then(|segment| segment_surname(segment)) {
        Some(surname) => vec![ParsedName::from_surnames(&[&surname, ""]).to_record()],
        None => blank_names(),
    }
}

fn first_surname(name: Option<&ParsedName>) -> Option<String> {
    name?.split_surnames(CONJUNCTION).into_iter().next()
}

/// The heritable surname within one bounded segment: the first name of a
/// compound joined by the conjunction, or nothing for a blank segment.
fn segment_surname(segment: &str) -> Option<String> {
    let infix = format!(" {CONJUNCTION} ");
    segment
        .split(infix.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_combines_first_surnames() {
        let father = ParsedName::parse("Gabriel /Garcia/ /Iglesias/");
        let mother = ParsedName::parse("Gabriel /Ruiz/ /Lorca/");
        assert_eq!(
            new_child_names(Some(&father), Some(&mother)),
            vec!["1 NAME /Garcia/ /Ruiz/\n2 TYPE birth\n2 SURN Garcia,Ruiz".to_string()]
        );
    }

    #[test]
    fn test_single_parent_leaves_other_slot_blank() {
        let father = ParsedName::parse("Gabriel /Garcia/ /Iglesias/");
        assert_eq!(
            new_child_names(Some(&father), None),
            vec!["1 NAME /Garcia/ //\n2 TYPE birth\n2 SURN Garcia".to_string()]
        );
    }

    #[test]
    fn test_no_contribution_yields_two_slot_blank() {
        assert_eq!(new_child_names(None, None), vec!["1 NAME // //\n2 TYPE birth".to_string()]);
    }

    #[test]
    fn test_compound_segment_contributes_its_first_name() {
        let father = ParsedName::parse("Gabriel /Garcia y Iglesias/");
        let mother = ParsedName::parse("Gabriel /Ruiz/ /Lorca/");
        assert_eq!(
            new_child_names(Some(&father), Some(&mother)),
            vec!["1 NAME /Garcia/ /Ruiz/\n2 TYPE birth\n2 SURN Garcia,Ruiz".to_string()]
        );
    }

    #[test]
    fn test_parent_inference_is_positional_over_segments() {
        // A blank first segment means the father contributed nothing; the
        // mother's surname must not shift into his position.
        let child = ParsedName::parse("Gabriel // /Iglesias/");
        assert_eq!(
            new_parent_names(&child, Sex::Male),
            vec!["1 NAME // //\n2 TYPE birth".to_string()]
        );
        assert_eq!(
            new_parent_names(&child, Sex::Female),
            vec!["1 NAME /Iglesias/ //\n2 TYPE birth\n2 SURN Iglesias".to_string()]
        );
    }

    #[test]
    fn test_parent_inference_splits_compound_within_its_segment() {
        let child = ParsedName::parse("Gabriel /Garcia y Lopez/ /Iglesias/");
        assert_eq!(
            new_parent_names(&child, Sex::Male),
            vec!["1 NAME /Garcia/ //\n2 TYPE birth\n2 SURN Garcia".to_string()]
        );
        assert_eq!(
            new_parent_names(&child, Sex::Female),
            vec!["1 NAME /Iglesias/ //\n2 TYPE birth\n2 SURN Iglesias".to_string()]
        );
    }

    #[test]
    fn test_parent_inference_selects_by_sex() {
        let child = ParsedName::parse("Gabriel /Garcia/ /Iglesias/");
        assert_eq!(
            new_parent_names(&child, Sex::Male),
            vec!["1 NAME /Garcia/ //\n2 TYPE birth\n2 SURN Garcia".to_string()]
        );
        assert_eq!(
            new_parent_names(&child, Sex::Female),
            vec!["1 NAME /Iglesias/ //\n2 TYPE birth\n2 SURN Iglesias".to_string()]
        );
        assert_eq!(
            new_parent_names(&child, Sex::Unknown),
            vec!["1 NAME // //\n2 TYPE birth".to_string()]
        );
    }
}
