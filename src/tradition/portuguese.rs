//! Portuguese tradition: two surnames, mother's last then father's last.
//!
//! The structural twin of the Spanish rule with the opposite slot order and
//! the conjunction `e`: each parent contributes the last of their surnames,
//! and the mother's comes first. The heritable surname therefore sits in the
//! last slot, which is where parent inference places it.

use super::spanish;
use crate::gedcom::ParsedName;
use crate::person::Sex;

const CONJUNCTION: &str = "e";

pub(super) fn new_child_names(
    father: Option<&ParsedName>,
    mother: Option<&ParsedName>,
) -> Vec<String> {
    let father_surname = last_surname(father);
    let mother_surname = last_surname(mother);

    if father_surname.is_none() && mother_surname.is_none() {
        return spanish::blank_names();
    }

    vec![
        ParsedName::from_surnames(&[
            mother_surname.as_deref().unwrap_or(""),
            father_surname.as_deref().unwrap_or(""),
        ])
        .to_record(),
    ]
}

pub(super) fn new_parent_names(child: &ParsedName, sex: Sex) -> Vec<String> {
    // The child's last surname segment came from the father, the first from
    // the mother; either parent carries it in their own last slot. Selection
    // is positional over the bounded segments, so a blank segment means that
    // parent contributed nothing. With an unknown sex there is nothing to
    // select.
    let segment = match sex {
        Sex::Male => child.surnames().last(),
        Sex::Female => child.surnames().first(),
        Sex::Unknown => None,
    };

    match segment.and_then(|segment| segment_surname(segment)) {
        Some(surname) => vec![ParsedName::from_surnames(&["", &surname]).to_record()],
        None => spanish::blank_names(),
    }
}

fn last_surname(name: Option<&ParsedName>) -> Option<String> {
    name?.split_surnames(CONJUNCTION).into_iter().next_back()
}

/// The heritable surname within one bounded segment: the last name of a
/// compound joined by the conjunction, or nothing for a blank segment.
fn segment_surname(segment: &str) -> Option<String> {
    let infix = format!(" {CONJUNCTION} ");
    segment
        .rsplit(infix.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
