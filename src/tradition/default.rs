//! The fallback tradition: no automatic surname inheritance.
//!
//! Every operation yields the single-blank name record. Traditions that
//! inherit a single surname reuse [`blank_names`] as their fallback when a
//! relative contributes nothing.

use crate::gedcom::ParsedName;

pub(super) fn blank_names() -> Vec<String> {
    vec![ParsedName::from_surnames(&[""]).to_record()]
}
