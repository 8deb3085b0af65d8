//! Culture-specific surname inheritance rules.
//!
//! Each culture the engine knows about is one variant of
//! [`SurnameTradition`]; the variants share a single operation set and differ
//! only in how they compose a new individual's name from the names of known
//! relatives. Every operation is a pure function of its inputs: a missing
//! relative, a missing name fact or a malformed name string contributes
//! nothing and the operation falls back to the tradition's blank-name
//! record, never an error.
//!
//! A tradition is selected once per family tree (see
//! [`SurnameTradition::for_identifier`]) and the resulting value is freely
//! copyable and safe to share across threads.

mod default;
mod icelandic;
mod lithuanian;
mod matrilineal;
mod paternal;
mod patrilineal;
mod polish;
mod portuguese;
mod spanish;

use crate::gedcom::ParsedName;
use crate::person::{PersonFacts, Sex};

/// A surname tradition: the naming convention configured for a family tree.
///
/// The set of variants is closed by design. The previous generation of this
/// engine instantiated tradition classes from loose strings; the enum makes
/// the selector a total mapping with one fallback arm and lets the compiler
/// check every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurnameTradition {
    /// No surname inheritance; new individuals start from a blank name.
    Default,
    /// Children take the father's surname; wives take the husband's surname
    /// as a married name.
    Paternal,
    /// Children take the father's surname; spouses keep their own names.
    Patrilineal,
    /// Children take the mother's surname; spouses keep their own names.
    Matrilineal,
    /// Two surnames: father's first surname then mother's first surname.
    Spanish,
    /// Two surnames: mother's last surname then father's last surname.
    Portuguese,
    /// Father's surname with sex-inflected -ski/-cki/-dzki/-żki endings.
    Polish,
    /// Father's surname with daughter (-aitė) and wife (-ienė) forms.
    Lithuanian,
    /// Patronymics built from the father's given name; no family surnames.
    Icelandic,
}

impl SurnameTradition {
    /// Every supported tradition, in the order they are listed to users.
    pub const ALL: [SurnameTradition; 9] = [
        SurnameTradition::Default,
        SurnameTradition::Paternal,
        SurnameTradition::Patrilineal,
        SurnameTradition::Matrilineal,
        SurnameTradition::Spanish,
        SurnameTradition::Portuguese,
        SurnameTradition::Polish,
        SurnameTradition::Lithuanian,
        SurnameTradition::Icelandic,
    ];

    /// Resolves a configured tradition identifier.
    ///
    /// The identifiers form a closed, versioned set; an unknown identifier
    /// falls back to [`SurnameTradition::Default`] rather than failing, so a
    /// stale or mistyped tree setting can never break name computation.
    ///
    /// # Example
    /// ```
    /// use gedcom_names::tradition::SurnameTradition;
    ///
    /// assert_eq!(SurnameTradition::for_identifier("spanish"), SurnameTradition::Spanish);
    /// assert_eq!(SurnameTradition::for_identifier("klingon"), SurnameTradition::Default);
    /// ```
    pub fn for_identifier(identifier: &str) -> Self {
        match identifier {
            "paternal" => SurnameTradition::Paternal,
            "patrilineal" => SurnameTradition::Patrilineal,
            "matrilineal" => SurnameTradition::Matrilineal,
            "spanish" => SurnameTradition::Spanish,
            "portuguese" => SurnameTradition::Portuguese,
            "polish" => SurnameTradition::Polish,
            "lithuanian" => SurnameTradition::Lithuanian,
            "icelandic" => SurnameTradition::Icelandic,
            _ => SurnameTradition::Default,
        }
    }

    /// Whether an identifier names a supported tradition.
    pub fn is_known_identifier(identifier: &str) -> bool {
        identifier == "none"
            || SurnameTradition::for_identifier(identifier) != SurnameTradition::Default
    }

    /// The configuration identifier of this tradition.
    pub fn identifier(self) -> &'static str {
        match self {
            SurnameTradition::Default => "none",
            SurnameTradition::Paternal => "paternal",
            SurnameTradition::Patrilineal => "patrilineal",
            SurnameTradition::Matrilineal => "matrilineal",
            SurnameTradition::Spanish => "spanish",
            SurnameTradition::Portuguese => "portuguese",
            SurnameTradition::Polish => "polish",
            SurnameTradition::Lithuanian => "lithuanian",
            SurnameTradition::Icelandic => "icelandic",
        }
    }

    /// A short human-readable description, used by CLI listings.
    pub fn label(self) -> &'static str {
        match self {
            SurnameTradition::Default => "no automatic surnames",
            SurnameTradition::Paternal => "father's surname, wives take the husband's surname",
            SurnameTradition::Patrilineal => "father's surname",
            SurnameTradition::Matrilineal => "mother's surname",
            SurnameTradition::Spanish => "father's first surname, then mother's first surname",
            SurnameTradition::Portuguese => "mother's last surname, then father's last surname",
            SurnameTradition::Polish => "father's surname, feminine -ska/-cka/-dzka/-żka forms",
            SurnameTradition::Lithuanian => "father's surname, daughter and wife inflections",
            SurnameTradition::Icelandic => "patronymics (-sson / -sdóttir), no surnames",
        }
    }

    /// Whether this tradition uses fixed family surnames at all.
    pub fn uses_surnames(self) -> bool {
        !matches!(self, SurnameTradition::Icelandic)
    }

    /// The blank-name template for an individual with no known relatives.
    pub fn default_name(self) -> &'static str {
        match self {
            SurnameTradition::Spanish | SurnameTradition::Portuguese => "// //",
            SurnameTradition::Icelandic => "",
            _ => "//",
        }
    }

    /// Computes the name records a new child should receive.
    ///
    /// Either parent may be absent or nameless; whatever is missing simply
    /// contributes no surname. The result is always at least one record.
    pub fn new_child_names(
        self,
        father: Option<&dyn PersonFacts>,
        mother: Option<&dyn PersonFacts>,
        sex: Sex,
    ) -> Vec<String> {
        let father = primary_parsed(father);
        let mother = primary_parsed(mother);

        match self {
            SurnameTradition::Default => default::blank_names(),
            SurnameTradition::Paternal | SurnameTradition::Patrilineal => {
                patrilineal::new_child_names(father.as_ref())
            }
            SurnameTradition::Matrilineal => matrilineal::new_child_names(mother.as_ref()),
            SurnameTradition::Spanish => spanish::new_child_names(father.as_ref(), mother.as_ref()),
            SurnameTradition::Portuguese => {
                portuguese::new_child_names(father.as_ref(), mother.as_ref())
            }
            SurnameTradition::Polish => polish::new_child_names(father.as_ref(), sex),
            SurnameTradition::Lithuanian => lithuanian::new_child_names(father.as_ref(), sex),
            SurnameTradition::Icelandic => {
                icelandic::new_child_names(father.as_ref(), mother.as_ref(), sex)
            }
        }
    }

    /// Computes the name records a newly created parent of `child` should
    /// receive, inferred backward from the child's recorded name.
    ///
    /// `sex` is the sex of the parent being created; it selects which of the
    /// child's name components the parent can have contributed.
    pub fn new_parent_names(self, child: &dyn PersonFacts, sex: Sex) -> Vec<String> {
        let child = match primary_parsed(Some(child)) {
            Some(name) => name,
            None => return self.blank_names(),
        };

        match self {
            SurnameTradition::Default => default::blank_names(),
            SurnameTradition::Paternal => paternal::new_parent_names(&child, sex),
            SurnameTradition::Patrilineal => patrilineal::new_parent_names(&child, sex),
            SurnameTradition::Matrilineal => matrilineal::new_parent_names(&child, sex),
            SurnameTradition::Spanish => spanish::new_parent_names(&child, sex),
            SurnameTradition::Portuguese => portuguese::new_parent_names(&child, sex),
            SurnameTradition::Polish => polish::new_parent_names(&child, sex),
            SurnameTradition::Lithuanian => lithuanian::new_parent_names(&child, sex),
            SurnameTradition::Icelandic => icelandic::new_parent_names(&child, sex),
        }
    }

    /// Computes the name records a newly created spouse of `spouse` should
    /// receive.
    ///
    /// In most traditions spouses keep their own names, so this returns the
    /// blank-name record; the paternal family of traditions gives a new wife
    /// the husband's surname as a married name.
    pub fn new_spouse_names(self, spouse: &dyn PersonFacts, sex: Sex) -> Vec<String> {
        let spouse = match primary_parsed(Some(spouse)) {
            Some(name) => name,
            None => return self.blank_names(),
        };

        match self {
            SurnameTradition::Paternal => paternal::new_spouse_names(&spouse, sex),
            SurnameTradition::Polish => polish::new_spouse_names(&spouse, sex),
            SurnameTradition::Lithuanian => lithuanian::new_spouse_names(&spouse, sex),
            _ => self.blank_names(),
        }
    }

    /// The blank-name record set for this tradition.
    fn blank_names(self) -> Vec<String> {
        match self {
            SurnameTradition::Spanish | SurnameTradition::Portuguese => spanish::blank_names(),
            _ => default::blank_names(),
        }
    }
}

/// Parses a person's primary name fact, if the person and the fact exist.
fn primary_parsed(person: Option<&dyn PersonFacts>) -> Option<ParsedName> {
    let raw = person?.primary_name()?;
    Some(ParsedName::parse(&raw))
}
