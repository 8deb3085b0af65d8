//! The collaborator boundary between the engine and the caller.
//!
//! The surname-tradition engine never touches a database or a GEDCOM file;
//! whoever calls it supplies each relative's recorded name facts through the
//! narrow [`PersonFacts`] interface. Any lookup failure is the caller's to
//! surface before this crate is invoked.

/// Read access to a person's recorded name facts.
///
/// Implementations return the raw GEDCOM name values in record order. The
/// engine reads only the first entry (the primary name); a person with no
/// recorded name contributes nothing, which is never an error.
pub trait PersonFacts {
    /// Recorded name values in record order, primary name first.
    fn name_facts(&self) -> Vec<String>;

    /// The primary (first recorded) name, if any.
    fn primary_name(&self) -> Option<String> {
        self.name_facts().into_iter().next()
    }
}

/// A plain vector-backed [`PersonFacts`] implementation.
///
/// Suitable for callers that have already resolved a person's names, and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct RecordedNames {
    facts: Vec<String>,
}

impl RecordedNames {
    /// Wraps an ordered list of recorded name values.
    pub fn new(facts: Vec<String>) -> Self {
        RecordedNames { facts }
    }

    /// Convenience constructor for a person with a single recorded name.
    pub fn single(name: &str) -> Self {
        RecordedNames {
            facts: vec![name.to_string()],
        }
    }
}

impl PersonFacts for RecordedNames {
    fn name_facts(&self) -> Vec<String> {
        self.facts.clone()
    }
}

/// GEDCOM sex marker of an individual.
///
/// Drives which parent's surnames are inherited and in what form, per
/// tradition. Anything other than `M` or `F` maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// Parses a GEDCOM `SEX` value. Unrecognized values map to `Unknown`.
    pub fn from_gedcom(value: &str) -> Self {
        match value.trim() {
            "M" | "m" => Sex::Male,
            "F" | "f" => Sex::Female,
            _ => Sex::Unknown,
        }
    }

    /// The GEDCOM `SEX` value for this marker.
    pub fn as_gedcom(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "U",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_name_is_first_fact() {
        let person = RecordedNames::new(vec![
            "Gabriel /Garcia/".to_string(),
            "Gabo /Garcia/".to_string(),
        ]);
        assert_eq!(person.primary_name(), Some("Gabriel /Garcia/".to_string()));
    }

    #[test]
    fn test_no_facts_yields_no_primary_name() {
        assert_eq!(RecordedNames::default().primary_name(), None);
    }

    #[test]
    fn test_sex_from_gedcom() {
        assert_eq!(Sex::from_gedcom("M"), Sex::Male);
        assert_eq!(Sex::from_gedcom("f"), Sex::Female);
        assert_eq!(Sex::from_gedcom("U"), Sex::Unknown);
        assert_eq!(Sex::from_gedcom("X"), Sex::Unknown);
        assert_eq!(Sex::from_gedcom(""), Sex::Unknown);
    }

    #[test]
    fn test_sex_round_trip() {
        for sex in [Sex::Male, Sex::Female, Sex::Unknown] {
            assert_eq!(Sex::from_gedcom(sex.as_gedcom()), sex);
        }
    }
}
