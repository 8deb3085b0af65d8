//! Parsing of GEDCOM name strings.
//!
//! A GEDCOM name value interleaves given-name text with surname segments
//! bounded by slashes: `Gabriel /Garcia/ /Iglesias/`. An absent surname is
//! recorded as an explicit empty segment (`//`), never omitted, so a
//! two-surname blank template renders as `// //`.

use super::record::{NameType, name_record};

/// A parsed GEDCOM name value.
///
/// Holds the ordered given-name tokens and surname segments of one name
/// string, plus the optional name type (`birth`/`married`) attached when the
/// name is turned back into a record. Parsing never fails: malformed input
/// degrades to given-name text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    given: Vec<String>,
    surnames: Vec<String>,
    name_type: Option<NameType>,
}

impl ParsedName {
    /// Parses a raw GEDCOM name string.
    ///
    /// Pairs of `/` delimiters bound each surname segment. Text before the
    /// first delimiter is given-name text. An unterminated trailing segment
    /// (odd number of slashes) is treated as given-name text. Infix text
    /// between segments (such as the Spanish conjunction in
    /// `/Garcia/ y /Iglesias/`) separates segments but is not part of any
    /// name component.
    ///
    /// # Example
    /// ```
    /// use gedcom_names::gedcom::ParsedName;
    ///
    /// let name = ParsedName::parse("Gabriel /Garcia/ /Iglesias/");
    /// assert_eq!(name.given(), &["Gabriel".to_string()]);
    /// assert_eq!(name.surnames(), &["Garcia".to_string(), "Iglesias".to_string()]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('/').collect();

        let mut given: Vec<String> = parts[0]
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let mut surnames = Vec::new();

        let mut index = 1;
        while index < parts.len() {
            if index + 1 < parts.len() {
                // A later part exists, so this segment has a closing slash.
                surnames.push(parts[index].trim().to_string());
            } else {
                // Unterminated segment: degrade to given-name text.
                given.extend(parts[index].split_whitespace().map(str::to_string));
            }
            index += 2;
        }

        ParsedName {
            given,
            surnames,
            name_type: None,
        }
    }

    /// Builds a name consisting only of surname segments, given names empty.
    ///
    /// Blank entries are kept as explicit empty segments so the rendered
    /// form bounds every slot, e.g. `from_surnames(&["Garcia", ""])` renders
    /// as `/Garcia/ //`.
    pub fn from_surnames(surnames: &[&str]) -> Self {
        ParsedName {
            given: Vec::new(),
            surnames: surnames.iter().map(|s| s.to_string()).collect(),
            name_type: None,
        }
    }

    /// Builds a name consisting only of given-name tokens, no surname.
    ///
    /// Used by patronymic traditions, where the inherited name is a given
    /// name rather than a family name.
    pub fn from_given(given: &[&str]) -> Self {
        ParsedName {
            given: given.iter().map(|s| s.to_string()).collect(),
            surnames: Vec::new(),
            name_type: None,
        }
    }

    /// Attaches a name type, used for the `2 TYPE` line of [`Self::to_record`].
    pub fn with_type(mut self, name_type: NameType) -> Self {
        self.name_type = Some(name_type);
        self
    }

    /// Ordered given-name tokens.
    pub fn given(&self) -> &[String] {
        &self.given
    }

    /// First given-name token, if any.
    pub fn first_given(&self) -> Option<&str> {
        self.given.first().map(String::as_str)
    }

    /// Last given-name token, if any. Patronymics sit at the end of the
    /// given-name text.
    pub fn last_given(&self) -> Option<&str> {
        self.given.last().map(String::as_str)
    }

    /// Ordered surname segments, exactly as written (blanks included).
    pub fn surnames(&self) -> &[String] {
        &self.surnames
    }

    /// First non-blank surname segment, if any.
    pub fn first_surname(&self) -> Option<&str> {
        self.surnames
            .iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// The name type attached with [`Self::with_type`], if any.
    pub fn name_type(&self) -> Option<NameType> {
        self.name_type
    }

    /// Surname segments with the culture-specific compound split applied.
    ///
    /// Each segment is additionally split on the conjunction token (Spanish
    /// `y`, Portuguese `e`), and blank entries are dropped. The conjunction
    /// is a property of the tradition, not the parser, which is why it is a
    /// parameter here rather than handled in [`Self::parse`].
    ///
    /// # Example
    /// ```
    /// use gedcom_names::gedcom::ParsedName;
    ///
    /// let compound = ParsedName::parse("Gabriel /Garcia y Iglesias/");
    /// assert_eq!(compound.split_surnames("y"), vec!["Garcia", "Iglesias"]);
    /// ```
    pub fn split_surnames(&self, conjunction: &str) -> Vec<String> {
        let infix = format!(" {conjunction} ");
        self.surnames
            .iter()
            .flat_map(|segment| segment.split(infix.as_str()))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Renders the name back to its raw GEDCOM form.
    ///
    /// Every surname segment is bounded by slashes, blank segments included,
    /// so re-parsing the rendered form yields an equal `ParsedName`.
    pub fn render(&self) -> String {
        let mut pieces: Vec<String> = self.given.clone();
        for surname in &self.surnames {
            pieces.push(format!("/{surname}/"));
        }
        pieces.join(" ")
    }

    /// Renders the full GEDCOM `NAME` record for this name.
    ///
    /// The type defaults to `birth` when none was attached; the `SURN` line
    /// lists this name's non-blank surname segments in order.
    pub fn to_record(&self) -> String {
        name_record(
            &self.render(),
            self.name_type.unwrap_or_default(),
            &self.surnames,
        )
    }
}
