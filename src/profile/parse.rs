use core::fmt;
use core::str::FromStr;

use super::category::ValueCategory;
use super::cv::CvQualifiers;
use super::qualified::{QualifiedType, QualifierProfile};

/// Error returned when a type spelling cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseProfileError {
    /// The input was blank.
    Empty,
    /// Only qualifiers, no base type.
    MissingBase,
    /// `const` or `volatile` written twice.
    DuplicateQualifier(&'static str),
    /// More than two `&`, or a `&` that is not at the end.
    BadReference(String),
    /// A word that is neither a qualifier nor part of a type name.
    UnexpectedToken(String),
}

impl fmt::Display for ParseProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseProfileError::Empty => f.write_str("empty type"),
            ParseProfileError::MissingBase => f.write_str("qualifiers without a base type"),
            ParseProfileError::DuplicateQualifier(q) => write!(f, "duplicate `{q}`"),
            ParseProfileError::BadReference(s) => write!(f, "malformed reference declarator in `{s}`"),
            ParseProfileError::UnexpectedToken(t) => write!(f, "unexpected token `{t}`"),
        }
    }
}

impl std::error::Error for ParseProfileError {}

fn is_type_word(word: &str) -> bool {
    word.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ':')
}

/// Parses spellings such as `int`, `const long&` or `unsigned long volatile const&&`.
///
/// Qualifiers may appear before or after the base; the reference declarator
/// must come last.
impl FromStr for QualifiedType {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseProfileError::Empty);
        }

        let body = s.trim_end_matches('&');
        let category = match s.len() - body.len() {
            0 => ValueCategory::Value,
            1 => ValueCategory::Lvalue,
            2 => ValueCategory::Rvalue,
            _ => return Err(ParseProfileError::BadReference(s.to_owned())),
        };
        if body.contains('&') {
            return Err(ParseProfileError::BadReference(s.to_owned()));
        }

        let mut cv = CvQualifiers::NONE;
        let mut words = Vec::new();
        for word in body.split_whitespace() {
            match word {
                "const" if cv.is_const => return Err(ParseProfileError::DuplicateQualifier("const")),
                "const" => cv.is_const = true,
                "volatile" if cv.is_volatile => return Err(ParseProfileError::DuplicateQualifier("volatile")),
                "volatile" => cv.is_volatile = true,
                w if is_type_word(w) => words.push(w),
                w => return Err(ParseProfileError::UnexpectedToken(w.to_owned())),
            }
        }
        if words.is_empty() {
            return Err(ParseProfileError::MissingBase);
        }

        Ok(QualifiedType::new(words.join(" "), QualifierProfile::new(category, cv)))
    }
}
