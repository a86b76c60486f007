use std::fmt;
use std::ops::Range;

use thiserror::Error;

use crate::field::{LengthRule, Tag};

/// Everything that can go wrong while walking a buffer. None of these abort a dissection: each is
/// recorded as a [`Diagnostic`] on the offending byte range and the walk carries on using the
/// length from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated header: {needed} bytes needed, {available} available")]
    TruncatedHeader { needed: usize, available: usize },

    #[error("wrong length {actual} for {field}, expected {expected}")]
    WrongLength {
        field: &'static str,
        expected: LengthRule,
        actual: usize,
    },

    #[error("unknown tag {tag}")]
    UnknownTag { tag: Tag },

    #[error("no CHOICE alternative for tag {tag}")]
    UnknownChoiceTag { tag: Tag },

    #[error("indefinite length form is not supported")]
    IndefiniteLengthNotSupported,

    #[error("value truncated: {declared} bytes declared, {available} captured")]
    TruncatedValue { declared: usize, available: usize },

    #[error("length {length} overruns the enclosing region ({remaining} bytes left)")]
    LengthOverrun { length: usize, remaining: usize },

    #[error("length field of {octets} octets is not supported")]
    LengthTooLarge { octets: usize },

    #[error("expected tag {expected}, found {found}")]
    UnexpectedTag { expected: Tag, found: Tag },

    #[error("nesting deeper than {max} levels")]
    DepthExceeded { max: usize },

    #[error("{0} bytes of trailing data")]
    TrailingData(usize),

    #[error("{0}")]
    InvalidValue(String),
}

impl DecodeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DecodeError::InvalidValue(msg.into())
    }

    pub fn severity(&self) -> Severity {
        match self {
            DecodeError::UnknownTag { .. }
            | DecodeError::UnknownChoiceTag { .. }
            | DecodeError::UnexpectedTag { .. }
            | DecodeError::TrailingData(_)
            | DecodeError::InvalidValue(_) => Severity::Warning,
            DecodeError::TruncatedHeader { .. }
            | DecodeError::WrongLength { .. }
            | DecodeError::IndefiniteLengthNotSupported
            | DecodeError::TruncatedValue { .. }
            | DecodeError::LengthOverrun { .. }
            | DecodeError::LengthTooLarge { .. }
            | DecodeError::DepthExceeded { .. } => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("Warning"),
            Severity::Error => f.write_str("Error"),
        }
    }
}

/// A malformed-field marker, attached to a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub range: Range<usize>,
    pub error: DecodeError,
}

impl Diagnostic {
    pub fn new(range: Range<usize>, error: DecodeError) -> Self {
        Diagnostic {
            severity: error.severity(),
            range,
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (bytes {}..{})",
            self.severity, self.error, self.range.start, self.range.end
        )
    }
}

#[cfg(test)]
mod test_diagnostics {
    use super::*;

    #[test]
    fn unknown_things_are_warnings() {
        let tag = Tag::context(5);
        assert_eq!(DecodeError::UnknownTag { tag }.severity(), Severity::Warning);
        assert_eq!(
            DecodeError::UnknownChoiceTag { tag }.severity(),
            Severity::Warning
        );
        assert_eq!(DecodeError::TrailingData(3).severity(), Severity::Warning);
    }

    #[test]
    fn structural_damage_is_an_error() {
        let err = DecodeError::WrongLength {
            field: "IP Precedence Value",
            expected: LengthRule::Exact(1),
            actual: 2,
        };
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(
            err.to_string(),
            "wrong length 2 for IP Precedence Value, expected 1"
        );
        assert_eq!(
            DecodeError::IndefiniteLengthNotSupported.severity(),
            Severity::Error
        );
    }

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::new(3..5, DecodeError::TruncatedHeader { needed: 2, available: 1 });
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.to_string(),
            "[Error] truncated header: 2 bytes needed, 1 available (bytes 3..5)"
        );
    }
}
