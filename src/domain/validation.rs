use std::fmt;

/// Which check rejected a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// `content` is not valid base64.
    Decode,
    /// Payload exceeds the decoded size bound.
    TooLarge,
    /// Decoded bytes are not a YAML/JSON document.
    Parse,
    /// Required top-level section is absent.
    MissingSection,
    /// Required field inside the section is absent.
    MissingField,
    /// Field value is outside the allowed set.
    InvalidValue,
}

impl RejectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "DecodeError",
            Self::TooLarge => "PayloadTooLarge",
            Self::Parse => "ParseError",
            Self::MissingSection => "MissingSection",
            Self::MissingField => "MissingField",
            Self::InvalidValue => "InvalidValue",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    /// Short human-readable explanation surfaced to the operator.
    pub reason: String,
}

impl Rejection {
    pub fn new(kind: RejectionKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for Rejection {}

/// Outcome of a single gate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}
