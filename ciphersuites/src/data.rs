use std::fmt;
use std::error::Error;

/// Errors raised while turning configuration text into ciphersuites.
///
/// Lookups themselves never fail; they return `None`.
#[derive(Debug, PartialEq, Clone)]
pub enum SuiteError {
    UnknownName(String),
    UnknownId(u16),
    InvalidId(String),
    EmptyList,
    OversizedList(usize),
}

impl SuiteError {
    fn as_str(&self) -> &str {
        match *self {
            SuiteError::UnknownName(_) => "unknown ciphersuite name",
            SuiteError::UnknownId(_) => "unknown ciphersuite identifier",
            SuiteError::InvalidId(_) => "malformed ciphersuite identifier",
            SuiteError::EmptyList => "no ciphersuite configured",
            SuiteError::OversizedList(_) => "ciphersuite list too long to encode",
        }
    }
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SuiteError::UnknownName(ref name) =>
                write!(f, "{} '{}'", self.as_str(), name),
            SuiteError::UnknownId(id) =>
                write!(f, "{} {:#06x}", self.as_str(), id),
            SuiteError::InvalidId(ref text) =>
                write!(f, "{} '{}'", self.as_str(), text),
            SuiteError::EmptyList => write!(f, "{}", self.as_str()),
            SuiteError::OversizedList(n) =>
                write!(f, "{}: {} entries", self.as_str(), n),
        }
    }
}

impl Error for SuiteError {}
