//! Error taxonomy and exit-code mapping.

use std::fmt;

/// Everything that can stop a run. `Usage` and `Capacity` surface before
/// any randomness is consumed; `Internal` marks a contract violation that
/// a correct build never reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid or contradictory configuration.
    Usage(String),
    /// Requested character classes exceed the keyset buffer.
    Capacity,
    /// Broken invariant between components.
    Internal(&'static str),
}

impl Error {
    /// Process exit code: 1 for anything the user caused, 2 for bugs.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::Capacity => 1,
            Error::Internal(_) => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "{}", msg),
            Error::Capacity => write!(f, "excessive argument"),
            Error::Internal(what) => write!(f, "internal error: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(Error::Usage("bad".into()).exit_code(), 1);
        assert_eq!(Error::Capacity.exit_code(), 1);
        assert_eq!(Error::Internal("oops").exit_code(), 2);
    }
}
