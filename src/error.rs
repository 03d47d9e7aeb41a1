use std::fmt;

#[derive(Debug)]
pub enum ResolveError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (value out of range, non-positive cap).
    ConfigValidation(String),
    /// Candidate record with an empty identifier.
    MissingCandidateId { position: usize },
    /// Candidate whose ship name normalizes to nothing.
    EmptyShipName { position: usize, candidate_id: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingCandidateId { position } => {
                write!(f, "candidate record at position {position}: missing candidate_id")
            }
            Self::EmptyShipName { position, candidate_id } => {
                write!(
                    f,
                    "candidate '{candidate_id}' at position {position}: ship name is empty after normalization"
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}
