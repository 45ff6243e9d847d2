use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Invalid version criteria '{criteria}': {reason}")]
    InvalidCriteria { criteria: String, reason: String },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error(
        "Version {} is not supported by {target}",
        .version.as_deref().unwrap_or("<none>")
    )]
    VersionNotSupport {
        version: Option<String>,
        target: String,
    },

    #[error("No overloads registered for {0}")]
    UnknownTarget(String),

    #[error("Overloads for {target} were registered with a different signature")]
    SignatureMismatch { target: String },
}

impl CheckError {
    pub(crate) fn invalid_criteria(criteria: &str, reason: impl Into<String>) -> Self {
        CheckError::InvalidCriteria {
            criteria: criteria.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        CheckError::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
