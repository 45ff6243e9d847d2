use serde::Deserialize;

/// How a check treats a call whose version getter returned no version
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingVersionPolicy {
    /// An unknown version satisfies any criteria
    #[default]
    Allow,
    /// An unknown version fails with `VersionNotSupport`
    Reject,
}

/// Check configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    pub missing_version: MissingVersionPolicy,
}

impl CheckConfig {
    /// Configuration that fails calls with no resolvable version
    pub fn strict() -> Self {
        Self {
            missing_version: MissingVersionPolicy::Reject,
        }
    }
}
