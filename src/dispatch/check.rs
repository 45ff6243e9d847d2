//! The version check "decorator"

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{CheckConfig, MissingVersionPolicy};
use crate::dispatch::BindingKind;
use crate::dispatch::getter::VersionGetter;
use crate::version::criteria::Criteria;
use crate::version::error::CheckError;
use crate::version::value::VersionValue;

/// Parsed criteria paired with the getter that supplies the runtime version
///
/// Cheap to clone: the getter is shared.
pub struct Check<A: 'static> {
    criteria: Criteria,
    getter: Arc<dyn VersionGetter<A>>,
    config: CheckConfig,
}

/// Build a check from a criteria string and a getter closure.
///
/// Criteria errors surface here, before anything is registered.
pub fn make_check<A: 'static, F>(criteria: &str, version_getter: F) -> Result<Check<A>, CheckError>
where
    F: Fn(BindingKind, &A) -> Option<String> + Send + Sync + 'static,
{
    Check::new(criteria, version_getter)
}

/// Same as [`make_check`] with an explicit configuration
pub fn make_check_with_config<A: 'static, F>(
    criteria: &str,
    version_getter: F,
    config: CheckConfig,
) -> Result<Check<A>, CheckError>
where
    F: Fn(BindingKind, &A) -> Option<String> + Send + Sync + 'static,
{
    Ok(Check::new(criteria, version_getter)?.with_config(config))
}

impl<A: 'static> Check<A> {
    pub fn new(
        criteria: &str,
        version_getter: impl VersionGetter<A> + 'static,
    ) -> Result<Self, CheckError> {
        let criteria = Criteria::parse(criteria)?;
        debug!("Parsed version criteria {}", criteria);

        Ok(Self {
            criteria,
            getter: Arc::new(version_getter),
            config: CheckConfig::default(),
        })
    }

    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Ask the getter for the version of this call
    pub fn resolve_version(&self, kind: BindingKind, args: &A) -> Option<String> {
        self.getter.version(kind, args)
    }

    /// Whether `version` satisfies the criteria under the configured policy
    pub fn supports(&self, version: Option<&str>) -> Result<bool, CheckError> {
        let version = version.map(VersionValue::parse).transpose()?;
        Ok(self.accepts(version.as_ref()))
    }

    /// Like [`Check::supports`] for a version that is already parsed
    pub fn accepts(&self, version: Option<&VersionValue>) -> bool {
        match (version, self.config.missing_version) {
            (None, MissingVersionPolicy::Reject) => false,
            (None, MissingVersionPolicy::Allow) => true,
            (Some(version), _) => self.criteria.matches(version),
        }
    }

    /// Resolve the version for a call and fail unless it is supported
    pub fn verify(&self, kind: BindingKind, target: &str, args: &A) -> Result<(), CheckError> {
        let version = self.resolve_version(kind, args);

        if self.supports(version.as_deref())? {
            return Ok(());
        }

        warn!(
            "Rejected {} {} for version {:?} (criteria {})",
            kind, target, version, self.criteria
        );
        Err(CheckError::VersionNotSupport {
            version,
            target: target.to_string(),
        })
    }
}

impl<A: 'static> Clone for Check<A> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            getter: Arc::clone(&self.getter),
            config: self.config.clone(),
        }
    }
}

impl<A: 'static> fmt::Debug for Check<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("criteria", &self.criteria)
            .field("config", &self.config)
            .finish()
    }
}
