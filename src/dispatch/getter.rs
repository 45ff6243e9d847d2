//! Version getter callback

#[cfg(test)]
use mockall::mock;

use crate::dispatch::BindingKind;

/// Resolves the version a call should be checked against
///
/// Receives the binding kind of the gated callable and the call's
/// arguments. Returning `None` means no version is known; how that is
/// treated depends on [`crate::config::MissingVersionPolicy`].
pub trait VersionGetter<A: 'static>: Send + Sync {
    fn version(&self, kind: BindingKind, args: &A) -> Option<String>;
}

#[cfg(test)]
mock! {
    pub VersionGetter<A: 'static + Send + Sync> {}

    impl<A: 'static + Send + Sync> VersionGetter<A> for VersionGetter<A> {
        fn version(&self, kind: BindingKind, args: &A) -> Option<String>;
    }
}

impl<A, F> VersionGetter<A> for F
where
    A: 'static,
    F: Fn(BindingKind, &A) -> Option<String> + Send + Sync,
{
    fn version(&self, kind: BindingKind, args: &A) -> Option<String> {
        self(kind, args)
    }
}

/// Getter that ignores the call and always reports the same version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVersion(pub Option<String>);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }
}

impl<A: 'static> VersionGetter<A> for FixedVersion {
    fn version(&self, _kind: BindingKind, _args: &A) -> Option<String> {
        self.0.clone()
    }
}
