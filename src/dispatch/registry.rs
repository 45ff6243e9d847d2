//! Overload tables keyed by target name
//!
//! Each name owns one [`OverloadSet`]. The argument and return types are
//! fixed by the first registration; later registrations or calls with other
//! types fail with `SignatureMismatch`.

use std::any::Any;

use indexmap::IndexMap;
use tracing::debug;

use crate::dispatch::BindingKind;
use crate::dispatch::check::Check;
use crate::dispatch::overload::OverloadSet;
use crate::version::error::CheckError;

/// Name-keyed collection of overload tables, in first-registration order
#[derive(Default)]
pub struct Registry {
    targets: IndexMap<String, Box<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an implementation for `target` gated by `check`
    pub fn register<A, R, F>(
        &mut self,
        target: &str,
        check: &Check<A>,
        kind: BindingKind,
        implementation: F,
    ) -> Result<&mut Self, CheckError>
    where
        A: 'static,
        R: 'static,
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        let slot = self.targets.entry(target.to_string()).or_insert_with(|| {
            debug!("Creating overload table for {}", target);
            Box::new(OverloadSet::<A, R>::new(target))
        });

        let Some(set) = slot.downcast_mut::<OverloadSet<A, R>>() else {
            return Err(CheckError::SignatureMismatch {
                target: target.to_string(),
            });
        };
        set.register(check, kind, implementation);

        Ok(self)
    }

    /// Typed view of the overloads registered for `target`
    pub fn overloads<A, R>(&self, target: &str) -> Result<&OverloadSet<A, R>, CheckError>
    where
        A: 'static,
        R: 'static,
    {
        let slot = self
            .targets
            .get(target)
            .ok_or_else(|| CheckError::UnknownTarget(target.to_string()))?;

        slot.downcast_ref::<OverloadSet<A, R>>()
            .ok_or_else(|| CheckError::SignatureMismatch {
                target: target.to_string(),
            })
    }

    /// Dispatch a call to `target`
    pub fn call<A, R>(&self, target: &str, args: &A) -> Result<R, CheckError>
    where
        A: 'static,
        R: 'static,
    {
        self.overloads::<A, R>(target)?.call(args)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    /// Registered target names, in first-registration order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}
