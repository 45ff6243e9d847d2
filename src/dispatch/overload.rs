//! Ordered overload table for a single target
//!
//! Entries are kept in registration order. Dispatch walks them in that order
//! and runs the first one whose criteria accepts the resolved version; there
//! is no "most specific wins" reordering.

use std::fmt;

use tracing::{debug, warn};

use crate::dispatch::BindingKind;
use crate::dispatch::check::Check;
use crate::version::criteria::Criteria;
use crate::version::error::CheckError;
use crate::version::value::VersionValue;

type Implementation<A, R> = Box<dyn Fn(&A) -> R + Send + Sync>;

/// One (criteria, implementation, binding kind) registration
pub struct OverloadEntry<A: 'static, R> {
    check: Check<A>,
    kind: BindingKind,
    implementation: Implementation<A, R>,
}

impl<A: 'static, R> OverloadEntry<A, R> {
    pub fn criteria(&self) -> &Criteria {
        self.check.criteria()
    }

    pub fn kind(&self) -> BindingKind {
        self.kind
    }

    pub fn invoke(&self, args: &A) -> R {
        (self.implementation)(args)
    }
}

impl<A: 'static, R> fmt::Debug for OverloadEntry<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadEntry")
            .field("criteria", self.criteria())
            .field("kind", &self.kind)
            .finish()
    }
}

/// All overloads registered under one target name
pub struct OverloadSet<A: 'static, R> {
    target: String,
    entries: Vec<OverloadEntry<A, R>>,
}

impl<A: 'static, R> OverloadSet<A, R> {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            entries: Vec::new(),
        }
    }

    /// Append an implementation gated by `check`
    pub fn register<F>(&mut self, check: &Check<A>, kind: BindingKind, implementation: F) -> &mut Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        debug!(
            "Registering {} {} for {} (overload #{})",
            kind,
            self.target,
            check.criteria(),
            self.entries.len() + 1
        );
        self.entries.push(OverloadEntry {
            check: check.clone(),
            kind,
            implementation: Box::new(implementation),
        });
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &OverloadEntry<A, R>> {
        self.entries.iter()
    }

    /// Criteria of every entry, in registration order
    pub fn criteria(&self) -> impl Iterator<Item = &Criteria> {
        self.entries.iter().map(|entry| entry.criteria())
    }

    /// Resolve the version for this call and pick the first matching entry
    ///
    /// The version comes from the most recently registered entry's getter,
    /// since that registration is what the target name currently refers to.
    pub fn select(&self, args: &A) -> Result<&OverloadEntry<A, R>, CheckError> {
        let Some(current) = self.entries.last() else {
            return Err(CheckError::UnknownTarget(self.target.clone()));
        };
        let version = current.check.resolve_version(current.kind, args);
        let parsed = version.as_deref().map(VersionValue::parse).transpose()?;

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.check.accepts(parsed.as_ref()) {
                debug!(
                    "Dispatching {} to overload #{} ({}) for version {:?}",
                    self.target,
                    index + 1,
                    entry.criteria(),
                    version
                );
                return Ok(entry);
            }
        }

        warn!(
            "No overload of {} supports version {:?}",
            self.target, version
        );
        Err(CheckError::VersionNotSupport {
            version,
            target: self.target.clone(),
        })
    }

    /// Run the selected overload with the original arguments
    pub fn call(&self, args: &A) -> Result<R, CheckError> {
        let entry = self.select(args)?;
        Ok(entry.invoke(args))
    }
}

impl<A: 'static, R> fmt::Debug for OverloadSet<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadSet")
            .field("target", &self.target)
            .field("entries", &self.entries)
            .finish()
    }
}
