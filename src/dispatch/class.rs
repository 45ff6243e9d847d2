//! Version gate for a whole type
//!
//! Construction, static methods and class methods of the gated type all
//! check the same criteria before their body runs. Instance methods are not
//! gated: an instance only exists if its construction passed the check.

use crate::dispatch::BindingKind;
use crate::dispatch::check::Check;
use crate::version::error::CheckError;

#[derive(Debug, Clone)]
pub struct ClassGate<A: 'static> {
    class: String,
    check: Check<A>,
}

impl<A: 'static> ClassGate<A> {
    pub fn new(class: impl Into<String>, check: Check<A>) -> Self {
        Self {
            class: class.into(),
            check,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn check(&self) -> &Check<A> {
        &self.check
    }

    /// Build an instance if the version is supported.
    ///
    /// `constructor` is not called when the check fails, so no instance is
    /// created.
    pub fn construct<T, F>(&self, args: &A, constructor: F) -> Result<T, CheckError>
    where
        F: FnOnce(&A) -> T,
    {
        self.check
            .verify(BindingKind::Constructor, &self.class, args)?;
        Ok(constructor(args))
    }

    /// Run a static method of the gated type
    pub fn call_static<R, F>(&self, method: &str, args: &A, body: F) -> Result<R, CheckError>
    where
        F: FnOnce(&A) -> R,
    {
        self.gated(BindingKind::StaticMethod, method, args, body)
    }

    /// Run a class method of the gated type
    pub fn call_class<R, F>(&self, method: &str, args: &A, body: F) -> Result<R, CheckError>
    where
        F: FnOnce(&A) -> R,
    {
        self.gated(BindingKind::ClassMethod, method, args, body)
    }

    fn gated<R, F>(&self, kind: BindingKind, method: &str, args: &A, body: F) -> Result<R, CheckError>
    where
        F: FnOnce(&A) -> R,
    {
        let target = format!("{}::{}", self.class, method);
        self.check.verify(kind, &target, args)?;
        Ok(body(args))
    }
}
