//! Version-gated dispatch
//!
//! A [`Check`] pairs parsed criteria with a version getter. Applying it to a
//! closure registers an overload entry; invoking the target resolves the
//! version and runs the first entry whose criteria is satisfied.
//!
//! ```text
//! ┌─────────────┐  register  ┌─────────────┐   call   ┌─────────────┐
//! │    Check    │──────────▶│ OverloadSet │◀────────│   Caller    │
//! │ (criteria + │            │ (ordered    │          │             │
//! │   getter)   │            │  entries)   │          └─────────────┘
//! └─────────────┘            └─────────────┘
//!        │                          ▲
//!        ▼                          │ by name
//! ┌─────────────┐            ┌─────────────┐
//! │  ClassGate  │            │  Registry   │
//! └─────────────┘            └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`getter`]: Version getter callback trait
//! - [`check`]: The decorator: criteria plus getter
//! - [`overload`]: Ordered overload table for one target
//! - [`registry`]: Overload tables keyed by target name
//! - [`class`]: Gate for constructors, static and class methods

pub mod check;
pub mod class;
pub mod getter;
pub mod overload;
pub mod registry;

use std::fmt;

/// How a gated callable is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Free function
    Function,
    /// Associated function without a receiver
    StaticMethod,
    /// Associated function invoked through the class
    ClassMethod,
    /// Method taking an instance receiver
    InstanceMethod,
    /// Constructor of a gated type
    Constructor,
}

impl BindingKind {
    /// Returns the string representation of the binding kind
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Function => "function",
            BindingKind::StaticMethod => "static_method",
            BindingKind::ClassMethod => "class_method",
            BindingKind::InstanceMethod => "instance_method",
            BindingKind::Constructor => "constructor",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
