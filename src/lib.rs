//! Version-gated execution and overload dispatch
//!
//! Gate a callable on a runtime version, or register several
//! implementations under one name and let the version pick between them.
//!
//! ```
//! use version_check::{BindingKind, OverloadSet, make_check};
//!
//! let getter = |_: BindingKind, version: &String| Some(version.clone());
//!
//! let mut method = OverloadSet::new("Resource::method");
//! method
//!     .register(&make_check(">2.0", getter)?, BindingKind::InstanceMethod, |_| "version > 2.0")
//!     .register(&make_check("<=2.0", getter)?, BindingKind::InstanceMethod, |_| "version <= 2.0");
//!
//! assert_eq!(method.call(&"4.0".to_string())?, "version > 2.0");
//! assert_eq!(method.call(&"2.0".to_string())?, "version <= 2.0");
//! # Ok::<(), version_check::CheckError>(())
//! ```

pub mod config;
pub mod dispatch;
pub mod version;

pub use config::{CheckConfig, MissingVersionPolicy};
pub use dispatch::BindingKind;
pub use dispatch::check::{Check, make_check, make_check_with_config};
pub use dispatch::class::ClassGate;
pub use dispatch::getter::{FixedVersion, VersionGetter};
pub use dispatch::overload::{OverloadEntry, OverloadSet};
pub use dispatch::registry::Registry;
pub use version::criteria::{Comparator, Criteria, evaluate};
pub use version::error::CheckError;
pub use version::value::{Component, Digits, VersionValue};
