use std::sync::Once;

use tracing_subscriber::EnvFilter;
use version_check::BindingKind;

static TRACING: Once = Once::new();

/// Route library logs to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Call arguments with an optional `version` keyword, like `f(value, version=...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgs {
    pub value: String,
    pub version: Option<String>,
}

impl CallArgs {
    pub fn new(value: &str, version: &str) -> Self {
        Self {
            value: value.to_string(),
            version: Some(version.to_string()),
        }
    }

    pub fn unversioned(value: &str) -> Self {
        Self {
            value: value.to_string(),
            version: None,
        }
    }
}

/// Getter reading the `version` keyword of the call
pub fn version_keyword(_kind: BindingKind, args: &CallArgs) -> Option<String> {
    args.version.clone()
}
