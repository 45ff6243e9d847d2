mod helper;

use std::sync::{Arc, LazyLock};
use std::thread;

use helper::{CallArgs, init_tracing, version_keyword};
use version_check::{
    BindingKind, CheckConfig, CheckError, ClassGate, OverloadSet, Registry, make_check,
    make_check_with_config,
};

/// A type whose construction, static and class methods require version > 2
#[derive(Debug)]
struct GatedResource {
    attr: String,
}

static RESOURCE_GATE: LazyLock<ClassGate<CallArgs>> =
    LazyLock::new(|| ClassGate::new("GatedResource", make_check(">2", version_keyword).unwrap()));

impl GatedResource {
    fn new(args: &CallArgs) -> Result<Self, CheckError> {
        RESOURCE_GATE.construct(args, |args| Self {
            attr: args.value.clone(),
        })
    }

    fn static_method(args: &CallArgs) -> Result<String, CheckError> {
        RESOURCE_GATE.call_static("static_method", args, |args| args.value.clone())
    }

    fn cls_method(args: &CallArgs) -> Result<String, CheckError> {
        RESOURCE_GATE.call_class("cls_method", args, |args| format!("cls:{}", args.value))
    }

    fn method(&self) -> &str {
        &self.attr
    }
}

/// A client whose method overloads are selected by its own API version
#[derive(Debug, Clone)]
struct Client {
    api_version: String,
}

fn api_version(_kind: BindingKind, client: &Client) -> Option<String> {
    Some(client.api_version.clone())
}

static CLIENT_METHODS: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::new();
    registry
        .register(
            "Client::describe",
            &make_check(">2.0", api_version).unwrap(),
            BindingKind::InstanceMethod,
            |_: &Client| "version > 2.0".to_string(),
        )
        .unwrap()
        .register(
            "Client::describe",
            &make_check("<=2.0", api_version).unwrap(),
            BindingKind::InstanceMethod,
            |_: &Client| "version <= 2.0".to_string(),
        )
        .unwrap()
        .register(
            "Client::legacy",
            &make_check("1.0<>1.9", api_version).unwrap(),
            BindingKind::InstanceMethod,
            |client: &Client| format!("legacy@{}", client.api_version),
        )
        .unwrap();
    registry
});

impl Client {
    fn new(api_version: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
        }
    }

    fn describe(&self) -> Result<String, CheckError> {
        CLIENT_METHODS.call("Client::describe", self)
    }

    fn legacy(&self) -> Result<String, CheckError> {
        CLIENT_METHODS.call("Client::legacy", self)
    }
}

#[test]
fn gated_constructor_rejects_old_version() {
    init_tracing();

    let err = GatedResource::new(&CallArgs::new("b", "1.1")).unwrap_err();
    assert_eq!(
        err,
        CheckError::VersionNotSupport {
            version: Some("1.1".to_string()),
            target: "GatedResource".to_string(),
        }
    );
}

#[test]
fn gated_constructor_accepts_new_version() {
    init_tracing();

    let resource = GatedResource::new(&CallArgs::new("b", "3.1")).unwrap();
    assert_eq!(resource.method(), "b");
}

#[test]
fn gated_constructor_accepts_missing_version() {
    init_tracing();

    let resource = GatedResource::new(&CallArgs::unversioned("b")).unwrap();
    assert_eq!(resource.method(), "b");
}

#[test]
fn gated_static_and_class_methods_follow_version() {
    init_tracing();

    assert_eq!(
        GatedResource::static_method(&CallArgs::new("b", "4")),
        Ok("b".to_string())
    );
    assert_eq!(
        GatedResource::cls_method(&CallArgs::new("a", "4")),
        Ok("cls:a".to_string())
    );
    assert!(matches!(
        GatedResource::static_method(&CallArgs::new("a", "1")),
        Err(CheckError::VersionNotSupport { .. })
    ));
    assert!(matches!(
        GatedResource::cls_method(&CallArgs::new("a", "2")),
        Err(CheckError::VersionNotSupport { .. })
    ));
}

#[test]
fn instance_overloads_follow_receiver_version() {
    init_tracing();

    assert_eq!(Client::new("4.0").describe(), Ok("version > 2.0".to_string()));
    assert_eq!(Client::new("2.0").describe(), Ok("version <= 2.0".to_string()));
    assert_eq!(Client::new("1.5").legacy(), Ok("legacy@1.5".to_string()));
    assert_eq!(
        Client::new("2.0").legacy(),
        Err(CheckError::VersionNotSupport {
            version: Some("2.0".to_string()),
            target: "Client::legacy".to_string(),
        })
    );
}

#[test]
fn overloads_with_gap_reject_version_in_gap() {
    init_tracing();

    let mut versioned_method = OverloadSet::new("versioned_method");
    versioned_method
        .register(
            &make_check(">2", version_keyword).unwrap(),
            BindingKind::InstanceMethod,
            |_| ">2",
        )
        .register(
            &make_check("<2", version_keyword).unwrap(),
            BindingKind::InstanceMethod,
            |_| "<2",
        );

    assert_eq!(versioned_method.call(&CallArgs::new("", "3")), Ok(">2"));
    assert_eq!(versioned_method.call(&CallArgs::new("", "1")), Ok("<2"));
    assert_eq!(
        versioned_method.call(&CallArgs::new("", "2")),
        Err(CheckError::VersionNotSupport {
            version: Some("2".to_string()),
            target: "versioned_method".to_string(),
        })
    );
}

#[test]
fn strict_config_rejects_unversioned_calls() {
    init_tracing();

    let gate = ClassGate::new(
        "Strict",
        make_check_with_config(">2", version_keyword, CheckConfig::strict()).unwrap(),
    );

    assert_eq!(
        gate.construct(&CallArgs::unversioned("x"), |args| args.value.clone()),
        Err(CheckError::VersionNotSupport {
            version: None,
            target: "Strict".to_string(),
        })
    );
    assert_eq!(
        gate.construct(&CallArgs::new("x", "3"), |args| args.value.clone()),
        Ok("x".to_string())
    );
}

#[test]
fn invalid_criteria_is_reported_at_registration() {
    let err = make_check("2.0", version_keyword).unwrap_err();
    assert!(matches!(err, CheckError::InvalidCriteria { .. }));
}

#[test]
fn populated_table_dispatches_from_many_threads() {
    init_tracing();

    let mut set = OverloadSet::new("fetch");
    set.register(
        &make_check(">=3.0", version_keyword).unwrap(),
        BindingKind::Function,
        |args: &CallArgs| format!("v3:{}", args.value),
    )
    .register(
        &make_check("1.0<>2.9", version_keyword).unwrap(),
        BindingKind::Function,
        |args: &CallArgs| format!("v1:{}", args.value),
    );
    let set = Arc::new(set);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let set = Arc::clone(&set);
                scope.spawn(move || {
                    let version = if i % 2 == 0 { "3.5" } else { "1.5" };
                    set.call(&CallArgs::new(&i.to_string(), version))
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 {
                format!("v3:{}", i)
            } else {
                format!("v1:{}", i)
            };
            assert_eq!(handle.join().unwrap(), Ok(expected));
        }
    });
}
