use std::any::TypeId;
use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use jobspec_core::models::{CoreErrorKind, CoreResult};
use jobspec_core::registry::{self, ConfigurationRegistry};
use jobspec_core::task::{ExecutableTask, SerializationSettings, TaskConfiguration, TaskFunction};
use serde_json::{Value, json};

#[derive(Clone, Debug, Default)]
struct QueueConfig {
    queue: String,
}

impl TaskConfiguration for QueueConfig {}

/// Wraps `QueueConfig` but is its own configuration type.
#[derive(Clone, Debug, Default)]
struct PriorityQueueConfig(QueueConfig);

impl TaskConfiguration for PriorityQueueConfig {}

struct QueueTask {
    task_type: &'static str,
    config: QueueConfig,
    function: TaskFunction,
}

impl ExecutableTask for QueueTask {
    fn name(&self) -> &str {
        self.function.name()
    }

    fn task_type(&self) -> &str {
        self.task_type
    }

    fn backend_settings(&self, _settings: &SerializationSettings) -> BTreeMap<String, String> {
        let mut settings = BTreeMap::new();
        settings.insert("queue".to_string(), self.config.queue.clone());
        settings
    }

    fn execute(&self, inputs: Value) -> CoreResult<Value> {
        self.function.call(inputs)
    }
}

fn queue_factory(
    task_type: &'static str,
) -> impl Fn(QueueConfig, TaskFunction) -> CoreResult<QueueTask> + Send + Sync + 'static {
    move |config, function| {
        Ok(QueueTask {
            task_type,
            config,
            function,
        })
    }
}

fn echo() -> TaskFunction {
    TaskFunction::new("echo", Ok)
}

#[test]
fn second_registration_conflicts_and_keeps_first_binding() {
    let registry = ConfigurationRegistry::new();
    registry.register(queue_factory("first")).unwrap();

    let error = registry.register(queue_factory("second")).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::RegistrationConflict);
    assert!(error.configuration.unwrap().ends_with("QueueConfig"));

    let factory = registry.resolve(&QueueConfig::default()).unwrap();
    let task = factory.build(QueueConfig::default(), echo()).unwrap();
    assert_eq!(task.task_type(), "first");
}

#[test]
fn resolve_does_not_fall_back_to_wrapped_configuration() {
    let registry = ConfigurationRegistry::new();
    registry.register(queue_factory("queue")).unwrap();

    let error = registry
        .resolve(&PriorityQueueConfig(QueueConfig::default()))
        .unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::UnresolvedConfiguration);
    assert!(error.message.contains("PriorityQueueConfig"));
    assert!(error.configuration.unwrap().ends_with("PriorityQueueConfig"));
}

/// Derefs to `QueueConfig` and reports its type id, but is still its own type.
#[derive(Clone, Debug, Default)]
struct DisguisedQueueConfig(QueueConfig);

impl DisguisedQueueConfig {
    fn configuration_type_id(&self) -> TypeId {
        TypeId::of::<QueueConfig>()
    }
}

impl Deref for DisguisedQueueConfig {
    type Target = QueueConfig;

    fn deref(&self) -> &QueueConfig {
        &self.0
    }
}

impl TaskConfiguration for DisguisedQueueConfig {}

#[test]
fn wrapper_reporting_inner_type_id_is_still_unresolved() {
    let registry = ConfigurationRegistry::new();
    registry.register(queue_factory("queue")).unwrap();

    let disguised = DisguisedQueueConfig::default();
    assert_eq!(disguised.configuration_type_id(), TypeId::of::<QueueConfig>());

    let error = registry.resolve(&disguised).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::UnresolvedConfiguration);
    assert!(error.configuration.unwrap().ends_with("DisguisedQueueConfig"));

    let boxed: Box<dyn TaskConfiguration> = Box::new(disguised.clone());
    let error = registry.resolve(&*boxed).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::UnresolvedConfiguration);

    let error = registry.construct_task(disguised, echo()).err().unwrap();
    assert_eq!(error.kind, CoreErrorKind::UnresolvedConfiguration);
}

#[test]
fn empty_registry_names_the_unresolved_type() {
    let registry = ConfigurationRegistry::new();

    let error = registry
        .construct_task(QueueConfig::default(), echo())
        .err()
        .unwrap();
    assert_eq!(error.kind, CoreErrorKind::UnresolvedConfiguration);
    assert!(error.message.contains("QueueConfig"));
}

#[test]
fn constructed_task_exposes_backend_settings_from_configuration() {
    let registry = ConfigurationRegistry::new();
    registry.register(queue_factory("queue")).unwrap();

    let config = QueueConfig {
        queue: "high-memory".to_string(),
    };
    let task = registry.construct_task(config, echo()).unwrap();
    let settings = SerializationSettings::new("project", "domain", "version");

    let first = task.backend_settings(&settings);
    let second = task.backend_settings(&settings);
    assert_eq!(first, second);
    assert_eq!(first.get("queue").map(String::as_str), Some("high-memory"));
    assert_eq!(task.execute(json!({"x": 1})).unwrap(), json!({"x": 1}));
}

#[test]
fn factory_errors_propagate_from_construction() {
    let registry = ConfigurationRegistry::new();
    registry
        .register(|config: QueueConfig, function: TaskFunction| {
            if config.queue.is_empty() {
                return Err(jobspec_core::models::CoreError::construction(
                    "QueueConfig",
                    "queue",
                    "queue must be named".to_string(),
                ));
            }
            Ok(QueueTask {
                task_type: "queue",
                config,
                function,
            })
        })
        .unwrap();

    let error = registry
        .construct_task(QueueConfig::default(), echo())
        .err()
        .unwrap();
    assert_eq!(error.kind, CoreErrorKind::Construction);
}

#[test]
fn concurrent_resolves_all_see_the_binding() {
    let registry = ConfigurationRegistry::new();
    registry.register(queue_factory("queue")).unwrap();
    let resolved = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let factory = registry.resolve(&QueueConfig::default()).unwrap();
                    assert!(factory.configuration_type().ends_with("QueueConfig"));
                    resolved.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(resolved.load(Ordering::SeqCst), 800);
}

#[test]
fn concurrent_duplicate_registrations_admit_exactly_one() {
    let registry = ConfigurationRegistry::new();
    let accepted = AtomicUsize::new(0);
    let rejected = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| match registry.register(queue_factory("queue")) {
                Ok(()) => {
                    accepted.fetch_add(1, Ordering::SeqCst);
                }
                Err(error) => {
                    assert_eq!(error.kind, CoreErrorKind::RegistrationConflict);
                    rejected.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(accepted.load(Ordering::SeqCst), 1);
    assert_eq!(rejected.load(Ordering::SeqCst), 7);
}

#[derive(Debug)]
struct GlobalOnlyConfig;

impl TaskConfiguration for GlobalOnlyConfig {}

#[test]
fn global_registry_is_shared_across_calls() {
    registry::global()
        .register(|_: GlobalOnlyConfig, function: TaskFunction| {
            Ok(QueueTask {
                task_type: "global",
                config: QueueConfig::default(),
                function,
            })
        })
        .unwrap();

    assert!(registry::global().is_registered::<GlobalOnlyConfig>().unwrap());
    let task = registry::global()
        .construct_task(GlobalOnlyConfig, echo())
        .unwrap();
    assert_eq!(task.task_type(), "global");
}
