use std::collections::BTreeMap;

use jobspec_core::mapping::WireMapped;
use jobspec_core::models::{
    AlgorithmName, AlgorithmSpecification, ClusterJobSpec, CoreErrorKind, InputMode,
    MetricDefinition, ResourceConfig, SchedulerSpec, TrainingJobSpec, WorkerGroupSpec,
};
use jobspec_core::registry::ConfigurationRegistry;
use jobspec_core::task::{SerializationSettings, TaskFunction};
use jobspec_plugins::{
    BATCH_TASK_TYPE, BUILTIN_TRAINING_TASK_TYPE, BatchConfig, BuiltinTrainingConfig,
    CLUSTER_TASK_TYPE, CUSTOM_TRAINING_TASK_TYPE, ClusterConfig, CustomTrainingConfig,
    register_builtin_plugins,
};
use serde_json::json;

fn registry() -> ConfigurationRegistry {
    let registry = ConfigurationRegistry::new();
    register_builtin_plugins(&registry).unwrap();
    registry
}

fn settings() -> SerializationSettings {
    SerializationSettings::from_json_str(
        r#"{
            "project": "project",
            "domain": "domain",
            "version": "version",
            "env": {"FOO": "baz"},
            "image": "test:tag"
        }"#,
    )
    .unwrap()
}

fn mapper() -> TaskFunction {
    TaskFunction::new("mapper", |inputs| {
        let a = inputs["a"].as_i64().ok_or("input 'a' must be an integer")?;
        Ok(json!((a + 2).to_string()))
    })
}

#[test]
fn builtin_plugins_bind_every_configuration_type() {
    let registry = registry();

    assert!(registry.is_registered::<BatchConfig>().unwrap());
    assert!(registry.is_registered::<ClusterConfig>().unwrap());
    assert!(registry.is_registered::<BuiltinTrainingConfig>().unwrap());
    assert!(registry.is_registered::<CustomTrainingConfig>().unwrap());
    assert_eq!(registry.bindings().unwrap().len(), 4);
}

#[test]
fn registering_builtin_plugins_twice_is_a_packaging_conflict() {
    let registry = registry();

    let error = register_builtin_plugins(&registry).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::RegistrationConflict);
    assert!(error.configuration.unwrap().ends_with("BatchConfig"));
}

#[test]
fn batch_task_with_empty_job_definition_has_empty_backend_settings() {
    let registry = registry();

    let task = registry
        .construct_task(BatchConfig::default(), mapper())
        .unwrap();

    assert_eq!(task.task_type(), BATCH_TASK_TYPE);
    assert_eq!(task.backend_settings(&settings()), BTreeMap::new());
    assert_eq!(task.execute(json!({"a": 1})).unwrap(), json!("3"));
}

#[test]
fn batch_template_carries_job_definition_and_settings() {
    let registry = registry();
    let config: BatchConfig = serde_json::from_value(json!({
        "job_definition": {"jobQueue": "default", "schedulingPriority": "10"}
    }))
    .unwrap();

    let task = registry.construct_task(config, mapper()).unwrap();
    let template = task.to_template(&settings());

    assert_eq!(template.name, "mapper");
    assert_eq!(template.task_type, BATCH_TASK_TYPE);
    assert_eq!(template.config.get("jobQueue").map(String::as_str), Some("default"));
    assert_eq!(template.config.len(), 2);
    assert_eq!(template.custom, None);
    assert_eq!(template.image.as_deref(), Some("test:tag"));
    assert_eq!(template.env.get("FOO").map(String::as_str), Some("baz"));
}

#[test]
fn cluster_template_custom_payload_decodes_to_job_spec() {
    let registry = registry();
    let config = ClusterConfig::new(
        SchedulerSpec::new(Some("scheduler:2024.1".to_string()), None),
        WorkerGroupSpec::new(Some(0), None, None),
    );

    let task = registry.construct_task(config.clone(), mapper()).unwrap();
    let template = task.to_template(&settings());

    assert_eq!(template.task_type, CLUSTER_TASK_TYPE);
    assert!(template.config.is_empty());
    let payload = template.custom.unwrap();
    let decoded = ClusterJobSpec::decode_wire(&payload).unwrap();
    assert_eq!(decoded, config.job_spec());
    assert_eq!(decoded.workers().worker_count(), Some(0));
    assert_eq!(decoded.workers().image(), None);
}

#[test]
fn training_configurations_resolve_to_their_own_task_types() {
    let registry = registry();
    let resources = ResourceConfig::new(2, "ml.m4.xlarge", 50).unwrap();
    let metrics = vec![
        MetricDefinition::new("train:loss", "loss=(.*)").unwrap(),
        MetricDefinition::new("validation:error", "error=(.*)").unwrap(),
    ];

    let xgboost =
        AlgorithmSpecification::new(InputMode::File, AlgorithmName::Xgboost, "0.90", metrics.clone());
    let builtin = BuiltinTrainingConfig::new(xgboost, resources.clone()).unwrap();
    let custom = CustomTrainingConfig::new(
        AlgorithmSpecification::new(InputMode::Pipe, AlgorithmName::Custom, "", metrics),
        resources,
    )
    .unwrap();

    let builtin_task = registry.construct_task(builtin.clone(), mapper()).unwrap();
    let custom_task = registry.construct_task(custom.clone(), mapper()).unwrap();
    assert_eq!(builtin_task.task_type(), BUILTIN_TRAINING_TASK_TYPE);
    assert_eq!(custom_task.task_type(), CUSTOM_TRAINING_TASK_TYPE);

    let payload = builtin_task.custom(&settings()).unwrap();
    assert_eq!(TrainingJobSpec::decode_wire(&payload), Ok(builtin.job_spec()));
    assert_eq!(
        builtin_task.execute(json!({"a": 1})).unwrap_err().kind,
        CoreErrorKind::Execution
    );
    assert_eq!(custom_task.execute(json!({"a": 1})).unwrap(), json!("3"));
}

#[test]
fn training_config_from_json_is_validated() {
    let raw = json!({
        "algorithm_specification": {
            "input_mode": "file",
            "algorithm_name": "custom",
            "algorithm_version": "",
            "metric_definitions": [{"name": "loss", "regex": "loss=(.*)"}]
        },
        "resource_config": {
            "instance_count": 1,
            "instance_type": "ml.m4.xlarge",
            "volume_size_gb": 25
        }
    });

    let custom: CustomTrainingConfig = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(
        custom.job_spec().algorithm_specification().algorithm_name(),
        AlgorithmName::Custom
    );

    let builtin: Result<BuiltinTrainingConfig, _> = serde_json::from_value(raw);
    assert!(builtin.is_err());
}

#[test]
fn backend_settings_are_stable_across_calls() {
    let registry = registry();
    let mut definition = BTreeMap::new();
    definition.insert("jobQueue".to_string(), "gpu".to_string());

    let task = registry
        .construct_task(BatchConfig::new(definition), mapper())
        .unwrap();
    let settings = settings();

    assert_eq!(task.backend_settings(&settings), task.backend_settings(&settings));
    assert_eq!(task.to_template(&settings), task.to_template(&settings));
}
