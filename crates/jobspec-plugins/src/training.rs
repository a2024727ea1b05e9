use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jobspec_core::mapping::WireMapped;
use jobspec_core::models::{
    AlgorithmSpecification, CoreError, CoreErrorKind, CoreResult, ResourceConfig,
    TrainingJobSpec,
};
use jobspec_core::registry::ConfigurationRegistry;
use jobspec_core::task::{
    ExecutableTask, FunctionTask, SerializationSettings, TaskConfiguration, TaskFunction,
};

pub const BUILTIN_TRAINING_TASK_TYPE: &str = "sagemaker_training_job_task";
pub const CUSTOM_TRAINING_TASK_TYPE: &str = "sagemaker_custom_training_job_task";

/// Training job that runs one of the engine's built-in algorithms.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrainingConfigFields")]
pub struct BuiltinTrainingConfig {
    algorithm_specification: AlgorithmSpecification,
    resource_config: ResourceConfig,
}

/// Training job whose algorithm is the task function itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrainingConfigFields")]
pub struct CustomTrainingConfig {
    algorithm_specification: AlgorithmSpecification,
    resource_config: ResourceConfig,
}

#[derive(Deserialize)]
struct TrainingConfigFields {
    algorithm_specification: AlgorithmSpecification,
    resource_config: ResourceConfig,
}

impl TryFrom<TrainingConfigFields> for BuiltinTrainingConfig {
    type Error = CoreError;

    fn try_from(fields: TrainingConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.algorithm_specification, fields.resource_config)
    }
}

impl TryFrom<TrainingConfigFields> for CustomTrainingConfig {
    type Error = CoreError;

    fn try_from(fields: TrainingConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.algorithm_specification, fields.resource_config)
    }
}

impl BuiltinTrainingConfig {
    pub fn new(
        algorithm_specification: AlgorithmSpecification,
        resource_config: ResourceConfig,
    ) -> CoreResult<Self> {
        if !algorithm_specification.algorithm_name().is_builtin() {
            return Err(algorithm_mismatch(
                "BuiltinTrainingConfig",
                "built-in training requires a built-in algorithm",
            ));
        }

        Ok(Self {
            algorithm_specification,
            resource_config,
        })
    }

    pub fn job_spec(&self) -> TrainingJobSpec {
        TrainingJobSpec::new(
            self.algorithm_specification.clone(),
            self.resource_config.clone(),
        )
    }
}

impl CustomTrainingConfig {
    pub fn new(
        algorithm_specification: AlgorithmSpecification,
        resource_config: ResourceConfig,
    ) -> CoreResult<Self> {
        if algorithm_specification.algorithm_name().is_builtin() {
            return Err(algorithm_mismatch(
                "CustomTrainingConfig",
                "custom training requires the custom algorithm",
            ));
        }

        Ok(Self {
            algorithm_specification,
            resource_config,
        })
    }

    pub fn job_spec(&self) -> TrainingJobSpec {
        TrainingJobSpec::new(
            self.algorithm_specification.clone(),
            self.resource_config.clone(),
        )
    }
}

impl TaskConfiguration for BuiltinTrainingConfig {}

impl TaskConfiguration for CustomTrainingConfig {}

fn algorithm_mismatch(entity: &'static str, message: &str) -> CoreError {
    CoreError::construction(entity, "algorithm_name", message.to_string())
}

pub struct TrainingJobTask {
    task: FunctionTask<TrainingJobSpec>,
}

impl TrainingJobTask {
    pub fn from_builtin(config: BuiltinTrainingConfig, function: TaskFunction) -> Self {
        Self {
            task: FunctionTask::new(BUILTIN_TRAINING_TASK_TYPE, config.job_spec(), function),
        }
    }

    pub fn from_custom(config: CustomTrainingConfig, function: TaskFunction) -> Self {
        Self {
            task: FunctionTask::new(CUSTOM_TRAINING_TASK_TYPE, config.job_spec(), function),
        }
    }

    pub fn job_spec(&self) -> &TrainingJobSpec {
        self.task.config()
    }
}

impl ExecutableTask for TrainingJobTask {
    fn name(&self) -> &str {
        self.task.name()
    }

    fn task_type(&self) -> &str {
        self.task.task_type()
    }

    fn backend_settings(&self, _settings: &SerializationSettings) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    fn custom(&self, _settings: &SerializationSettings) -> Option<Vec<u8>> {
        Some(self.task.config().encode_wire())
    }

    fn execute(&self, inputs: Value) -> CoreResult<Value> {
        let algorithm = self
            .task
            .config()
            .algorithm_specification()
            .algorithm_name();
        if algorithm.is_builtin() {
            return Err(CoreError {
                entity: None,
                field: None,
                configuration: None,
                kind: CoreErrorKind::Execution,
                message: format!(
                    "task '{}' uses the built-in '{}' algorithm and only runs on the engine",
                    self.task.name(),
                    algorithm.as_str()
                ),
            });
        }

        self.task.execute(inputs)
    }
}

pub fn register(registry: &ConfigurationRegistry) -> CoreResult<()> {
    registry.register(|config: BuiltinTrainingConfig, function| {
        Ok(TrainingJobTask::from_builtin(config, function))
    })?;
    registry.register(|config: CustomTrainingConfig, function| {
        Ok(TrainingJobTask::from_custom(config, function))
    })
}
