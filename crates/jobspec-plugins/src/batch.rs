use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jobspec_core::models::{CoreError, CoreResult};
use jobspec_core::registry::ConfigurationRegistry;
use jobspec_core::task::{
    ExecutableTask, FunctionTask, SerializationSettings, TaskConfiguration, TaskFunction,
};
use jobspec_core::wire::array::ArrayJob;
use prost::Message;

pub const BATCH_TASK_TYPE: &str = "aws-batch";

const BATCH_CONFIG: &str = "BatchConfig";

/// `job_definition` is passed through to the batch service untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BatchConfigFields")]
pub struct BatchConfig {
    job_definition: BTreeMap<String, String>,
    concurrency: Option<u32>,
    min_success_ratio: Option<f32>,
}

#[derive(Deserialize)]
struct BatchConfigFields {
    #[serde(default)]
    job_definition: Option<BTreeMap<String, String>>,
    #[serde(default)]
    concurrency: Option<u32>,
    #[serde(default)]
    min_success_ratio: Option<f32>,
}

impl TryFrom<BatchConfigFields> for BatchConfig {
    type Error = CoreError;

    fn try_from(fields: BatchConfigFields) -> Result<Self, Self::Error> {
        let config = Self::new(fields.job_definition.unwrap_or_default());
        let config = match fields.concurrency {
            Some(concurrency) => config.with_concurrency(concurrency),
            None => config,
        };
        match fields.min_success_ratio {
            Some(ratio) => config.with_min_success_ratio(ratio),
            None => Ok(config),
        }
    }
}

impl BatchConfig {
    pub fn new(job_definition: BTreeMap<String, String>) -> Self {
        Self {
            job_definition,
            concurrency: None,
            min_success_ratio: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: u32) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn with_min_success_ratio(mut self, ratio: f32) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(CoreError::construction(
                BATCH_CONFIG,
                "min_success_ratio",
                format!("min success ratio {ratio} must lie within [0, 1]"),
            ));
        }
        self.min_success_ratio = Some(ratio);
        Ok(self)
    }

    pub fn job_definition(&self) -> &BTreeMap<String, String> {
        &self.job_definition
    }

    pub fn concurrency(&self) -> Option<u32> {
        self.concurrency
    }

    pub fn min_success_ratio(&self) -> Option<f32> {
        self.min_success_ratio
    }

    fn array_job(&self) -> Option<ArrayJob> {
        if self.concurrency.is_none() && self.min_success_ratio.is_none() {
            return None;
        }

        // size is filled in by the engine once the mapped inputs are known
        Some(ArrayJob {
            parallelism: self.concurrency.map(i64::from),
            size: 0,
            min_success_ratio: self.min_success_ratio,
        })
    }
}

impl TaskConfiguration for BatchConfig {}

pub struct BatchTask {
    task: FunctionTask<BatchConfig>,
}

impl BatchTask {
    pub fn new(config: BatchConfig, function: TaskFunction) -> Self {
        Self {
            task: FunctionTask::new(BATCH_TASK_TYPE, config, function),
        }
    }

    pub fn config(&self) -> &BatchConfig {
        self.task.config()
    }
}

impl ExecutableTask for BatchTask {
    fn name(&self) -> &str {
        self.task.name()
    }

    fn task_type(&self) -> &str {
        self.task.task_type()
    }

    fn backend_settings(&self, _settings: &SerializationSettings) -> BTreeMap<String, String> {
        self.task.config().job_definition().clone()
    }

    fn custom(&self, _settings: &SerializationSettings) -> Option<Vec<u8>> {
        self.task
            .config()
            .array_job()
            .map(|array_job| array_job.encode_to_vec())
    }

    fn execute(&self, inputs: Value) -> CoreResult<Value> {
        self.task.execute(inputs)
    }
}

pub fn register(registry: &ConfigurationRegistry) -> CoreResult<()> {
    registry.register(|config: BatchConfig, function| Ok(BatchTask::new(config, function)))
}
