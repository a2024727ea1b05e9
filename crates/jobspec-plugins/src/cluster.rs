use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jobspec_core::mapping::WireMapped;
use jobspec_core::models::{ClusterJobSpec, CoreResult, SchedulerSpec, WorkerGroupSpec};
use jobspec_core::registry::ConfigurationRegistry;
use jobspec_core::task::{
    ExecutableTask, FunctionTask, SerializationSettings, TaskConfiguration, TaskFunction,
};

pub const CLUSTER_TASK_TYPE: &str = "dask";

/// Scheduler and default worker group for a distributed cluster task. Unset
/// images, resources and worker counts are decided by the engine.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default)]
    scheduler: SchedulerSpec,
    #[serde(default)]
    workers: WorkerGroupSpec,
}

impl ClusterConfig {
    pub fn new(scheduler: SchedulerSpec, workers: WorkerGroupSpec) -> Self {
        Self { scheduler, workers }
    }

    pub fn scheduler(&self) -> &SchedulerSpec {
        &self.scheduler
    }

    pub fn workers(&self) -> &WorkerGroupSpec {
        &self.workers
    }

    pub fn job_spec(&self) -> ClusterJobSpec {
        ClusterJobSpec::new(self.scheduler.clone(), self.workers.clone())
    }
}

impl TaskConfiguration for ClusterConfig {}

pub struct ClusterTask {
    task: FunctionTask<ClusterJobSpec>,
}

impl ClusterTask {
    pub fn new(config: ClusterConfig, function: TaskFunction) -> Self {
        Self {
            task: FunctionTask::new(CLUSTER_TASK_TYPE, config.job_spec(), function),
        }
    }

    pub fn job_spec(&self) -> &ClusterJobSpec {
        self.task.config()
    }
}

impl ExecutableTask for ClusterTask {
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
        self.task.execute(inputs)
    }
}

pub fn register(registry: &ConfigurationRegistry) -> CoreResult<()> {
    registry.register(|config: ClusterConfig, function| Ok(ClusterTask::new(config, function)))
}
