//! Nothing is registered on import; call [`register_builtin_plugins`] once at startup.

pub mod batch;
pub mod cluster;
pub mod training;

use jobspec_core::models::CoreResult;
use jobspec_core::registry::ConfigurationRegistry;

pub use batch::{BATCH_TASK_TYPE, BatchConfig, BatchTask};
pub use cluster::{CLUSTER_TASK_TYPE, ClusterConfig, ClusterTask};
pub use training::{
    BUILTIN_TRAINING_TASK_TYPE, BuiltinTrainingConfig, CUSTOM_TRAINING_TASK_TYPE,
    CustomTrainingConfig, TrainingJobTask,
};

pub fn register_builtin_plugins(registry: &ConfigurationRegistry) -> CoreResult<()> {
    batch::register(registry)?;
    cluster::register(registry)?;
    training::register(registry)?;
    tracing::info!("registered builtin task plugins");
    Ok(())
}
