pub mod cluster;
pub mod error;
pub mod resources;
pub mod training;

pub use cluster::{ClusterJobSpec, SchedulerSpec, WorkerGroupSpec};
pub use error::{CoreError, CoreErrorKind, CoreResult};
pub use resources::{ResourceEntry, ResourceName, ResourceRequest};
pub use training::{
    AlgorithmName, AlgorithmSpecification, InputMode, MetricDefinition, ResourceConfig,
    TrainingJobSpec,
};
