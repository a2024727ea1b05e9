use crate::mapping::WireMapped;
use crate::models::{
    ClusterJobSpec, CoreError, CoreResult, ResourceRequest, SchedulerSpec, WorkerGroupSpec,
};
use crate::wire;

impl WireMapped for SchedulerSpec {
    type Wire = wire::cluster::Scheduler;

    fn to_wire(&self) -> Self::Wire {
        wire::cluster::Scheduler {
            image: self.image().map(str::to_string),
            resources: self.resources().map(WireMapped::to_wire),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        Ok(SchedulerSpec::new(
            message.image,
            message.resources.map(ResourceRequest::from_wire).transpose()?,
        ))
    }
}

impl WireMapped for WorkerGroupSpec {
    type Wire = wire::cluster::WorkerGroup;

    fn to_wire(&self) -> Self::Wire {
        wire::cluster::WorkerGroup {
            number_of_workers: self.worker_count(),
            image: self.image().map(str::to_string),
            resources: self.resources().map(WireMapped::to_wire),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        Ok(WorkerGroupSpec::new(
            message.number_of_workers,
            message.image,
            message.resources.map(ResourceRequest::from_wire).transpose()?,
        ))
    }
}

impl WireMapped for ClusterJobSpec {
    type Wire = wire::cluster::ClusterJob;

    fn to_wire(&self) -> Self::Wire {
        wire::cluster::ClusterJob {
            scheduler: Some(self.scheduler().to_wire()),
            workers: Some(self.workers().to_wire()),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        let scheduler = message
            .scheduler
            .ok_or_else(|| CoreError::missing_wire_field(ClusterJobSpec::ENTITY, "scheduler"))?;
        let workers = message
            .workers
            .ok_or_else(|| CoreError::missing_wire_field(ClusterJobSpec::ENTITY, "workers"))?;

        Ok(ClusterJobSpec::new(
            SchedulerSpec::from_wire(scheduler)?,
            WorkerGroupSpec::from_wire(workers)?,
        ))
    }
}
