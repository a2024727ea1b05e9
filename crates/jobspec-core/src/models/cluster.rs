use serde::{Deserialize, Serialize};

use crate::models::ResourceRequest;

/// Scheduler pod settings. `None` leaves the choice to the engine.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SchedulerSpec {
    image: Option<String>,
    resources: Option<ResourceRequest>,
}

impl SchedulerSpec {
    pub const ENTITY: &'static str = "SchedulerSpec";

    pub fn new(image: Option<String>, resources: Option<ResourceRequest>) -> Self {
        Self { image, resources }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn resources(&self) -> Option<&ResourceRequest> {
        self.resources.as_ref()
    }
}

/// Worker group settings. A `worker_count` of `Some(0)` is a real request for
/// zero workers and is distinct from `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WorkerGroupSpec {
    worker_count: Option<u32>,
    image: Option<String>,
    resources: Option<ResourceRequest>,
}

impl WorkerGroupSpec {
    pub const ENTITY: &'static str = "WorkerGroupSpec";

    pub fn new(
        worker_count: Option<u32>,
        image: Option<String>,
        resources: Option<ResourceRequest>,
    ) -> Self {
        Self {
            worker_count,
            image,
            resources,
        }
    }

    pub fn worker_count(&self) -> Option<u32> {
        self.worker_count
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn resources(&self) -> Option<&ResourceRequest> {
        self.resources.as_ref()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClusterJobSpec {
    scheduler: SchedulerSpec,
    workers: WorkerGroupSpec,
}

impl ClusterJobSpec {
    pub const ENTITY: &'static str = "ClusterJobSpec";

    pub fn new(scheduler: SchedulerSpec, workers: WorkerGroupSpec) -> Self {
        Self { scheduler, workers }
    }

    pub fn scheduler(&self) -> &SchedulerSpec {
        &self.scheduler
    }

    pub fn workers(&self) -> &WorkerGroupSpec {
        &self.workers
    }
}
