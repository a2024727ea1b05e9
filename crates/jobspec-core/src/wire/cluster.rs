use crate::wire::resources::Resources;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Scheduler {
    #[prost(string, optional, tag = "1")]
    pub image: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub resources: Option<Resources>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WorkerGroup {
    #[prost(uint32, optional, tag = "1")]
    pub number_of_workers: Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub image: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub resources: Option<Resources>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClusterJob {
    #[prost(message, optional, tag = "1")]
    pub scheduler: Option<Scheduler>,
    #[prost(message, optional, tag = "2")]
    pub workers: Option<WorkerGroup>,
}
