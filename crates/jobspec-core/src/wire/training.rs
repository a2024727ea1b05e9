#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainingJobResourceConfig {
    #[prost(int64, tag = "1")]
    pub instance_count: i64,
    #[prost(string, tag = "2")]
    pub instance_type: String,
    #[prost(int64, tag = "3")]
    pub volume_size_in_gb: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricDefinition {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub regex: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlgorithmSpecification {
    #[prost(enumeration = "InputMode", tag = "1")]
    pub input_mode: i32,
    #[prost(enumeration = "AlgorithmName", tag = "2")]
    pub algorithm_name: i32,
    #[prost(string, tag = "3")]
    pub algorithm_version: String,
    #[prost(message, repeated, tag = "4")]
    pub metric_definitions: Vec<MetricDefinition>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainingJob {
    #[prost(message, optional, tag = "1")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[prost(message, optional, tag = "2")]
    pub training_job_resource_config: Option<TrainingJobResourceConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InputMode {
    File = 0,
    Pipe = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AlgorithmName {
    Custom = 0,
    Xgboost = 1,
}
