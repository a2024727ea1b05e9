#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArrayJob {
    #[prost(int64, optional, tag = "1")]
    pub parallelism: Option<i64>,
    #[prost(int64, tag = "2")]
    pub size: i64,
    #[prost(float, optional, tag = "4")]
    pub min_success_ratio: Option<f32>,
}
