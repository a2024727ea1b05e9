#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceEntry {
    #[prost(enumeration = "ResourceName", tag = "1")]
    pub name: i32,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Resources {
    #[prost(message, repeated, tag = "1")]
    pub requests: Vec<ResourceEntry>,
    #[prost(message, repeated, tag = "2")]
    pub limits: Vec<ResourceEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResourceName {
    Unknown = 0,
    Cpu = 1,
    Gpu = 2,
    Memory = 3,
    Storage = 4,
    EphemeralStorage = 5,
}
