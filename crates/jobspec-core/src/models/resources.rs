use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceName {
    Cpu,
    Gpu,
    Memory,
    Storage,
    EphemeralStorage,
}

impl ResourceName {
    pub const ALL: [ResourceName; 5] = [
        ResourceName::Cpu,
        ResourceName::Gpu,
        ResourceName::Memory,
        ResourceName::Storage,
        ResourceName::EphemeralStorage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Memory => "memory",
            Self::Storage => "storage",
            Self::EphemeralStorage => "ephemeral_storage",
        }
    }
}

impl std::str::FromStr for ResourceName {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cpu" => Ok(Self::Cpu),
            "gpu" => Ok(Self::Gpu),
            "memory" => Ok(Self::Memory),
            "storage" => Ok(Self::Storage),
            "ephemeral_storage" => Ok(Self::EphemeralStorage),
            _ => Err(()),
        }
    }
}

/// One quantity such as `cpu = "2"` or `memory = "4Gi"`. The value is passed
/// through as written; quantity parsing belongs to the engine.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ResourceEntry {
    name: ResourceName,
    value: String,
}

impl ResourceEntry {
    pub fn new(name: ResourceName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> ResourceName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ResourceRequest {
    #[serde(default)]
    requests: Vec<ResourceEntry>,
    #[serde(default)]
    limits: Vec<ResourceEntry>,
}

impl ResourceRequest {
    pub fn new(requests: Vec<ResourceEntry>, limits: Vec<ResourceEntry>) -> Self {
        Self { requests, limits }
    }

    pub fn requests(&self) -> &[ResourceEntry] {
        &self.requests
    }

    pub fn limits(&self) -> &[ResourceEntry] {
        &self.limits
    }

    pub fn request(&self, name: ResourceName) -> Option<&str> {
        self.requests
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn limit(&self, name: ResourceName) -> Option<&str> {
        self.limits
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }
}
