use crate::mapping::{WireMapped, map_sequence, unmap_sequence};
use crate::models::{CoreError, CoreResult, ResourceEntry, ResourceName, ResourceRequest};
use crate::wire;

const RESOURCE_ENTRY: &str = "ResourceEntry";

pub(crate) fn resource_name_to_wire(name: ResourceName) -> wire::resources::ResourceName {
    match name {
        ResourceName::Cpu => wire::resources::ResourceName::Cpu,
        ResourceName::Gpu => wire::resources::ResourceName::Gpu,
        ResourceName::Memory => wire::resources::ResourceName::Memory,
        ResourceName::Storage => wire::resources::ResourceName::Storage,
        ResourceName::EphemeralStorage => wire::resources::ResourceName::EphemeralStorage,
    }
}

/// `UNKNOWN` is the wire default and has no entity counterpart.
pub(crate) fn resource_name_from_wire(value: i32) -> CoreResult<ResourceName> {
    match wire::resources::ResourceName::try_from(value) {
        Ok(wire::resources::ResourceName::Cpu) => Ok(ResourceName::Cpu),
        Ok(wire::resources::ResourceName::Gpu) => Ok(ResourceName::Gpu),
        Ok(wire::resources::ResourceName::Memory) => Ok(ResourceName::Memory),
        Ok(wire::resources::ResourceName::Storage) => Ok(ResourceName::Storage),
        Ok(wire::resources::ResourceName::EphemeralStorage) => Ok(ResourceName::EphemeralStorage),
        Ok(wire::resources::ResourceName::Unknown) | Err(_) => Err(
            CoreError::unrecognized_wire_value(RESOURCE_ENTRY, "name", value),
        ),
    }
}

impl WireMapped for ResourceEntry {
    type Wire = wire::resources::ResourceEntry;

    fn to_wire(&self) -> Self::Wire {
        wire::resources::ResourceEntry {
            name: resource_name_to_wire(self.name()) as i32,
            value: self.value().to_string(),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        Ok(ResourceEntry::new(
            resource_name_from_wire(message.name)?,
            message.value,
        ))
    }
}

impl WireMapped for ResourceRequest {
    type Wire = wire::resources::Resources;

    fn to_wire(&self) -> Self::Wire {
        wire::resources::Resources {
            requests: map_sequence(self.requests()),
            limits: map_sequence(self.limits()),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        Ok(ResourceRequest::new(
            unmap_sequence(message.requests)?,
            unmap_sequence(message.limits)?,
        ))
    }
}
