pub mod cluster;
pub mod resources;
pub mod training;

use prost::Message;

use crate::models::CoreResult;

// Repeated wire fields cannot tell an empty sequence from an absent one.
pub trait WireMapped: Sized {
    type Wire: Message + Default;

    fn to_wire(&self) -> Self::Wire;

    fn from_wire(message: Self::Wire) -> CoreResult<Self>;

    fn encode_wire(&self) -> Vec<u8> {
        self.to_wire().encode_to_vec()
    }

    fn decode_wire(bytes: &[u8]) -> CoreResult<Self> {
        let message = Self::Wire::decode(bytes)?;
        Self::from_wire(message)
    }
}

pub(crate) fn map_sequence<E: WireMapped>(entities: &[E]) -> Vec<E::Wire> {
    entities.iter().map(WireMapped::to_wire).collect()
}

pub(crate) fn unmap_sequence<E: WireMapped>(messages: Vec<E::Wire>) -> CoreResult<Vec<E>> {
    messages.into_iter().map(E::from_wire).collect()
}
