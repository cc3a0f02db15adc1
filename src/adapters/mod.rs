// Adapters layer: concrete implementations for external systems.

pub mod gmaps;
pub mod landmarks;
pub mod storage;
