pub mod logging;
pub mod mapping;
pub mod models;
pub mod registry;
pub mod task;
pub mod wire;
