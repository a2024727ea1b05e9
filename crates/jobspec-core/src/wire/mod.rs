pub mod array;
pub mod cluster;
pub mod resources;
pub mod training;
