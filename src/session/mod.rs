pub mod coordinator;
pub mod model;
