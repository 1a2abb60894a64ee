pub mod models;
pub mod probe;
