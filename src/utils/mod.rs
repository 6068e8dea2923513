pub mod errors;
pub mod config;

pub use errors::ModelError;
pub use config::{AppConfig, PetSort};
