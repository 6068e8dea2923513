pub mod domain;
pub mod utils;
