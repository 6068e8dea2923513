use mongodb::bson;
use thiserror::Error;
use bson::ser::Error as BsonError;
use bson::de::Error as BsonDeError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] BsonError),

    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] BsonDeError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ----------------------------- TESTS --------------------------------
