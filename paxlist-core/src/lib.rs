pub mod passenger;
pub mod manifest;
pub mod repository;
pub mod service;

pub use manifest::{FlightManifest, ManifestPassenger, SpecialNeed};
pub use passenger::{Affiliation, Infant, Passenger};
pub use repository::PassengerRepository;
pub use service::ManifestService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} is required")]
    MissingParameter(&'static str),
    #[error("No passengers found")]
    NotFound,
    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
