pub mod app_config;
pub mod database;
pub mod passenger_repo;
pub mod seed;

pub use database::DbClient;
pub use passenger_repo::SqlitePassengerRepository;
