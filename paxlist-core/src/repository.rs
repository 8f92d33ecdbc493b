use async_trait::async_trait;
use crate::passenger::{Affiliation, Infant, Passenger};

/// Read-only access to the passenger tables
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Passengers of a flight, in retrieval order.
    async fn find_passengers_by_flight(
        &self,
        flight_id: &str,
    ) -> Result<Vec<Passenger>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_affiliations_by_passenger(
        &self,
        pax_id: &str,
    ) -> Result<Vec<Affiliation>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_infant_by_passenger(
        &self,
        pax_id: &str,
    ) -> Result<Option<Infant>, Box<dyn std::error::Error + Send + Sync>>;
}
