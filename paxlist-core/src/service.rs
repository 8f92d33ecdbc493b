use std::sync::Arc;
use tracing::debug;

use crate::manifest::{FlightManifest, ManifestPassenger, SpecialNeed};
use crate::passenger::Passenger;
use crate::repository::PassengerRepository;
use crate::{CoreError, CoreResult};

/// Assembles flight manifests from the passenger tables
#[derive(Clone)]
pub struct ManifestService {
    repo: Arc<dyn PassengerRepository>,
}

impl ManifestService {
    pub fn new(repo: Arc<dyn PassengerRepository>) -> Self {
        Self { repo }
    }

    /// Build the manifest for `flight_id`.
    ///
    /// A missing or empty identifier fails with `MissingParameter` before any
    /// query is issued. A flight without passengers fails with `NotFound`.
    pub async fn get_manifest(&self, flight_id: Option<&str>) -> CoreResult<FlightManifest> {
        let flight_id = match flight_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(CoreError::MissingParameter("flightId")),
        };

        let passengers = self
            .repo
            .find_passengers_by_flight(flight_id)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        if passengers.is_empty() {
            debug!("No passengers for flight {}", flight_id);
            return Err(CoreError::NotFound);
        }

        let mut entries = Vec::with_capacity(passengers.len());
        for pax in passengers {
            entries.push(self.assemble_passenger(pax).await?);
        }

        debug!("Assembled manifest for {} with {} passengers", flight_id, entries.len());

        Ok(FlightManifest {
            flight_id: flight_id.to_string(),
            passenger_count: entries.len(),
            passengers: entries,
        })
    }

    async fn assemble_passenger(&self, pax: Passenger) -> CoreResult<ManifestPassenger> {
        let affiliate_group = self
            .repo
            .find_affiliations_by_passenger(&pax.pax_id)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
            .into_iter()
            .map(|a| a.affiliate_id)
            .collect();

        // Only the presence of the infant row matters, not its flag.
        let infant = self
            .repo
            .find_infant_by_passenger(&pax.pax_id)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let mut special_needs = Vec::new();
        if infant.is_some() {
            special_needs.push(SpecialNeed::Infant);
        }

        Ok(ManifestPassenger {
            pax_id: pax.pax_id,
            full_name: pax.full_name,
            age: pax.age,
            pax_type: pax.pax_type,
            seat: pax.seat,
            affiliate_group,
            special_needs,
        })
    }
}
