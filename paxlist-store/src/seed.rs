use paxlist_core::repository::PassengerRepository;
use paxlist_core::{Affiliation, Infant, Passenger};
use tracing::info;

use crate::passenger_repo::{self, SqlitePassengerRepository};

pub const DEMO_FLIGHT_ID: &str = "TK1938";

/// Seed the TK1938 demo manifest: an adult travelling with an infant.
///
/// Does nothing when the flight already has passengers, so it is safe to run
/// on every startup.
pub async fn seed_demo_flight(
    repo: &SqlitePassengerRepository,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if !repo.find_passengers_by_flight(DEMO_FLIGHT_ID).await?.is_empty() {
        info!("Demo flight {} already seeded, skipping", DEMO_FLIGHT_ID);
        return Ok(());
    }

    let passengers = [
        Passenger {
            pax_id: "P001".to_string(),
            flight_id: DEMO_FLIGHT_ID.to_string(),
            full_name: "Ayse Korkmaz".to_string(),
            age: 32,
            pax_type: "adult".to_string(),
            seat: Some("12A".to_string()),
            special_needs: None,
        },
        Passenger {
            pax_id: "P002".to_string(),
            flight_id: DEMO_FLIGHT_ID.to_string(),
            full_name: "Mehmet Korkmaz".to_string(),
            age: 2,
            pax_type: "infant".to_string(),
            seat: None,
            special_needs: None,
        },
    ];

    // All or nothing: a partial flight would be skipped by the guard above.
    let mut tx = repo.pool().begin().await?;

    for pax in &passengers {
        passenger_repo::insert_passenger(&mut *tx, pax).await?;
    }

    // Both directions, the store does not mirror
    for (pax_id, affiliate_id) in [("P001", "P002"), ("P002", "P001")] {
        passenger_repo::insert_affiliation(&mut *tx, &Affiliation {
            pax_id: pax_id.to_string(),
            affiliate_id: affiliate_id.to_string(),
        })
        .await?;
    }

    passenger_repo::insert_infant(&mut *tx, &Infant {
        pax_id: "P002".to_string(),
        requires_seat: false,
    })
    .await?;

    tx.commit().await?;

    info!("Seeded demo flight {} with {} passengers", DEMO_FLIGHT_ID, passengers.len());
    Ok(())
}
