use serde::{Deserialize, Serialize};

/// A passenger booked on a single flight. `pax_id` is unique across flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub pax_id: String,
    pub flight_id: String,
    pub full_name: String,
    pub age: u32,
    pub pax_type: String, // "adult", "child", "infant", ...
    pub seat: Option<String>,
    /// Free-text notes. Not used when building a manifest.
    pub special_needs: Option<String>,
}

/// Directed "traveling together" edge. The reverse row is a separate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    pub pax_id: String,
    pub affiliate_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infant {
    pub pax_id: String,
    pub requires_seat: bool,
}
