use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialNeed {
    Infant,
}

impl SpecialNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infant => "infant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightManifest {
    pub flight_id: String,
    pub passenger_count: usize,
    pub passengers: Vec<ManifestPassenger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestPassenger {
    pub pax_id: String,
    pub full_name: String,
    pub age: u32,
    #[serde(rename = "type")]
    pub pax_type: String,
    pub seat: Option<String>,
    pub affiliate_group: Vec<String>,
    pub special_needs: Vec<SpecialNeed>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_serialization_shape() {
        let manifest = FlightManifest {
            flight_id: "TK1938".to_string(),
            passenger_count: 1,
            passengers: vec![ManifestPassenger {
                pax_id: "P002".to_string(),
                full_name: "Mehmet Korkmaz".to_string(),
                age: 2,
                pax_type: "infant".to_string(),
                seat: None,
                affiliate_group: vec!["P001".to_string()],
                special_needs: vec![SpecialNeed::Infant],
            }],
        };

        let value = serde_json::to_value(&manifest).expect("Failed to serialize");
        assert_eq!(
            value,
            json!({
                "flightId": "TK1938",
                "passengerCount": 1,
                "passengers": [{
                    "paxId": "P002",
                    "fullName": "Mehmet Korkmaz",
                    "age": 2,
                    "type": "infant",
                    "seat": null,
                    "affiliateGroup": ["P001"],
                    "specialNeeds": ["infant"]
                }]
            })
        );
    }

    #[test]
    fn test_special_need_label() {
        assert_eq!(SpecialNeed::Infant.as_str(), "infant");
    }
}
