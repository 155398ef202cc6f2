//! Response shapes for the api-football v3 API (Provider B).

use serde::Deserialize;

/// api-football wraps every payload in a `response` array.
#[derive(Debug, Clone, Deserialize)]
pub struct VenuesResponse {
    pub response: Vec<Venue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venues_response_deserializes() {
        let json = r#"{
            "response": [
                {"id": 556, "name": "Old Trafford", "city": "Manchester",
                 "country": "England", "address": "Sir Matt Busby Way",
                 "capacity": 76212, "image": "https://media.api-sports.io/football/venues/556.png"}
            ]
        }"#;
        let resp: VenuesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.len(), 1);
        assert_eq!(resp.response[0].capacity, Some(76212));
    }

    #[test]
    fn test_empty_response_array_is_valid() {
        let resp: VenuesResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert!(resp.response.is_empty());
    }
}
