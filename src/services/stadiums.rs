//! Venue lookups. These are the only queries served by api-football
//! (Provider B); football-data.org has no venue endpoint. The daily
//! quota makes the 7-day TTL and the list-to-single cache seeding
//! worthwhile.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{cache_capacity, cache_ttl};
use crate::dto::api_football as af;
use crate::error::ApiError;
use crate::models::Stadium;

#[derive(Debug)]
pub struct StadiumsService {
    gateway: Arc<ApiGateway>,
    venues: TtlCache<Stadium>,
    venue_lists: TtlCache<Vec<Stadium>>,
}

impl StadiumsService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            venues: TtlCache::new(
                "venues",
                cache_capacity::STADIUMS,
                Duration::from_secs(cache_ttl::STADIUMS_SECONDS),
            ),
            venue_lists: TtlCache::new(
                "venue_lists",
                cache_capacity::STADIUMS,
                Duration::from_secs(cache_ttl::STADIUMS_SECONDS),
            ),
        }
    }

    /// Fetches a single venue by id, cached for 7 days.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidResponse`] when the provider answers
    /// with an empty response array for the id.
    #[instrument(skip(self))]
    pub async fn stadium(&self, id: &str) -> Result<Stadium, ApiError> {
        if let Some(cached) = self.venues.get(id).await {
            debug!("Venue cache hit for id {}", id);
            return Ok(cached);
        }

        let endpoint = format!("venues?id={id}");
        let response: af::VenuesResponse =
            self.gateway.fetch(Provider::ApiFootball, &endpoint).await?;

        let Some(venue) = response.response.first() else {
            return Err(ApiError::invalid_response(endpoint));
        };
        let stadium = map_stadium(venue);
        info!("Fetched venue {}", stadium.name);

        self.venues.put(id.to_string(), stadium.clone()).await;
        Ok(stadium)
    }

    /// Fetches venues, optionally filtered by country, cached for 7 days.
    /// A country with zero venues yields (and caches) an empty list.
    /// Every returned venue also seeds the single-venue cache.
    #[instrument(skip(self))]
    pub async fn stadiums(&self, country: Option<&str>) -> Result<Vec<Stadium>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(country) = country {
            params.push(("country", country.to_string()));
        }
        let endpoint = match country {
            Some(country) => format!("venues?country={country}"),
            None => "venues".to_string(),
        };
        let key = fingerprint("venues", &params);

        if let Some(cached) = self.venue_lists.get(&key).await {
            debug!("Venue list cache hit: {} venues", cached.len());
            return Ok(cached);
        }

        let response: af::VenuesResponse =
            self.gateway.fetch(Provider::ApiFootball, &endpoint).await?;
        let stadiums: Vec<Stadium> = response.response.iter().map(map_stadium).collect();
        info!(
            "Fetched {} venues (country={})",
            stadiums.len(),
            country.unwrap_or("all")
        );

        self.venue_lists.put(key, stadiums.clone()).await;
        for stadium in &stadiums {
            self.venues.put(stadium.id.clone(), stadium.clone()).await;
        }
        Ok(stadiums)
    }
}

fn map_stadium(venue: &af::Venue) -> Stadium {
    Stadium {
        id: venue.id.to_string(),
        name: venue.name.clone(),
        city: venue.city.clone(),
        country: venue.country.clone(),
        capacity: venue.capacity,
        image_url: venue.image.clone(),
        address: venue.address.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_stadium_fields() {
        let venue: af::Venue = serde_json::from_value(serde_json::json!({
            "id": 556, "name": "Old Trafford", "city": "Manchester",
            "country": "England", "address": "Sir Matt Busby Way",
            "capacity": 76212, "image": null
        }))
        .unwrap();

        let stadium = map_stadium(&venue);
        assert_eq!(stadium.id, "556");
        assert_eq!(stadium.capacity, Some(76212));
        assert_eq!(stadium.city.as_deref(), Some("Manchester"));
    }
}
