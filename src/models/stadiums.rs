use serde::{Deserialize, Serialize};

/// A venue, sourced exclusively from api-football; football-data.org has
/// no venue endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub address: Option<String>,
}
