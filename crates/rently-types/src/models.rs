use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A property-listing publisher account.
///
/// Login responses carry the record verbatim, password included. Existing
/// wire behavior the frontend depends on (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub phone: String,
    pub password: String,
}

/// A property-browsing consumer account. Lives in its own namespace: the
/// same phone may exist as both an owner and a renter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Renter {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub password: String,
}

/// A single rental/sale listing. Immutable once created, except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub owner_name: String,
    pub mobile: String,
    pub location: String,
    pub price: Option<f64>,
    pub rent: Option<f64>,
    pub description: String,
    pub floor: String,
    pub kitchen: String,
    pub bedroom: String,
    pub hall: String,
    pub garden: String,
    pub water_supply: String,
    /// Durable media-host URLs, in upload order.
    pub image_url: Vec<String>,
    /// Maps link derived from coordinates embedded in `location`, or empty.
    pub map_link: String,
    pub date: DateTime<Utc>,
}
